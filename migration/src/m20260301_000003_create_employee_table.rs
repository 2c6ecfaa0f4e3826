use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(string(Employee::Id).primary_key())
                    .col(string(Employee::Nome))
                    .col(string_uniq(Employee::Email))
                    .col(string(Employee::Cargo))
                    .col(string_null(Employee::Telefone))
                    .col(string_null(Employee::Cpf))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Employee {
    Table,
    Id,
    Nome,
    Email,
    Cargo,
    Telefone,
    Cpf,
}
