use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Id).primary_key())
                    .col(integer(Student::Matricula))
                    .col(string(Student::Nome))
                    .col(string(Student::Status))
                    .col(string(Student::Serie))
                    .col(string_uniq(Student::Email))
                    .col(timestamp_with_time_zone(Student::Nascimento))
                    .col(string(Student::Sexo))
                    .col(string(Student::Endereco))
                    .col(string(Student::EmailResponsavel))
                    .col(string_null(Student::Cpf))
                    .col(string_null(Student::Rg))
                    .col(string_null(Student::NomeMae))
                    .col(string_null(Student::NomePai))
                    .col(string_null(Student::TelefoneMae))
                    .col(string_null(Student::TelefonePai))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Student {
    Table,
    Id,
    Matricula,
    Nome,
    Status,
    Serie,
    Email,
    Nascimento,
    Sexo,
    Endereco,
    EmailResponsavel,
    Cpf,
    Rg,
    NomeMae,
    NomePai,
    TelefoneMae,
    TelefonePai,
}
