use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(string(Account::Id).primary_key())
                    .col(string_uniq(Account::Email))
                    .col(string(Account::Password))
                    .col(string(Account::Role).default("USER"))
                    .col(text_null(Account::Avatar))
                    .col(string_null(Account::AccessToken).unique_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Account {
    Table,
    Id,
    Email,
    Password,
    Role,
    Avatar,
    AccessToken,
}
