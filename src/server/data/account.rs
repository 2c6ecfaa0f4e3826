//! Account data repository for database operations.
//!
//! Beyond the CRUD shared with other resources, accounts store the access token issued on
//! sign in, so the repository can look accounts up by token and replace or clear it.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    model::account::Role,
    server::model::account::{Account, AccountProps, UpdateAccountParam},
};

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account under a freshly generated identifier.
    async fn create(&self, props: AccountProps) -> Result<Account, DbErr>;

    async fn get(&self) -> Result<Vec<Account>, DbErr>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, DbErr>;

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DbErr>;

    async fn get_by_access_token(&self, token: &str) -> Result<Option<Account>, DbErr>;

    /// Merges the supplied fields into the stored account. Unknown ids are a no-op.
    async fn update(&self, id: &str, param: UpdateAccountParam) -> Result<(), DbErr>;

    /// Replaces the stored access token, `None` clears it.
    async fn update_access_token(&self, id: &str, token: Option<String>) -> Result<(), DbErr>;

    /// Removes the account. Unknown ids are a no-op.
    async fn delete(&self, id: &str) -> Result<(), DbErr>;
}

/// Repository providing database operations for account management.
#[derive(Clone)]
pub struct SeaOrmAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmAccountRepository {
    /// Creates a new SeaOrmAccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection, cloned handles share the pool
    ///
    /// # Returns
    /// - `SeaOrmAccountRepository` - New repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks if any admin accounts exist in the database.
    ///
    /// Used at startup to decide whether the configured admin account must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin account exists
    /// - `Ok(false)` - No admin accounts exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::Account::find()
            .filter(entity::account::Column::Role.eq(Role::Admin.as_str()))
            .count(&self.db)
            .await?;

        Ok(admin_count > 0)
    }
}

#[async_trait]
impl AccountRepository for SeaOrmAccountRepository {
    async fn create(&self, props: AccountProps) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            email: ActiveValue::Set(props.email),
            password: ActiveValue::Set(props.password),
            role: ActiveValue::Set(props.role.as_str().to_string()),
            avatar: ActiveValue::Set(props.avatar),
            access_token: ActiveValue::Set(None),
        }
        .insert(&self.db)
        .await?;

        Account::from_entity(entity)
    }

    async fn get(&self) -> Result<Vec<Account>, DbErr> {
        entity::prelude::Account::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(Account::from_entity)
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id)
            .one(&self.db)
            .await?;

        entity.map(Account::from_entity).transpose()
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        entity.map(Account::from_entity).transpose()
    }

    async fn get_by_access_token(&self, token: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::AccessToken.eq(token))
            .one(&self.db)
            .await?;

        entity.map(Account::from_entity).transpose()
    }

    async fn update(&self, id: &str, param: UpdateAccountParam) -> Result<(), DbErr> {
        let Some(entity) = entity::prelude::Account::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(());
        };

        let mut account: entity::account::ActiveModel = entity.into();
        if let Some(email) = param.email {
            account.email = ActiveValue::Set(email);
        }
        if let Some(password) = param.password {
            account.password = ActiveValue::Set(password);
        }
        if let Some(role) = param.role {
            account.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(avatar) = param.avatar {
            account.avatar = ActiveValue::Set(avatar);
        }

        if account.is_changed() {
            account.update(&self.db).await?;
        }

        Ok(())
    }

    async fn update_access_token(&self, id: &str, token: Option<String>) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Id.eq(id))
            .col_expr(entity::account::Column::AccessToken, Expr::value(token))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        entity::prelude::Account::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
