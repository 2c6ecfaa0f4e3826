//! Account factory for creating test account entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// The password is stored exactly as given, so tests that go through the sign-in flow
/// should create accounts via the sign-up endpoint instead.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AccountFactory::new(&db)
///     .email("admin@mail.com")
///     .admin()
///     .access_token("token")
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    password: String,
    role: String,
    avatar: Option<String>,
    access_token: Option<String>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - id: `"account-{id}"` where id is auto-incremented
    /// - email: `"account{id}@mail.com"`
    /// - password: `"password"`
    /// - role: `"USER"`
    /// - avatar and access token: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("account-{}", id),
            email: format!("account{}@mail.com", id),
            password: "password".to_string(),
            role: "USER".to_string(),
            avatar: None,
            access_token: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role column, `"ADMIN"` or `"USER"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Shorthand for `role("ADMIN")`.
    pub fn admin(self) -> Self {
        self.role("ADMIN")
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            role: ActiveValue::Set(self.role),
            avatar: ActiveValue::Set(self.avatar),
            access_token: ActiveValue::Set(self.access_token),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}
