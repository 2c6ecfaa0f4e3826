//! Account use-cases.
//!
//! Creation and updates hash plain passwords through the `Encrypter` before anything
//! reaches the repository, and both reject an email already held by another account,
//! whether the lookup finds it or the unique index catches a concurrent claim.

use std::sync::Arc;

use async_trait::async_trait;

use crate::server::{
    data::account::AccountRepository,
    error::domain::{DomainError, UseCaseError},
    model::account::{Account, AccountProps, CreateAccountParam, UpdateAccountParam},
    util::encrypter::Encrypter,
};

const RESOURCE: &str = "Account";

#[async_trait]
pub trait CreateAccount: Send + Sync {
    async fn execute(&self, param: CreateAccountParam) -> Result<Account, UseCaseError>;
}

#[async_trait]
pub trait GetAccounts: Send + Sync {
    async fn execute(&self) -> Result<Vec<Account>, UseCaseError>;
}

#[async_trait]
pub trait GetAccountById: Send + Sync {
    async fn execute(&self, id: &str) -> Result<Option<Account>, UseCaseError>;
}

#[async_trait]
pub trait GetAccountByEmail: Send + Sync {
    async fn execute(&self, email: &str) -> Result<Option<Account>, UseCaseError>;
}

#[async_trait]
pub trait UpdateAccount: Send + Sync {
    async fn execute(&self, id: &str, param: UpdateAccountParam) -> Result<(), UseCaseError>;
}

#[async_trait]
pub trait DeleteAccount: Send + Sync {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError>;
}

pub struct DbCreateAccount {
    encrypter: Arc<dyn Encrypter>,
    account_repository: Arc<dyn AccountRepository>,
}

impl DbCreateAccount {
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            account_repository,
        }
    }
}

#[async_trait]
impl CreateAccount for DbCreateAccount {
    /// Creates an account with a hashed password.
    ///
    /// # Returns
    /// - `Ok(Account)` - The stored account, role `USER` unless another role was given
    /// - `Err(UseCaseError::Domain(EmailInUse))` - Email already registered
    /// - `Err(UseCaseError::Repository)` - Database error
    /// - `Err(UseCaseError::Internal)` - Password hashing failed
    async fn execute(&self, param: CreateAccountParam) -> Result<Account, UseCaseError> {
        if self
            .account_repository
            .get_by_email(&param.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailInUse.into());
        }

        let account = self
            .account_repository
            .create(AccountProps {
                email: param.email,
                password: self.encrypter.encrypt(&param.password)?,
                role: param.role.unwrap_or_default(),
                avatar: None,
            })
            .await
            .map_err(UseCaseError::from_write)?;

        Ok(account)
    }
}

pub struct DbGetAccounts {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbGetAccounts {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl GetAccounts for DbGetAccounts {
    async fn execute(&self) -> Result<Vec<Account>, UseCaseError> {
        Ok(self.account_repository.get().await?)
    }
}

pub struct DbGetAccountById {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbGetAccountById {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl GetAccountById for DbGetAccountById {
    async fn execute(&self, id: &str) -> Result<Option<Account>, UseCaseError> {
        Ok(self.account_repository.get_by_id(id).await?)
    }
}

pub struct DbGetAccountByEmail {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbGetAccountByEmail {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl GetAccountByEmail for DbGetAccountByEmail {
    async fn execute(&self, email: &str) -> Result<Option<Account>, UseCaseError> {
        Ok(self.account_repository.get_by_email(email).await?)
    }
}

pub struct DbUpdateAccount {
    encrypter: Arc<dyn Encrypter>,
    account_repository: Arc<dyn AccountRepository>,
}

impl DbUpdateAccount {
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            account_repository,
        }
    }
}

#[async_trait]
impl UpdateAccount for DbUpdateAccount {
    /// Applies a partial update, hashing a new password if one is supplied.
    ///
    /// # Returns
    /// - `Ok(())` - Update stored
    /// - `Err(UseCaseError::Domain(NotFound))` - No account with this id
    /// - `Err(UseCaseError::Domain(EmailInUse))` - New email belongs to another account
    /// - `Err(UseCaseError::Repository)` - Database error
    async fn execute(&self, id: &str, mut param: UpdateAccountParam) -> Result<(), UseCaseError> {
        if self.account_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        if let Some(email) = &param.email {
            if let Some(holder) = self.account_repository.get_by_email(email).await? {
                if holder.id() != id {
                    return Err(DomainError::EmailInUse.into());
                }
            }
        }

        param.password = param
            .password
            .map(|password| self.encrypter.encrypt(&password))
            .transpose()?;

        self.account_repository
            .update(id, param)
            .await
            .map_err(UseCaseError::from_write)?;

        Ok(())
    }
}

pub struct DbDeleteAccount {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbDeleteAccount {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl DeleteAccount for DbDeleteAccount {
    async fn execute(&self, id: &str) -> Result<(), UseCaseError> {
        if self.account_repository.get_by_id(id).await?.is_none() {
            return Err(UseCaseError::not_found(RESOURCE));
        }

        self.account_repository.delete(id).await?;

        Ok(())
    }
}
