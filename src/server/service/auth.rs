//! Authentication use-cases.
//!
//! Signing in issues an opaque token that is stored on the account; the token is the only
//! credential checked by the role middleware until sign out clears it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::server::{
    data::account::AccountRepository,
    error::domain::{DomainError, UseCaseError},
    model::account::{Account, AuthenticationParam},
    util::{encrypter::Encrypter, token::TokenGenerator},
};

#[async_trait]
pub trait Authenticate: Send + Sync {
    /// Returns the freshly issued access token.
    async fn execute(&self, param: AuthenticationParam) -> Result<String, UseCaseError>;
}

#[async_trait]
pub trait LoadAccountByToken: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Option<Account>, UseCaseError>;
}

#[async_trait]
pub trait RevokeAccessToken: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), UseCaseError>;
}

pub struct DbAuthenticate {
    encrypter: Arc<dyn Encrypter>,
    token_generator: Arc<dyn TokenGenerator>,
    account_repository: Arc<dyn AccountRepository>,
}

impl DbAuthenticate {
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        token_generator: Arc<dyn TokenGenerator>,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            token_generator,
            account_repository,
        }
    }
}

#[async_trait]
impl Authenticate for DbAuthenticate {
    /// Verifies the credentials and replaces the account's access token.
    ///
    /// # Returns
    /// - `Ok(String)` - New access token
    /// - `Err(UseCaseError::Domain(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(UseCaseError::Repository)` - Database error
    async fn execute(&self, param: AuthenticationParam) -> Result<String, UseCaseError> {
        let Some(account) = self.account_repository.get_by_email(&param.email).await? else {
            return Err(DomainError::InvalidCredentials.into());
        };

        if !self
            .encrypter
            .compare(&param.password, &account.props().password)
        {
            return Err(DomainError::InvalidCredentials.into());
        }

        let token = self.token_generator.generate();
        self.account_repository
            .update_access_token(account.id(), Some(token.clone()))
            .await?;

        tracing::debug!("Issued access token for account {}", account.id());

        Ok(token)
    }
}

pub struct DbLoadAccountByToken {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbLoadAccountByToken {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl LoadAccountByToken for DbLoadAccountByToken {
    async fn execute(&self, token: &str) -> Result<Option<Account>, UseCaseError> {
        Ok(self.account_repository.get_by_access_token(token).await?)
    }
}

pub struct DbRevokeAccessToken {
    account_repository: Arc<dyn AccountRepository>,
}

impl DbRevokeAccessToken {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }
}

#[async_trait]
impl RevokeAccessToken for DbRevokeAccessToken {
    /// Clears the token from whichever account holds it. Unknown tokens are a no-op.
    async fn execute(&self, token: &str) -> Result<(), UseCaseError> {
        if let Some(account) = self.account_repository.get_by_access_token(token).await? {
            self.account_repository
                .update_access_token(account.id(), None)
                .await?;
        }

        Ok(())
    }
}
