use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use crate::server::{
    data::{account::AccountRepository, in_memory::InMemoryRepository},
    model::account::{Account, AccountProps, UpdateAccountParam},
};

/// Account store with a side table of issued access tokens keyed by account id.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: InMemoryRepository<AccountProps>,
    tokens: RwLock<HashMap<String, String>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, account: Account) -> Account {
        self.accounts.insert(account).await
    }

    pub async fn all(&self) -> Vec<Account> {
        self.accounts.all().await
    }

    pub async fn access_token_of(&self, id: &str) -> Option<String> {
        self.tokens.read().await.get(id).cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, props: AccountProps) -> Result<Account, DbErr> {
        self.accounts.create_record(props).await
    }

    async fn get(&self) -> Result<Vec<Account>, DbErr> {
        Ok(self.accounts.all().await)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Account>, DbErr> {
        Ok(self.accounts.find_by_id(id).await)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        Ok(self.accounts.find_by_email(email).await)
    }

    async fn get_by_access_token(&self, token: &str) -> Result<Option<Account>, DbErr> {
        let id = self
            .tokens
            .read()
            .await
            .iter()
            .find(|(_, stored)| stored.as_str() == token)
            .map(|(id, _)| id.clone());

        match id {
            Some(id) => Ok(self.accounts.find_by_id(&id).await),
            None => Ok(None),
        }
    }

    async fn update(&self, id: &str, param: UpdateAccountParam) -> Result<(), DbErr> {
        self.accounts.patch(id, param).await;
        Ok(())
    }

    async fn update_access_token(&self, id: &str, token: Option<String>) -> Result<(), DbErr> {
        let mut tokens = self.tokens.write().await;
        match token {
            Some(token) => tokens.insert(id.to_string(), token),
            None => tokens.remove(id),
        };
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DbErr> {
        self.accounts.remove(id).await;
        self.tokens.write().await.remove(id);
        Ok(())
    }
}
