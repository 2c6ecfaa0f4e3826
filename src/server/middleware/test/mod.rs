use std::sync::Arc;

use sea_orm::DbErr;

use crate::{
    model::account::Role,
    server::{
        data::{account::AccountRepository, in_memory::InMemoryAccountRepository},
        error::auth::AuthError,
        middleware::auth::AuthGuard,
        model::{
            account::{Account, AccountProps},
            entity::Entity,
        },
        service::auth::DbLoadAccountByToken,
    },
};


/// Stores an account with the given role and assigns it `token`.
async fn account_with_token(
    repository: &InMemoryAccountRepository,
    id: &str,
    role: Role,
    token: &str,
) -> Result<Account, DbErr> {
    let account = repository
        .insert(Entity::with_id(
            id,
            AccountProps {
                email: format!("{}@mail.com", id),
                password: "hashed".to_string(),
                role,
                avatar: None,
            },
        ))
        .await;
    repository
        .update_access_token(id, Some(token.to_string()))
        .await?;

    Ok(account)
}

fn guard(repository: Arc<InMemoryAccountRepository>) -> AuthGuard {
    AuthGuard::new(Arc::new(DbLoadAccountByToken::new(repository)))
}
