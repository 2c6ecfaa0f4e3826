use super::*;
use sea_orm::EntityTrait;

/// Tests resolving an account by the token stored on it.
///
/// Expected: Ok(Some(Account)) for the factory's token
#[tokio::test]
async fn finds_by_access_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .access_token("token-1")
        .build()
        .await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let account = repo.get_by_access_token("token-1").await?;

    assert_eq!(account.map(|a| a.id().to_string()), Some(created.id));
    assert!(repo.get_by_access_token("token-2").await?.is_none());

    Ok(())
}

/// Tests replacing and clearing the stored token.
///
/// Verifies that a new token replaces the old one and that clearing it makes the
/// account unreachable by any token.
///
/// Expected: Ok with only the latest token resolving, then none
#[tokio::test]
async fn replaces_and_clears_access_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .access_token("old")
        .build()
        .await?;

    let repo = SeaOrmAccountRepository::new(db.clone());

    repo.update_access_token(&created.id, Some("new".to_string()))
        .await?;
    assert!(repo.get_by_access_token("old").await?.is_none());
    assert!(repo.get_by_access_token("new").await?.is_some());

    repo.update_access_token(&created.id, None).await?;
    assert!(repo.get_by_access_token("new").await?.is_none());

    let stored = entity::prelude::Account::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.access_token.is_none());

    Ok(())
}
