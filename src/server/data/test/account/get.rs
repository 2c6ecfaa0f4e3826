use super::*;

/// Tests listing returns every stored account.
///
/// Expected: Ok(Vec) with both accounts
#[tokio::test]
async fn lists_all_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;
    factory::create_account(db).await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let accounts = repo.get().await?;

    assert_eq!(accounts.len(), 2);

    Ok(())
}

/// Tests looking an account up by email.
///
/// Expected: Ok(Some(Account)) with the factory's id and role
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .email("found@mail.com")
        .admin()
        .build()
        .await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let account = repo.get_by_email("found@mail.com").await?.unwrap();

    assert_eq!(account.id(), created.id);
    assert_eq!(account.props().role, Role::Admin);

    Ok(())
}

/// Tests lookups for keys nothing matches.
///
/// Verifies that a missing record is reported as `None`, not as an error.
///
/// Expected: Ok(None) for id and email
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;

    let repo = SeaOrmAccountRepository::new(db.clone());

    assert!(repo.get_by_id("missing").await?.is_none());
    assert!(repo.get_by_email("missing@mail.com").await?.is_none());

    Ok(())
}

/// Tests an unknown stored role surfaces as a conversion error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .role("SUPERUSER")
        .build()
        .await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let result = repo.get_by_id(&created.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
