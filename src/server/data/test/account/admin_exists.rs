use super::*;

/// Tests detecting when admin accounts exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .admin()
        .build()
        .await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only regular accounts exist.
///
/// Verifies that the repository returns false when accounts exist but none has the
/// admin role (first start scenario).
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;
    factory::create_account(db).await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
