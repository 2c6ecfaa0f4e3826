use sea_orm::SqlErr;

use super::*;

/// Tests creating an account stores every property.
///
/// Verifies that the repository assigns a fresh identifier, persists the role as its
/// stored string and starts without an access token.
///
/// Expected: Ok(Account) readable by id with the same properties
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    let mut input = props("new@mail.com");
    input.role = Role::Admin;

    let account = repo.create(input.clone()).await?;

    assert!(!account.id().is_empty());
    assert_eq!(account.props(), &input);

    let stored = repo.get_by_id(account.id()).await?;
    assert_eq!(stored, Some(account));

    Ok(())
}

/// Tests the email column is unique.
///
/// Expected: Err(DbErr) classified as a unique constraint violation on the second insert
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    repo.create(props("same@mail.com")).await?;

    let err = repo.create(props("same@mail.com")).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
