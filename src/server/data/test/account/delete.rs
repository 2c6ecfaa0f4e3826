use super::*;

/// Tests deleting an account removes only that account.
///
/// Expected: Ok with the other account still present
#[tokio::test]
async fn deletes_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_account(db).await?;
    let second = factory::create_account(db).await?;

    let repo = SeaOrmAccountRepository::new(db.clone());
    repo.delete(&first.id).await?;

    assert!(repo.get_by_id(&first.id).await?.is_none());
    assert!(repo.get_by_id(&second.id).await?.is_some());

    Ok(())
}

/// Tests deleting an id nothing matches.
///
/// Expected: Ok(())
#[tokio::test]
async fn ignores_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    let result = repo.delete("missing").await;

    assert!(result.is_ok());

    Ok(())
}
