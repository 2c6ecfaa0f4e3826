use super::*;

/// Tests a partial update only touches the supplied fields.
///
/// Expected: Ok with role replaced and email and password unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    let account = repo.create(props("a@x.com")).await?;

    repo.update(
        account.id(),
        UpdateAccountParam {
            role: Some(Role::Admin),
            ..Default::default()
        },
    )
    .await?;

    let updated = repo.get_by_id(account.id()).await?.unwrap();
    assert_eq!(updated.props().email, "a@x.com");
    assert_eq!(updated.props().password, "hashed");
    assert_eq!(updated.props().role, Role::Admin);

    Ok(())
}

/// Tests an empty patch leaves the record as it was.
///
/// Expected: Ok with identical properties
#[tokio::test]
async fn empty_patch_changes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    let account = repo.create(props("same@x.com")).await?;

    repo.update(account.id(), UpdateAccountParam::default())
        .await?;

    let stored = repo.get_by_id(account.id()).await?;
    assert_eq!(stored, Some(account));

    Ok(())
}

/// Tests setting and clearing the avatar.
///
/// Expected: Ok with the avatar stored, then None after `Some(None)`
#[tokio::test]
async fn sets_and_clears_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    let account = repo.create(props("avatar@x.com")).await?;

    repo.update(
        account.id(),
        UpdateAccountParam {
            avatar: Some(Some("aGVsbG8=".to_string())),
            ..Default::default()
        },
    )
    .await?;
    let with_avatar = repo.get_by_id(account.id()).await?.unwrap();
    assert_eq!(with_avatar.props().avatar.as_deref(), Some("aGVsbG8="));

    repo.update(
        account.id(),
        UpdateAccountParam {
            avatar: Some(None),
            ..Default::default()
        },
    )
    .await?;
    let cleared = repo.get_by_id(account.id()).await?.unwrap();
    assert!(cleared.props().avatar.is_none());

    Ok(())
}

/// Tests updating an id nothing matches.
///
/// Expected: Ok(()) with no record created
#[tokio::test]
async fn ignores_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmAccountRepository::new(db.clone());
    repo.update(
        "missing",
        UpdateAccountParam {
            email: Some("ghost@x.com".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.get().await?.is_empty());

    Ok(())
}
