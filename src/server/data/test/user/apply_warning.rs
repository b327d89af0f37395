use super::*;

/// Tests the basic warning increment.
///
/// Verifies that applying a warning without a ban bumps the counter inside
/// the database and leaves the ban fields untouched.
///
/// Expected: Ok with warnings incremented by exactly 1
#[tokio::test]
async fn increments_warning_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    UserRepository::new(db)
        .apply_warning(&user.email, None, false)
        .await?;

    let user = entity::prelude::User::find_by_id(user.email).one(db).await?.unwrap();
    assert_eq!(user.warnings, 1);
    assert!(user.ban_until.is_none());
    assert!(!user.is_permanently_banned);

    Ok(())
}

/// Tests repeated warning increments.
///
/// Verifies that increments are cumulative across calls.
///
/// Expected: Ok with warnings at 2 after two applications
#[tokio::test]
async fn increments_are_cumulative() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);

    repo.apply_warning(&user.email, None, false).await?;
    repo.apply_warning(&user.email, None, false).await?;

    let user = entity::prelude::User::find_by_id(user.email).one(db).await?.unwrap();
    assert_eq!(user.warnings, 2);

    Ok(())
}

/// Tests applying a warning that carries a temporary ban.
///
/// Expected: Ok with ban_until set to the provided instant
#[tokio::test]
async fn sets_ban_until_when_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).warnings(1).build().await?;
    let until = dt(2026, 7, 22, 12, 0);

    UserRepository::new(db)
        .apply_warning(&user.email, Some(until), false)
        .await?;

    let user = entity::prelude::User::find_by_id(user.email).one(db).await?.unwrap();
    assert_eq!(user.warnings, 2);
    assert_eq!(user.ban_until, Some(until));

    Ok(())
}

/// Tests that a tier without an explicit ban preserves an earlier one.
///
/// Verifies that applying a warning with no ban date leaves a pre-existing
/// `ban_until` untouched rather than clearing it.
///
/// Expected: Ok with the original ban_until still stored
#[tokio::test]
async fn preserves_existing_ban_until_when_not_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prior_ban = dt(2026, 7, 1, 0, 0);
    let user = UserFactory::new(db)
        .warnings(3)
        .ban_until(prior_ban)
        .build()
        .await?;

    UserRepository::new(db)
        .apply_warning(&user.email, None, true)
        .await?;

    let user = entity::prelude::User::find_by_id(user.email).one(db).await?.unwrap();
    assert_eq!(user.warnings, 4);
    assert_eq!(user.ban_until, Some(prior_ban));
    assert!(user.is_permanently_banned);

    Ok(())
}

/// Tests that the permanent ban is a one-way latch.
///
/// Verifies that applying further warnings after the latch never clears it.
///
/// Expected: Ok with is_permanently_banned still true
#[tokio::test]
async fn permanent_ban_is_never_cleared() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .warnings(4)
        .permanently_banned(true)
        .build()
        .await?;

    UserRepository::new(db)
        .apply_warning(&user.email, None, true)
        .await?;

    let user = entity::prelude::User::find_by_id(user.email).one(db).await?.unwrap();
    assert_eq!(user.warnings, 5);
    assert!(user.is_permanently_banned);

    Ok(())
}
