use super::*;

/// Tests finding a user by email.
///
/// Verifies that the repository returns a typed domain model with the
/// stored role parsed.
///
/// Expected: Ok(Some) with role Organizer and penalty fields mapped
#[tokio::test]
async fn returns_user_with_typed_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("lead@example.com")
        .role("organizer")
        .warnings(2)
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_email("lead@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.email, "lead@example.com");
    assert_eq!(user.role, Role::Organizer);
    assert_eq!(user.role.as_str(), "organizer");
    assert_eq!(user.warnings, 2);
    assert!(!user.is_permanently_banned);

    Ok(())
}

/// Tests lookup of an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await
        .unwrap();

    assert!(user.is_none());

    Ok(())
}

/// Tests conversion of a corrupted role value.
///
/// Verifies that an unrecognized stored role surfaces as an internal error
/// rather than being silently coerced.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn errors_on_unrecognized_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("odd@example.com")
        .role("superuser")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("odd@example.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
