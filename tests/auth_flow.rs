mod common;

use blog_server::error::AppError;
use blog_server::forms::LoginData;
use blog_server::service;
use entity::user;
use sea_orm::EntityTrait;

fn login_data(email: &str, password: &str) -> LoginData {
    LoginData {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn registration_assigns_id_and_hashes_password() {
    let db = common::test_db().await;
    let user = service::register(&db, common::register_data("a@x.com", "Ada", "secret1"))
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@x.com");
    assert_ne!(user.password, "secret1");
    assert!(user.password.starts_with("$pbkdf2-sha256$"));
}

#[tokio::test]
async fn duplicate_registration_leaves_single_row() {
    let db = common::test_db().await;
    let first = service::register(&db, common::register_data("a@x.com", "Ada", "secret1"))
        .await
        .unwrap();

    let err = service::register(&db, common::register_data("a@x.com", "Imposter", "other"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateAccount));

    let rows = user::Entity::find().all(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, first.id);
    assert_eq!(rows[0].name, "Ada");
}

#[tokio::test]
async fn login_round_trip_returns_same_identity() {
    let db = common::test_db().await;
    let registered = service::register(&db, common::register_data("a@x.com", "Ada", "secret1"))
        .await
        .unwrap();

    // Logout clears the session cookie client-side; a fresh login must
    // resolve to the same row.
    let logged_in = service::login(&db, login_data("a@x.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, registered.id);
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let db = common::test_db().await;
    service::register(&db, common::register_data("a@x.com", "Ada", "secret1"))
        .await
        .unwrap();

    let err = service::login(&db, login_data("a@x.com", "secret2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadCredentials));
}

#[tokio::test]
async fn login_with_unknown_email_is_rejected() {
    let db = common::test_db().await;
    let err = service::login(&db, login_data("nobody@x.com", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownAccount));
}

#[tokio::test]
async fn email_lookup_is_case_sensitive_like_storage() {
    let db = common::test_db().await;
    service::register(&db, common::register_data("a@x.com", "Ada", "secret1"))
        .await
        .unwrap();

    let err = service::login(&db, login_data("A@X.COM", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownAccount));
}
