use blog_server::forms::{PostData, RegisterData};
use blog_server::service;
use entity::user;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database with the full schema applied. One connection so
/// every query sees the same memory store.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub fn register_data(email: &str, name: &str, password: &str) -> RegisterData {
    RegisterData {
        email: email.to_string(),
        name: name.to_string(),
        password: password.to_string(),
    }
}

pub fn post_data(title: &str, subtitle: &str, body: &str) -> PostData {
    PostData {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        img_url: "https://example.com/cover.jpg".to_string(),
        body: body.to_string(),
    }
}

/// Registers the admin (the first account, id 1) plus a second ordinary user.
pub async fn admin_and_user(db: &DatabaseConnection) -> (user::Model, user::Model) {
    let admin = service::register(db, register_data("admin@x.com", "Admin", "admin-pw"))
        .await
        .expect("register admin");
    assert_eq!(admin.id, service::ADMIN_USER_ID);
    let user = service::register(db, register_data("b@x.com", "Bea", "user-pw"))
        .await
        .expect("register second user");
    (admin, user)
}
