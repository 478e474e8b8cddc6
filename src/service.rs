use chrono::Utc;
use entity::{comment, post, user};
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::forms::{CommentData, LoginData, PostData, RegisterData};
use crate::{password, repo};

/// The single administrator account: the first-ever registered user.
pub const ADMIN_USER_ID: i32 = 1;

pub fn is_admin(viewer: Option<&user::Model>) -> bool {
    viewer.map_or(false, |user| user.id == ADMIN_USER_ID)
}

/// Authorization gate for post mutation. Checked explicitly at the top of
/// each protected operation.
pub fn require_admin(viewer: Option<&user::Model>) -> Result<&user::Model, AppError> {
    match viewer {
        Some(user) if user.id == ADMIN_USER_ID => Ok(user),
        _ => Err(AppError::Forbidden),
    }
}

pub fn require_user(viewer: Option<&user::Model>) -> Result<&user::Model, AppError> {
    viewer.ok_or(AppError::AuthenticationRequired)
}

/// Registers a new account. The caller binds the session only after this
/// returns; the single insert is the atomic boundary, so a failure leaves no
/// partial state.
pub async fn register(
    db: &DatabaseConnection,
    data: RegisterData,
) -> Result<user::Model, AppError> {
    if repo::find_user_by_email(db, &data.email).await?.is_some() {
        return Err(AppError::DuplicateAccount);
    }
    let hashed = password::hash(&data.password)?;
    // Two registrations can race past the lookup; the unique index on email
    // settles it and the loser reads as a duplicate account.
    repo::insert_user(db, &data.name, &data.email, &hashed)
        .await
        .map_err(|err| match err {
            AppError::ConstraintViolation(_) => AppError::DuplicateAccount,
            other => other,
        })
}

pub async fn login(db: &DatabaseConnection, data: LoginData) -> Result<user::Model, AppError> {
    let user = repo::find_user_by_email(db, &data.email)
        .await?
        .ok_or(AppError::UnknownAccount)?;
    if !password::verify(&data.password, &user.password) {
        return Err(AppError::BadCredentials);
    }
    Ok(user)
}

/// Creation date as the long-form display string ("August 29, 2026").
fn display_date() -> String {
    Utc::now().format("%B %d, %Y").to_string()
}

/// Title uniqueness is not pre-checked; a collision surfaces from the unique
/// index as a constraint violation.
pub async fn create_post(
    db: &DatabaseConnection,
    viewer: Option<&user::Model>,
    data: PostData,
) -> Result<post::Model, AppError> {
    let admin = require_admin(viewer)?;
    repo::insert_post(db, &data, &display_date(), admin.id).await
}

/// Overwrites the mutable fields in place. The editor takes over authorship,
/// as the original flow did; with a single admin this is inert.
pub async fn edit_post(
    db: &DatabaseConnection,
    viewer: Option<&user::Model>,
    post_id: i32,
    data: PostData,
) -> Result<post::Model, AppError> {
    let admin = require_admin(viewer)?;
    let existing = repo::find_post(db, post_id)
        .await?
        .ok_or(AppError::NotFound)?;
    repo::update_post(db, existing, &data, admin.id).await
}

pub async fn delete_post(
    db: &DatabaseConnection,
    viewer: Option<&user::Model>,
    post_id: i32,
) -> Result<(), AppError> {
    require_admin(viewer)?;
    let existing = repo::find_post(db, post_id)
        .await?
        .ok_or(AppError::NotFound)?;
    repo::delete_post(db, existing.id).await
}

/// Commenting needs any authenticated user, not the admin.
pub async fn add_comment(
    db: &DatabaseConnection,
    viewer: Option<&user::Model>,
    post_id: i32,
    data: CommentData,
) -> Result<comment::Model, AppError> {
    let author = require_user(viewer)?;
    let post = repo::find_post(db, post_id)
        .await?
        .ok_or(AppError::NotFound)?;
    repo::insert_comment(db, &data.text, author.id, post.id).await
}
