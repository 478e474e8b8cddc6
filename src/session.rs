use entity::user;
use sea_orm::DatabaseConnection;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies, Key};

use crate::error::AppError;
use crate::repo;

/// Session state lives entirely in a signed cookie holding the user id.
/// Tampering breaks the signature and reads as no cookie at all.
const SESSION_COOKIE: &str = "session_uid";

/// Expands the configured secret into a signing key. Needs at least 32 bytes
/// of material; `Config::from_env` enforces that before this runs.
pub fn signing_key(secret_key: &str) -> Key {
    Key::derive_from(secret_key.as_bytes())
}

/// Anonymous → Authenticated(user_id): bind the session after a successful
/// login or registration.
pub fn bind(cookies: &Cookies, key: &Key, user_id: i32) {
    let mut cookie = Cookie::new(SESSION_COOKIE, user_id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookies.signed(key).add(cookie);
}

/// Authenticated → Anonymous: explicit logout.
pub fn clear(cookies: &Cookies, key: &Key) {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookies.signed(key).remove(cookie);
}

/// Resolves the session to a live user row, re-querying storage on every
/// request. A missing cookie, a bad signature, or an id with no matching row
/// all read as an anonymous request; only a storage failure is an error.
pub async fn current_user(
    db: &DatabaseConnection,
    cookies: &Cookies,
    key: &Key,
) -> Result<Option<user::Model>, AppError> {
    let Some(cookie) = cookies.signed(key).get(SESSION_COOKIE) else {
        return Ok(None);
    };
    let Ok(user_id) = cookie.value().parse::<i32>() else {
        return Ok(None);
    };
    repo::find_user_by_id(db, user_id).await
}

#[cfg(test)]
mod tests {
    use super::signing_key;

    #[test]
    fn key_derivation_is_deterministic() {
        let secret = "0123456789abcdef0123456789abcdef";
        assert_eq!(
            signing_key(secret).master(),
            signing_key(secret).master()
        );
        assert_ne!(
            signing_key(secret).master(),
            signing_key("fedcba9876543210fedcba9876543210").master()
        );
    }
}
