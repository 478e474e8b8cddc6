use pbkdf2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Pbkdf2,
};

use crate::error::AppError;

/// Hashes a password with PBKDF2-SHA256 and a fresh random salt. The result
/// is a self-describing PHC string; the same password hashes differently on
/// every call.
pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::Hashing(err.to_string()))?;
    Ok(hashed.to_string())
}

/// Checks a password against a stored hash. A malformed stored hash verifies
/// as false rather than erroring.
pub fn verify(password: &str, stored: &str) -> bool {
    match PasswordHash::new(stored) {
        Ok(parsed) => Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{hash, verify};

    #[test]
    fn round_trip() {
        let stored = hash("secret1").unwrap();
        assert!(verify("secret1", &stored));
    }

    #[test]
    fn wrong_password_fails() {
        let stored = hash("secret1").unwrap();
        assert!(!verify("secret2", &stored));
    }

    #[test]
    fn salts_are_random() {
        let a = hash("secret1").unwrap();
        let b = hash("secret1").unwrap();
        assert_ne!(a, b);
        assert!(verify("secret1", &a));
        assert!(verify("secret1", &b));
    }

    #[test]
    fn never_stores_plaintext() {
        let stored = hash("secret1").unwrap();
        assert!(!stored.contains("secret1"));
        assert!(stored.starts_with("$pbkdf2-sha256$"));
    }

    #[test]
    fn malformed_hash_is_false_not_an_error() {
        assert!(!verify("secret1", ""));
        assert!(!verify("secret1", "not-a-phc-string"));
        assert!(!verify("secret1", "$pbkdf2-sha256$garbage"));
    }
}
