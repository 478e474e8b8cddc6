use std::env;

use anyhow::{bail, Context};

/// Environment-derived configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("SECRET_KEY").context("SECRET_KEY must be set")?;
        if secret_key.len() < 32 {
            bail!("SECRET_KEY must be at least 32 bytes of key material");
        }

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let database_url = normalize_database_url(database_url);

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5002".to_string());

        Ok(Config {
            database_url,
            secret_key,
            bind_addr,
        })
    }
}

/// Hosted Postgres still hands out URLs with the legacy `postgres://` scheme;
/// rewrite it before connecting.
fn normalize_database_url(url: String) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_database_url;

    #[test]
    fn rewrites_legacy_scheme() {
        assert_eq!(
            normalize_database_url("postgres://u:p@host/db".to_string()),
            "postgresql://u:p@host/db"
        );
    }

    #[test]
    fn leaves_standard_scheme_alone() {
        assert_eq!(
            normalize_database_url("postgresql://u:p@host/db".to_string()),
            "postgresql://u:p@host/db"
        );
        assert_eq!(
            normalize_database_url("sqlite::memory:".to_string()),
            "sqlite::memory:"
        );
    }
}
