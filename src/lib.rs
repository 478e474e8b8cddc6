use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_cookies::Key;

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod password;
pub mod redirect;
pub mod repo;
pub mod routes;
pub mod service;
pub mod session;
pub mod views;

/// Everything handlers need, built once at startup and passed explicitly.
pub struct AppContext {
    pub db: DatabaseConnection,
    pub key: Key,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, secret_key: &str) -> Self {
        Self {
            db,
            key: session::signing_key(secret_key),
        }
    }
}

pub async fn run(ctx: Arc<AppContext>, bind_addr: &str) -> anyhow::Result<()> {
    let app = routes::create_all_routes(ctx);

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(%bind_addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
