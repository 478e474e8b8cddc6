use std::sync::Arc;

use blog_server::config::Config;
use blog_server::{run, AppContext};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = Database::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;

    let ctx = Arc::new(AppContext::new(db, &config.secret_key));
    run(ctx, &config.bind_addr).await
}
