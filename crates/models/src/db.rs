use sea_orm::{Database, DatabaseConnection};
use std::env;

/// Read the connection string from the environment. The database-backed
/// catalog cannot run without one, so absence is an error, not a default.
pub fn database_url() -> anyhow::Result<String> {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set to use the postgres catalog backend"))
}

pub async fn connect(url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(url).await?;
    Ok(db)
}
