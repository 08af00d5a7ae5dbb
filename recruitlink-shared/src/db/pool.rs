/// Database connection pool management
///
/// # Example
///
/// ```no_run
/// use recruitlink_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let config = DatabaseConfig {
///     url: "postgres://localhost/recruitlink".to_string(),
///     max_connections: 10,
/// };
///
/// let pool = create_pool(&config).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

/// Creates a PostgreSQL connection pool
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await?;

    tracing::info!("Database connection pool established");
    Ok(pool)
}

/// Verifies database connectivity
///
/// # Errors
///
/// Returns `sqlx::Error` if the query fails
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
