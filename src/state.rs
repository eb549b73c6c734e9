use sqlx::PgPool;

use crate::config::Config;
use crate::error::Result;

/// The application's state for the database-backed surface.
///
/// The book catalog deliberately does not live here; it has its own
/// state handle (`services::catalog::Bookshelf`) and shares nothing
/// with the ToDo side.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: PgPool,
    /// The application's configuration.
    pub config: Config,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `AppState`.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = crate::db::create_pool(&config.database_url).await?;
        tracing::info!("✅ PostgreSQL pool initialized");

        Ok(AppState {
            db,
            config: config.clone(),
        })
    }
}
