//! Database connection handle management.

use async_trait::async_trait;
use school_config::DatabaseConfig;
use school_core::{Interface, SchoolError, SchoolResult};
use shaku::Component;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

/// Interface for the shared storage handle.
///
/// Every DAO receives one of these at construction. Its lifecycle belongs
/// to whoever composes the DAOs, never to a DAO itself.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> SchoolResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> SchoolResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Connects to the database described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> SchoolResult<Self> {
        info!(host = %config.host, database = %config.name, "Connecting to MySQL database...");

        let url = config.connection_url()?;
        let pool = Self::options(config)
            .connect(&url)
            .await
            .map_err(connect_error)?;

        info!("MySQL connection established");
        Ok(Self { pool })
    }

    /// Builds the handle without opening a connection; the first statement
    /// connects.
    pub fn connect_lazy(config: &DatabaseConfig) -> SchoolResult<Self> {
        let url = config.connection_url()?;
        let pool = Self::options(config)
            .connect_lazy(&url)
            .map_err(|e| SchoolError::Configuration(format!("Invalid database URL: {}", e)))?;
        Ok(Self { pool })
    }

    fn options(config: &DatabaseConfig) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .min_connections(0)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
    }

    /// Wraps a pre-existing pool (for Shaku injection).
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn health_check(&self) -> SchoolResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn run_migrations(&self) -> SchoolResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| SchoolError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Classifies a failed connect.
///
/// Transport failures stay [`SchoolError::Unavailable`]; a server that
/// answers but refuses the login or schema is a configuration problem.
fn connect_error(err: sqlx::Error) -> SchoolError {
    warn!("Failed to connect to database: {}", err);

    match err {
        sqlx::Error::Database(db_err) => {
            SchoolError::Configuration(format!("Connection rejected: {}", db_err))
        }
        other => SchoolError::from(other),
    }
}

/// Connects and returns a shared handle.
pub async fn create_pool(config: &DatabaseConfig) -> SchoolResult<std::sync::Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config).await?;
    Ok(std::sync::Arc::new(pool))
}
