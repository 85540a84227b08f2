use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::SeedError;
use crate::seed::Domain;

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// Configuration for a single domain-store connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl DbConfig {
    /// Connection settings for one domain's store, taking pool tuning from the
    /// application config.
    pub fn for_domain(cfg: &AppConfig, domain: Domain) -> Self {
        Self {
            url: cfg.database_url_for(domain).to_string(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: Duration::from_secs(cfg.db_connect_timeout_secs),
            acquire_timeout: Duration::from_secs(cfg.db_acquire_timeout_secs),
        }
    }
}

/// Establishes a connection pool to one domain store.
pub async fn establish_connection(url: &str) -> Result<DbPool, SeedError> {
    let config = DbConfig {
        url: url.to_string(),
        ..Default::default()
    };
    establish_connection_with_config(&config).await
}

/// Establishes a connection pool with explicit pool settings.
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, SeedError> {
    debug!(url = %config.url, "configuring database connection");

    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    let pool = Database::connect(opt).await?;
    debug!(url = %config.url, "database connection pool established");
    Ok(pool)
}

/// Checks that a domain store is reachable.
pub async fn check_connection(pool: &DbPool) -> Result<(), SeedError> {
    pool.ping().await?;
    Ok(())
}

/// Closes a connection pool. Seeders release their connections through this at
/// the end of each domain run, success or failure.
pub async fn close_pool(pool: DbPool) -> Result<(), SeedError> {
    debug!("closing database connection pool");
    pool.close().await?;
    Ok(())
}

/// Creates a domain's tables if they do not exist yet.
///
/// Each store is schema-bootstrapped from its entity definitions; re-running
/// against an existing store is a no-op.
pub async fn ensure_domain_schema(pool: &DbPool, domain: Domain) -> Result<(), SeedError> {
    use crate::entities::{auth, hr, inventory, marketing};

    let backend = pool.get_database_backend();
    let schema = Schema::new(backend);

    macro_rules! create_table {
        ($entity:expr) => {{
            let mut stmt = schema.create_table_from_entity($entity);
            stmt.if_not_exists();
            pool.execute(backend.build(&stmt)).await?;
        }};
    }

    match domain {
        Domain::Auth => {
            create_table!(auth::clinic::Entity);
            create_table!(auth::user::Entity);
        }
        Domain::Hr => {
            create_table!(hr::employee::Entity);
            create_table!(hr::incentive_policy::Entity);
            create_table!(hr::target_revenue::Entity);
        }
        Domain::Inventory => {
            create_table!(inventory::supplier::Entity);
            create_table!(inventory::product::Entity);
            create_table!(inventory::product_supplier::Entity);
            create_table!(inventory::stock_movement::Entity);
        }
        Domain::Marketing => {
            create_table!(marketing::campaign::Entity);
            create_table!(marketing::marketing_expense::Entity);
            create_table!(marketing::campaign_performance::Entity);
            create_table!(marketing::patient_source::Entity);
        }
    }

    info!(domain = %domain, "schema ready");
    Ok(())
}
