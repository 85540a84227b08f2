use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::info;
use validator::Validate;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

fn default_env() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_db_max_connections() -> u32 {
    5
}

fn default_db_min_connections() -> u32 {
    1
}

fn default_db_connect_timeout_secs() -> u64 {
    10
}

fn default_db_acquire_timeout_secs() -> u64 {
    10
}

/// Application configuration structure with validation.
///
/// Each domain service owns its own store, so there is one database URL per
/// domain rather than a single shared one.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Auth store connection URL (clinics, users)
    #[validate(length(min = 1))]
    pub auth_database_url: String,

    /// HR store connection URL (employees, incentive policies, target revenues)
    #[validate(length(min = 1))]
    pub hr_database_url: String,

    /// Inventory store connection URL (suppliers, products, stock ledger)
    #[validate(length(min = 1))]
    pub inventory_database_url: String,

    /// Marketing store connection URL (campaigns, expenses, attribution)
    #[validate(length(min = 1))]
    pub marketing_database_url: String,

    /// Application environment ("development", "test", "staging", "production")
    #[serde(default = "default_env")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Base URL the typed API clients talk to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Build a config directly, bypassing file/env layering. Used by tests
    /// and tools that already know their connection URLs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_database_url: String,
        hr_database_url: String,
        inventory_database_url: String,
        marketing_database_url: String,
        environment: String,
    ) -> Self {
        Self {
            auth_database_url,
            hr_database_url,
            inventory_database_url,
            marketing_database_url,
            environment,
            log_level: default_log_level(),
            api_base_url: default_api_base_url(),
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
        }
    }

    /// The seed orchestrator refuses to run against a production environment.
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Database URL for one seeding domain.
    pub fn database_url_for(&self, domain: crate::seed::Domain) -> &str {
        use crate::seed::Domain;
        match domain {
            Domain::Auth => &self.auth_database_url,
            Domain::Hr => &self.hr_database_url,
            Domain::Inventory => &self.inventory_database_url,
            Domain::Marketing => &self.marketing_database_url,
        }
    }
}

/// Loads configuration from files and environment variables.
///
/// Layering, later sources win:
/// 1. `config/default.toml`
/// 2. `config/{environment}.toml`
/// 3. `APP_*` environment variables (e.g. `APP_ENVIRONMENT`,
///    `APP_AUTH_DATABASE_URL`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let environment = env::var("APP_ENVIRONMENT").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = Config::builder();

    let default_path = Path::new(CONFIG_DIR).join("default");
    builder = builder
        .add_source(File::with_name(default_path.to_string_lossy().as_ref()).required(false));

    let env_path = Path::new(CONFIG_DIR).join(&environment);
    builder = builder
        .add_source(File::with_name(env_path.to_string_lossy().as_ref()).required(false));

    builder = builder.add_source(Environment::with_prefix("APP").separator("__"));

    let config: AppConfig = builder.build()?.try_deserialize()?;

    config
        .validate()
        .map_err(|e| ConfigError::Message(format!("invalid configuration: {}", e)))?;

    info!(environment = %config.environment, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(environment: &str) -> AppConfig {
        AppConfig::new(
            "sqlite://auth.db?mode=rwc".to_string(),
            "sqlite://hr.db?mode=rwc".to_string(),
            "sqlite://inventory.db?mode=rwc".to_string(),
            "sqlite://marketing.db?mode=rwc".to_string(),
            environment.to_string(),
        )
    }

    #[test]
    fn production_marker_is_case_insensitive() {
        assert!(test_config("production").is_production());
        assert!(test_config("PRODUCTION").is_production());
        assert!(!test_config("development").is_production());
        assert!(!test_config("test").is_production());
    }

    #[test]
    fn each_domain_resolves_its_own_url() {
        use crate::seed::Domain;
        let cfg = test_config("test");
        assert!(cfg.database_url_for(Domain::Auth).contains("auth"));
        assert!(cfg.database_url_for(Domain::Hr).contains("hr"));
        assert!(cfg.database_url_for(Domain::Inventory).contains("inventory"));
        assert!(cfg.database_url_for(Domain::Marketing).contains("marketing"));
    }
}
