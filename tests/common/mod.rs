use std::path::PathBuf;

use tempfile::TempDir;

use clinicore_api::config::AppConfig;
use clinicore_api::db::{self, DbPool};
use clinicore_api::fixtures::FixtureSet;
use clinicore_api::seed::{Domain, SeedOrchestrator};

/// Harness giving each test four fresh file-backed sqlite stores, one per
/// domain, inside a temp directory that is cleaned up on drop.
pub struct SeedHarness {
    pub cfg: AppConfig,
    dir: TempDir,
}

impl SeedHarness {
    pub fn new() -> Self {
        Self::with_environment("test")
    }

    pub fn with_environment(environment: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir for test stores");
        let url = |name: &str| {
            format!(
                "sqlite://{}?mode=rwc",
                dir.path().join(name).to_string_lossy()
            )
        };

        let mut cfg = AppConfig::new(
            url("auth.db"),
            url("hr.db"),
            url("inventory.db"),
            url("marketing.db"),
            environment.to_string(),
        );
        // One writer at a time; keeps sqlite happy across reconnects.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        Self { cfg, dir }
    }

    pub fn orchestrator(&self) -> SeedOrchestrator {
        SeedOrchestrator::new(self.cfg.clone(), FixtureSet::demo())
    }

    /// Direct connection to one domain store, for assertions.
    pub async fn connect(&self, domain: Domain) -> DbPool {
        db::establish_connection(self.cfg.database_url_for(domain))
            .await
            .expect("failed to connect to test store")
    }

    /// Filesystem path of a domain store. Production-guard tests assert the
    /// file was never created.
    pub fn store_path(&self, domain: Domain) -> PathBuf {
        let name = match domain {
            Domain::Auth => "auth.db",
            Domain::Hr => "hr.db",
            Domain::Inventory => "inventory.db",
            Domain::Marketing => "marketing.db",
        };
        self.dir.path().join(name)
    }
}
