//! Demo-data seeding: four per-domain seeders and the orchestrator that
//! sequences them.
//!
//! The dependency order is fixed: auth first (it creates the clinic every
//! other domain references), then hr, inventory, marketing. The latter three
//! have no fixture-level dependency on each other; the order among them is
//! kept fixed for determinism and reproducible logs.

pub mod auth;
pub mod hr;
pub mod inventory;
pub mod marketing;
pub mod report;

use async_trait::async_trait;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::db::{self, DbConfig, DbPool};
use crate::entities::auth as auth_entities;
use crate::errors::SeedError;
use crate::fixtures::FixtureSet;

pub use report::{OverallReport, SeedReport};

/// One seeding domain, matching one backend service's store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Auth,
    Hr,
    Inventory,
    Marketing,
}

impl Domain {
    /// Canonical seeding order. Auth must come first; see module docs.
    pub const ALL: [Domain; 4] = [
        Domain::Auth,
        Domain::Hr,
        Domain::Inventory,
        Domain::Marketing,
    ];

    /// Parse a CLI-supplied domain name, mapping failure to a usage error.
    pub fn parse(name: &str) -> Result<Self, SeedError> {
        name.parse()
            .map_err(|_| SeedError::UnknownDomain(name.to_string()))
    }
}

/// Lookup capability for clinic references held by dependent domains.
///
/// A domain store holds `clinic_id` as a tagged reference, not an owned row;
/// before writing anything it resolves the reference against the auth store
/// through this trait. Tests substitute their own implementation.
#[async_trait]
pub trait ClinicDirectory: Send + Sync {
    async fn clinic_exists(&self, clinic_id: &str) -> Result<bool, SeedError>;
}

/// [`ClinicDirectory`] backed by the auth store itself.
pub struct AuthStoreDirectory<'a> {
    db: &'a DbPool,
}

impl<'a> AuthStoreDirectory<'a> {
    pub fn new(db: &'a DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClinicDirectory for AuthStoreDirectory<'_> {
    async fn clinic_exists(&self, clinic_id: &str) -> Result<bool, SeedError> {
        let found = auth_entities::clinic::Entity::find_by_id(clinic_id)
            .one(self.db)
            .await?;
        Ok(found.is_some())
    }
}

/// Sequences the per-domain seeders.
///
/// Each domain run opens its own connection pool and releases it when the
/// run finishes, success or failure. Domains execute strictly sequentially;
/// the first failure stops the sequence with the failing domain named in the
/// error. Nothing is rolled back: master data is idempotent so re-running
/// after a fix is safe, while ledger rows from a partial earlier run remain
/// and will duplicate on retry.
pub struct SeedOrchestrator {
    cfg: AppConfig,
    fixtures: FixtureSet,
}

impl SeedOrchestrator {
    pub fn new(cfg: AppConfig, fixtures: FixtureSet) -> Self {
        Self { cfg, fixtures }
    }

    /// Seed every domain in canonical order, fail-fast.
    pub async fn run_all(&self) -> Result<OverallReport, SeedError> {
        self.guard()?;

        let mut overall = OverallReport::default();
        for domain in Domain::ALL {
            info!(domain = %domain, "seeding domain");
            match self.seed_domain(domain).await {
                Ok(report) => {
                    info!(
                        domain = %domain,
                        created = report.created,
                        skipped = report.skipped,
                        appended = report.appended,
                        "domain seeded"
                    );
                    overall.push(report);
                }
                Err(err) => {
                    error!(domain = %domain, error = %err, "seeding stopped");
                    return Err(err);
                }
            }
        }
        Ok(overall)
    }

    /// Seed a single domain.
    pub async fn run_one(&self, domain: Domain) -> Result<SeedReport, SeedError> {
        self.guard()?;
        self.seed_domain(domain).await
    }

    /// The production guard holds unconditionally, before any connection is
    /// opened and regardless of which domain is targeted.
    fn guard(&self) -> Result<(), SeedError> {
        if self.cfg.is_production() {
            return Err(SeedError::ProductionGuard(self.cfg.environment.clone()));
        }
        Ok(())
    }

    async fn seed_domain(&self, domain: Domain) -> Result<SeedReport, SeedError> {
        let pool =
            db::establish_connection_with_config(&DbConfig::for_domain(&self.cfg, domain)).await?;

        // Dependent domains resolve clinic references against the auth store
        // through a second, read-only connection.
        let auth_pool = if domain == Domain::Auth {
            None
        } else {
            match db::establish_connection_with_config(&DbConfig::for_domain(
                &self.cfg,
                Domain::Auth,
            ))
            .await
            {
                Ok(p) => Some(p),
                Err(err) => {
                    Self::release(pool).await;
                    return Err(err);
                }
            }
        };

        let result = self.seed_on(domain, &pool, auth_pool.as_ref()).await;

        if let Some(auth_pool) = auth_pool {
            Self::release(auth_pool).await;
        }
        Self::release(pool).await;

        result
    }

    async fn seed_on(
        &self,
        domain: Domain,
        pool: &DbPool,
        auth_pool: Option<&DbPool>,
    ) -> Result<SeedReport, SeedError> {
        db::ensure_domain_schema(pool, domain).await?;

        match domain {
            Domain::Auth => auth::AuthSeeder::new(pool, &self.fixtures.auth).seed().await,
            Domain::Hr => {
                let auth_pool = Self::expect_auth_pool(auth_pool)?;
                db::ensure_domain_schema(auth_pool, Domain::Auth).await?;
                let directory = AuthStoreDirectory::new(auth_pool);
                hr::HrSeeder::new(pool, &self.fixtures.hr, &directory)
                    .seed()
                    .await
            }
            Domain::Inventory => {
                let auth_pool = Self::expect_auth_pool(auth_pool)?;
                db::ensure_domain_schema(auth_pool, Domain::Auth).await?;
                let directory = AuthStoreDirectory::new(auth_pool);
                inventory::InventorySeeder::new(pool, &self.fixtures.inventory, &directory)
                    .seed()
                    .await
            }
            Domain::Marketing => {
                let auth_pool = Self::expect_auth_pool(auth_pool)?;
                db::ensure_domain_schema(auth_pool, Domain::Auth).await?;
                let directory = AuthStoreDirectory::new(auth_pool);
                marketing::MarketingSeeder::new(pool, &self.fixtures.marketing, &directory)
                    .seed()
                    .await
            }
        }
    }

    fn expect_auth_pool(auth_pool: Option<&DbPool>) -> Result<&DbPool, SeedError> {
        auth_pool.ok_or_else(|| {
            SeedError::Config("auth store handle missing for dependent domain".to_string())
        })
    }

    async fn release(pool: DbPool) {
        if let Err(err) = db::close_pool(pool).await {
            warn!(error = %err, "failed to close connection pool cleanly");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn domain_names_round_trip() {
        for domain in Domain::ALL {
            assert_eq!(Domain::parse(&domain.to_string()).unwrap(), domain);
        }
    }

    #[test]
    fn unknown_domain_is_a_usage_error() {
        assert_matches!(Domain::parse("payroll"), Err(SeedError::UnknownDomain(_)));
        assert_matches!(Domain::parse(""), Err(SeedError::UnknownDomain(_)));
    }

    #[test]
    fn canonical_order_starts_with_auth() {
        assert_eq!(Domain::ALL[0], Domain::Auth);
    }
}
