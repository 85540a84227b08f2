use sea_orm::error::DbErr;
use thiserror::Error;

use crate::seed::Domain;

/// Errors surfaced by the seeding core.
///
/// Everything here is fatal for the run that produced it; the orchestrator
/// never continues past a failed domain.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The production guard tripped before any work was attempted.
    #[error("refusing to seed: environment is '{0}' (production marker set)")]
    ProductionGuard(String),

    /// Domain name outside the known set. Usage error, nothing was touched.
    #[error("unknown domain '{0}', expected one of: auth, hr, inventory, marketing")]
    UnknownDomain(String),

    /// A fixture references a row that does not exist where it should.
    #[error("{domain} seeding aborted: {entity} '{reference}' not found")]
    MissingReference {
        domain: Domain,
        entity: &'static str,
        reference: String,
    },

    /// Transport or constraint failure against a domain store.
    #[error("{domain} seeding failed: {source}")]
    Domain {
        domain: Domain,
        #[source]
        source: DbErr,
    },

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("configuration error: {0}")]
    Config(String),
}

impl SeedError {
    /// Attach the owning domain to a bare database error.
    pub fn in_domain(domain: Domain) -> impl FnOnce(DbErr) -> SeedError {
        move |source| SeedError::Domain { domain, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_domain_message_lists_valid_names() {
        let err = SeedError::UnknownDomain("payroll".to_string());
        let msg = err.to_string();
        assert!(msg.contains("payroll"));
        assert!(msg.contains("auth, hr, inventory, marketing"));
    }

    #[test]
    fn missing_reference_names_domain_and_entity() {
        let err = SeedError::MissingReference {
            domain: Domain::Hr,
            entity: "clinic",
            reference: "clinic-001".to_string(),
        };
        assert!(err.to_string().contains("hr"));
        assert!(err.to_string().contains("clinic-001"));
    }
}
