use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sha2::{Digest, Sha256};

use crate::db::DbPool;
use crate::entities::auth::{clinic, user};
use crate::errors::SeedError;
use crate::fixtures::AuthFixtures;

use super::{Domain, SeedReport};

/// Seeds the auth store: the demo clinic and its users.
///
/// Runs first in the canonical order because every other domain references
/// the clinic it creates.
pub struct AuthSeeder<'a> {
    db: &'a DbPool,
    fixtures: &'a AuthFixtures,
}

impl<'a> AuthSeeder<'a> {
    pub fn new(db: &'a DbPool, fixtures: &'a AuthFixtures) -> Self {
        Self { db, fixtures }
    }

    pub async fn seed(&self) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::new(Domain::Auth);
        self.seed_clinic(&mut report).await?;
        self.seed_users(&mut report).await?;
        Ok(report)
    }

    async fn seed_clinic(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        let fixture = &self.fixtures.clinic;

        let existing = clinic::Entity::find_by_id(fixture.id)
            .one(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Auth))?;
        if existing.is_some() {
            report.note_skipped("clinic", fixture.id);
            return Ok(());
        }

        clinic::ActiveModel {
            id: Set(fixture.id.to_string()),
            name: Set(fixture.name.to_string()),
            business_registration_number: Set(fixture.business_registration_number.to_string()),
            address: Set(fixture.address.map(str::to_string)),
            phone: Set(fixture.phone.map(str::to_string)),
            email: Set(fixture.email.map(str::to_string)),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
        .insert(self.db)
        .await
        .map_err(SeedError::in_domain(Domain::Auth))?;

        report.note_created("clinic", fixture.id);
        Ok(())
    }

    async fn seed_users(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.users {
            // Email is the idempotency key, not the fixture id.
            let existing = user::Entity::find()
                .filter(user::Column::Email.eq(fixture.email))
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Auth))?;
            if existing.is_some() {
                report.note_skipped("user", fixture.email);
                continue;
            }

            user::ActiveModel {
                id: Set(fixture.id.to_string()),
                email: Set(fixture.email.to_string()),
                password_hash: Set(digest_password(fixture.password)),
                display_name: Set(fixture.display_name.to_string()),
                role: Set(fixture.role),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
                updated_at: Set(None),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Auth))?;

            report.note_created("user", fixture.email);
        }
        Ok(())
    }
}

/// Demo credentials are stored as hex-encoded SHA-256 digests, never as
/// plaintext.
fn digest_password(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_digest_is_hex_sha256() {
        let digest = digest_password("demo-admin-2024!");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        // Stable across calls: no per-call salt in demo fixtures.
        assert_eq!(digest, digest_password("demo-admin-2024!"));
    }
}
