use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::marketing::{
    campaign, campaign_performance, marketing_expense, patient_source,
};
use crate::errors::SeedError;
use crate::fixtures::MarketingFixtures;

use super::{ClinicDirectory, Domain, SeedReport};

/// Seeds the marketing store.
///
/// Campaigns are master data; expenses, performance snapshots, and patient
/// sources are ledgers that append on every run.
pub struct MarketingSeeder<'a> {
    db: &'a DbPool,
    fixtures: &'a MarketingFixtures,
    clinics: &'a dyn ClinicDirectory,
}

impl<'a> MarketingSeeder<'a> {
    pub fn new(
        db: &'a DbPool,
        fixtures: &'a MarketingFixtures,
        clinics: &'a dyn ClinicDirectory,
    ) -> Self {
        Self {
            db,
            fixtures,
            clinics,
        }
    }

    pub async fn seed(&self) -> Result<SeedReport, SeedError> {
        self.check_clinic_references().await?;

        let mut report = SeedReport::new(Domain::Marketing);
        self.seed_campaigns(&mut report).await?;
        self.append_expenses(&mut report).await?;
        self.append_performance(&mut report).await?;
        self.append_patient_sources(&mut report).await?;
        Ok(report)
    }

    async fn check_clinic_references(&self) -> Result<(), SeedError> {
        let mut clinic_ids: Vec<&str> = self
            .fixtures
            .campaigns
            .iter()
            .map(|c| c.clinic_id)
            .chain(self.fixtures.patient_sources.iter().map(|p| p.clinic_id))
            .collect();
        clinic_ids.sort_unstable();
        clinic_ids.dedup();

        for clinic_id in clinic_ids {
            if !self.clinics.clinic_exists(clinic_id).await? {
                return Err(SeedError::MissingReference {
                    domain: Domain::Marketing,
                    entity: "clinic",
                    reference: clinic_id.to_string(),
                });
            }
        }
        Ok(())
    }

    async fn seed_campaigns(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.campaigns {
            let existing = campaign::Entity::find_by_id(fixture.id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Marketing))?;
            if existing.is_some() {
                report.note_skipped("campaign", fixture.id);
                continue;
            }

            campaign::ActiveModel {
                id: Set(fixture.id.to_string()),
                name: Set(fixture.name.to_string()),
                campaign_type: Set(fixture.campaign_type),
                status: Set(fixture.status),
                budget: Set(fixture.budget),
                spent_amount: Set(fixture.spent_amount),
                start_date: Set(fixture.start_date),
                end_date: Set(fixture.end_date),
                target_patient_count: Set(fixture.target_patient_count),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
                updated_at: Set(None),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Marketing))?;

            report.note_created("campaign", fixture.id);
        }
        Ok(())
    }

    async fn append_expenses(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.expenses {
            self.require_campaign(fixture.campaign_id).await?;

            marketing_expense::ActiveModel {
                id: Set(Uuid::new_v4()),
                campaign_id: Set(fixture.campaign_id.to_string()),
                amount: Set(fixture.amount),
                category: Set(fixture.category.to_string()),
                description: Set(fixture.description.map(str::to_string)),
                expense_date: Set(fixture.expense_date),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Marketing))?;

            report.note_appended("marketing_expense", fixture.campaign_id);
        }
        Ok(())
    }

    async fn append_performance(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.performance {
            self.require_campaign(fixture.campaign_id).await?;

            campaign_performance::ActiveModel {
                id: Set(Uuid::new_v4()),
                campaign_id: Set(fixture.campaign_id.to_string()),
                record_date: Set(fixture.record_date),
                impressions: Set(fixture.impressions),
                clicks: Set(fixture.clicks),
                conversions: Set(fixture.conversions),
                revenue: Set(fixture.revenue),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Marketing))?;

            report.note_appended("campaign_performance", fixture.campaign_id);
        }
        Ok(())
    }

    async fn append_patient_sources(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.patient_sources {
            patient_source::ActiveModel {
                id: Set(Uuid::new_v4()),
                source_channel: Set(fixture.source_channel.to_string()),
                patient_count: Set(fixture.patient_count),
                record_date: Set(fixture.record_date),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Marketing))?;

            report.note_appended("patient_source", fixture.source_channel);
        }
        Ok(())
    }

    async fn require_campaign(&self, campaign_id: &str) -> Result<(), SeedError> {
        let found = campaign::Entity::find_by_id(campaign_id)
            .one(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Marketing))?;
        if found.is_none() {
            return Err(SeedError::MissingReference {
                domain: Domain::Marketing,
                entity: "campaign",
                reference: campaign_id.to_string(),
            });
        }
        Ok(())
    }
}
