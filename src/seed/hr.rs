use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::db::DbPool;
use crate::entities::hr::{employee, incentive_policy, target_revenue};
use crate::errors::SeedError;
use crate::fixtures::HrFixtures;

use super::{ClinicDirectory, Domain, SeedReport};

/// Seeds the HR store: employees, incentive policies, revenue targets.
///
/// Target revenues are inserted only after their employee rows exist; a
/// dangling employee reference aborts the whole domain run.
pub struct HrSeeder<'a> {
    db: &'a DbPool,
    fixtures: &'a HrFixtures,
    clinics: &'a dyn ClinicDirectory,
}

impl<'a> HrSeeder<'a> {
    pub fn new(
        db: &'a DbPool,
        fixtures: &'a HrFixtures,
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

        let mut report = SeedReport::new(Domain::Hr);
        self.seed_employees(&mut report).await?;
        self.seed_incentive_policies(&mut report).await?;
        self.seed_target_revenues(&mut report).await?;
        Ok(report)
    }

    /// Every clinic_id in the fixture set must already resolve in the auth
    /// store before this domain writes anything.
    async fn check_clinic_references(&self) -> Result<(), SeedError> {
        let mut clinic_ids: Vec<&str> = self
            .fixtures
            .employees
            .iter()
            .map(|e| e.clinic_id)
            .chain(self.fixtures.incentive_policies.iter().map(|p| p.clinic_id))
            .chain(self.fixtures.target_revenues.iter().map(|t| t.clinic_id))
            .collect();
        clinic_ids.sort_unstable();
        clinic_ids.dedup();

        for clinic_id in clinic_ids {
            if !self.clinics.clinic_exists(clinic_id).await? {
                return Err(SeedError::MissingReference {
                    domain: Domain::Hr,
                    entity: "clinic",
                    reference: clinic_id.to_string(),
                });
            }
        }
        Ok(())
    }

    async fn seed_employees(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.employees {
            let existing = employee::Entity::find_by_id(fixture.id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Hr))?;
            if existing.is_some() {
                report.note_skipped("employee", fixture.id);
                continue;
            }

            employee::ActiveModel {
                id: Set(fixture.id.to_string()),
                employee_number: Set(fixture.employee_number.to_string()),
                name: Set(fixture.name.to_string()),
                position: Set(fixture.position.to_string()),
                department: Set(fixture.department.to_string()),
                phone: Set(fixture.phone.map(str::to_string)),
                email: Set(fixture.email.map(str::to_string)),
                hire_date: Set(fixture.hire_date),
                status: Set(fixture.status),
                employment_type: Set(fixture.employment_type),
                base_salary: Set(fixture.base_salary),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
                updated_at: Set(None),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Hr))?;

            report.note_created("employee", fixture.id);
        }
        Ok(())
    }

    async fn seed_incentive_policies(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.incentive_policies {
            let existing = incentive_policy::Entity::find_by_id(fixture.id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Hr))?;
            if existing.is_some() {
                report.note_skipped("incentive_policy", fixture.id);
                continue;
            }

            incentive_policy::ActiveModel {
                id: Set(fixture.id.to_string()),
                name: Set(fixture.name.to_string()),
                policy_type: Set(fixture.policy_type),
                value: Set(fixture.value),
                min_achievement_rate: Set(fixture.min_achievement_rate),
                is_default: Set(fixture.is_default),
                is_active: Set(fixture.is_active),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Hr))?;

            report.note_created("incentive_policy", fixture.id);
        }
        Ok(())
    }

    async fn seed_target_revenues(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.target_revenues {
            // The employee row must exist in this store first.
            let employee = employee::Entity::find_by_id(fixture.employee_id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Hr))?;
            if employee.is_none() {
                return Err(SeedError::MissingReference {
                    domain: Domain::Hr,
                    entity: "employee",
                    reference: fixture.employee_id.to_string(),
                });
            }

            let key = (
                fixture.employee_id.to_string(),
                fixture.year,
                fixture.month,
            );
            let key_display = format!(
                "{}/{}-{:02}",
                fixture.employee_id, fixture.year, fixture.month
            );
            let existing = target_revenue::Entity::find_by_id(key)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Hr))?;
            if existing.is_some() {
                report.note_skipped("target_revenue", &key_display);
                continue;
            }

            target_revenue::ActiveModel {
                employee_id: Set(fixture.employee_id.to_string()),
                year: Set(fixture.year),
                month: Set(fixture.month),
                amount: Set(fixture.amount),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Hr))?;

            report.note_created("target_revenue", &key_display);
        }
        Ok(())
    }
}
