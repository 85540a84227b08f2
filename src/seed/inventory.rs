use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::inventory::{product, product_supplier, stock_movement, supplier};
use crate::errors::SeedError;
use crate::fixtures::InventoryFixtures;

use super::{ClinicDirectory, Domain, SeedReport};

/// Seeds the inventory store.
///
/// Ordering within the domain: suppliers and products first, then the links
/// between them, then the stock ledger. Links and movements referencing a
/// row that is not present abort the domain run.
///
/// Stock movements are ledger rows: they append on every run. Running the
/// seeder twice doubles the movement count while leaving master data alone.
pub struct InventorySeeder<'a> {
    db: &'a DbPool,
    fixtures: &'a InventoryFixtures,
    clinics: &'a dyn ClinicDirectory,
}

impl<'a> InventorySeeder<'a> {
    pub fn new(
        db: &'a DbPool,
        fixtures: &'a InventoryFixtures,
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

        let mut report = SeedReport::new(Domain::Inventory);
        self.seed_suppliers(&mut report).await?;
        self.seed_products(&mut report).await?;
        self.seed_product_suppliers(&mut report).await?;
        self.append_stock_movements(&mut report).await?;
        Ok(report)
    }

    async fn check_clinic_references(&self) -> Result<(), SeedError> {
        let mut clinic_ids: Vec<&str> = self
            .fixtures
            .suppliers
            .iter()
            .map(|s| s.clinic_id)
            .chain(self.fixtures.products.iter().map(|p| p.clinic_id))
            .collect();
        clinic_ids.sort_unstable();
        clinic_ids.dedup();

        for clinic_id in clinic_ids {
            if !self.clinics.clinic_exists(clinic_id).await? {
                return Err(SeedError::MissingReference {
                    domain: Domain::Inventory,
                    entity: "clinic",
                    reference: clinic_id.to_string(),
                });
            }
        }
        Ok(())
    }

    async fn seed_suppliers(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.suppliers {
            let existing = supplier::Entity::find_by_id(fixture.id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Inventory))?;
            if existing.is_some() {
                report.note_skipped("supplier", fixture.id);
                continue;
            }

            supplier::ActiveModel {
                id: Set(fixture.id.to_string()),
                name: Set(fixture.name.to_string()),
                contact_person: Set(fixture.contact_person.map(str::to_string)),
                phone: Set(fixture.phone.map(str::to_string)),
                email: Set(fixture.email.map(str::to_string)),
                address: Set(fixture.address.map(str::to_string)),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;

            report.note_created("supplier", fixture.id);
        }
        Ok(())
    }

    async fn seed_products(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.products {
            let existing = product::Entity::find_by_id(fixture.id)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Inventory))?;
            if existing.is_some() {
                report.note_skipped("product", fixture.id);
                continue;
            }

            product::ActiveModel {
                id: Set(fixture.id.to_string()),
                code: Set(fixture.code.to_string()),
                name: Set(fixture.name.to_string()),
                category: Set(fixture.category.to_string()),
                unit: Set(fixture.unit.to_string()),
                unit_price: Set(fixture.unit_price),
                current_stock: Set(fixture.current_stock),
                min_stock: Set(fixture.min_stock),
                max_stock: Set(fixture.max_stock),
                clinic_id: Set(fixture.clinic_id.to_string()),
                created_at: Set(Utc::now()),
                updated_at: Set(None),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;

            report.note_created("product", fixture.id);
        }
        Ok(())
    }

    async fn seed_product_suppliers(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.product_suppliers {
            self.require_product(fixture.product_id).await?;
            self.require_supplier(fixture.supplier_id).await?;

            let key = (
                fixture.product_id.to_string(),
                fixture.supplier_id.to_string(),
            );
            let key_display = format!("{}<->{}", fixture.product_id, fixture.supplier_id);
            let existing = product_supplier::Entity::find_by_id(key)
                .one(self.db)
                .await
                .map_err(SeedError::in_domain(Domain::Inventory))?;
            if existing.is_some() {
                report.note_skipped("product_supplier", &key_display);
                continue;
            }

            product_supplier::ActiveModel {
                product_id: Set(fixture.product_id.to_string()),
                supplier_id: Set(fixture.supplier_id.to_string()),
                is_preferred: Set(fixture.is_preferred),
                supplier_product_code: Set(fixture.supplier_product_code.map(str::to_string)),
                created_at: Set(Utc::now()),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;

            report.note_created("product_supplier", &key_display);
        }
        Ok(())
    }

    async fn append_stock_movements(&self, report: &mut SeedReport) -> Result<(), SeedError> {
        for fixture in &self.fixtures.stock_movements {
            self.require_product(fixture.product_id).await?;

            stock_movement::ActiveModel {
                id: Set(Uuid::new_v4()),
                product_id: Set(fixture.product_id.to_string()),
                direction: Set(fixture.direction),
                quantity: Set(fixture.quantity),
                reason: Set(fixture.reason.to_string()),
                performed_by: Set(fixture.performed_by.to_string()),
                occurred_at: Set(fixture.occurred_at),
            }
            .insert(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;

            report.note_appended("stock_movement", fixture.product_id);
        }
        Ok(())
    }

    async fn require_product(&self, product_id: &str) -> Result<(), SeedError> {
        let found = product::Entity::find_by_id(product_id)
            .one(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;
        if found.is_none() {
            return Err(SeedError::MissingReference {
                domain: Domain::Inventory,
                entity: "product",
                reference: product_id.to_string(),
            });
        }
        Ok(())
    }

    async fn require_supplier(&self, supplier_id: &str) -> Result<(), SeedError> {
        let found = supplier::Entity::find_by_id(supplier_id)
            .one(self.db)
            .await
            .map_err(SeedError::in_domain(Domain::Inventory))?;
        if found.is_none() {
            return Err(SeedError::MissingReference {
                domain: Domain::Inventory,
                entity: "supplier",
                reference: supplier_id.to_string(),
            });
        }
        Ok(())
    }
}
