//! Demo-tenant fixture catalog.
//!
//! A static, versioned description of the records needed to bootstrap one
//! demonstration clinic across all four domain stores. Every master record
//! carries a stable literal identifier so re-seeding resolves against the
//! same rows; ledger records carry no identity and append on every run.
//!
//! The catalog is pure data: it is never mutated at runtime and has no
//! behavior beyond enumeration.

pub mod auth;
pub mod hr;
pub mod inventory;
pub mod marketing;

use chrono::NaiveDate;

pub use auth::AuthFixtures;
pub use hr::HrFixtures;
pub use inventory::InventoryFixtures;
pub use marketing::MarketingFixtures;

/// The clinic every fixture row belongs to.
pub const DEMO_CLINIC_ID: &str = "clinic-001";

/// Full fixture catalog for the demo tenant.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub auth: AuthFixtures,
    pub hr: HrFixtures,
    pub inventory: InventoryFixtures,
    pub marketing: MarketingFixtures,
}

impl FixtureSet {
    pub fn demo() -> Self {
        Self {
            auth: AuthFixtures::demo(),
            hr: HrFixtures::demo(),
            inventory: InventoryFixtures::demo(),
            marketing: MarketingFixtures::demo(),
        }
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::demo()
    }
}

/// Date constructor for the static catalog. All literals below are valid
/// calendar dates.
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid calendar dates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_expected_cardinalities() {
        let set = FixtureSet::demo();
        assert_eq!(set.auth.users.len(), 3);
        assert_eq!(set.hr.employees.len(), 5);
        assert_eq!(set.hr.incentive_policies.len(), 1);
        assert_eq!(set.hr.target_revenues.len(), 3);
        assert_eq!(set.inventory.suppliers.len(), 3);
        assert_eq!(set.inventory.products.len(), 6);
        assert_eq!(set.inventory.product_suppliers.len(), 6);
        assert_eq!(set.inventory.stock_movements.len(), 7);
        assert_eq!(set.marketing.campaigns.len(), 4);
        assert_eq!(set.marketing.expenses.len(), 5);
        assert_eq!(set.marketing.performance.len(), 4);
        assert_eq!(set.marketing.patient_sources.len(), 6);
    }

    #[test]
    fn every_fixture_row_is_scoped_to_the_demo_clinic() {
        let set = FixtureSet::demo();
        assert_eq!(set.auth.clinic.id, DEMO_CLINIC_ID);
        assert!(set.auth.users.iter().all(|u| u.clinic_id == DEMO_CLINIC_ID));
        assert!(set.hr.employees.iter().all(|e| e.clinic_id == DEMO_CLINIC_ID));
        assert!(set
            .inventory
            .products
            .iter()
            .all(|p| p.clinic_id == DEMO_CLINIC_ID));
        assert!(set
            .marketing
            .campaigns
            .iter()
            .all(|c| c.clinic_id == DEMO_CLINIC_ID));
    }

    /// Current stock on each product must equal the signed sum of its ledger
    /// movements (zero opening balance). The seeder does not derive stock from
    /// the ledger, so the catalog itself has to be consistent.
    #[test]
    fn product_stock_matches_movement_ledger() {
        let set = FixtureSet::demo();
        for product in &set.inventory.products {
            let net: i64 = set
                .inventory
                .stock_movements
                .iter()
                .filter(|m| m.product_id == product.id)
                .map(|m| m.direction.signum() * m.quantity as i64)
                .sum();
            assert_eq!(
                net, product.current_stock as i64,
                "ledger for {} does not add up to its current stock",
                product.id
            );
        }
    }

    #[test]
    fn target_revenue_keys_are_unique() {
        let set = FixtureSet::demo();
        let mut keys: Vec<_> = set
            .hr
            .target_revenues
            .iter()
            .map(|t| (t.employee_id, t.year, t.month))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), set.hr.target_revenues.len());
    }

    #[test]
    fn product_supplier_links_reference_cataloged_rows() {
        let set = FixtureSet::demo();
        for link in &set.inventory.product_suppliers {
            assert!(set.inventory.products.iter().any(|p| p.id == link.product_id));
            assert!(set
                .inventory
                .suppliers
                .iter()
                .any(|s| s.id == link.supplier_id));
        }
    }

    #[test]
    fn expenses_and_performance_reference_cataloged_campaigns() {
        let set = FixtureSet::demo();
        for expense in &set.marketing.expenses {
            assert!(set
                .marketing
                .campaigns
                .iter()
                .any(|c| c.id == expense.campaign_id));
        }
        for row in &set.marketing.performance {
            assert!(set
                .marketing
                .campaigns
                .iter()
                .any(|c| c.id == row.campaign_id));
        }
    }

    #[test]
    fn out_movements_never_precede_stock() {
        // Replaying each product's ledger in order must never go negative.
        let set = FixtureSet::demo();
        for product in &set.inventory.products {
            let mut level: i64 = 0;
            for movement in set
                .inventory
                .stock_movements
                .iter()
                .filter(|m| m.product_id == product.id)
            {
                level += movement.direction.signum() * movement.quantity as i64;
                assert!(level >= 0, "ledger for {} dips below zero", product.id);
            }
        }
    }
}
