use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::inventory::stock_movement::MovementDirection;

use super::DEMO_CLINIC_ID;

/// Inventory-domain fixtures: suppliers, products, their supplier links, and
/// an opening stock-movement ledger.
///
/// `current_stock` on each product equals the signed sum of that product's
/// movements, so a consumer deriving stock from the ledger agrees with the
/// seeded field.
#[derive(Debug, Clone)]
pub struct InventoryFixtures {
    pub suppliers: Vec<SupplierFixture>,
    pub products: Vec<ProductFixture>,
    pub product_suppliers: Vec<ProductSupplierFixture>,
    pub stock_movements: Vec<StockMovementFixture>,
}

#[derive(Debug, Clone)]
pub struct SupplierFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub contact_person: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub address: Option<&'static str>,
    pub clinic_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProductFixture {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub unit: &'static str,
    pub unit_price: Decimal,
    pub current_stock: i32,
    pub min_stock: i32,
    pub max_stock: i32,
    pub clinic_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProductSupplierFixture {
    pub product_id: &'static str,
    pub supplier_id: &'static str,
    pub is_preferred: bool,
    pub supplier_product_code: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct StockMovementFixture {
    pub product_id: &'static str,
    pub direction: MovementDirection,
    pub quantity: i32,
    pub reason: &'static str,
    pub performed_by: &'static str,
    pub occurred_at: DateTime<Utc>,
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("fixture timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

impl InventoryFixtures {
    pub fn demo() -> Self {
        Self {
            suppliers: vec![
                SupplierFixture {
                    id: "sup-001",
                    name: "DentaSupply Co.",
                    contact_person: Some("Rachel Moon"),
                    phone: Some("+1-555-0161"),
                    email: Some("orders@dentasupply.example"),
                    address: Some("12 Commerce Park"),
                    clinic_id: DEMO_CLINIC_ID,
                },
                SupplierFixture {
                    id: "sup-002",
                    name: "MediTrade Partners",
                    contact_person: Some("Victor Shin"),
                    phone: Some("+1-555-0162"),
                    email: Some("sales@meditrade.example"),
                    address: None,
                    clinic_id: DEMO_CLINIC_ID,
                },
                SupplierFixture {
                    id: "sup-003",
                    name: "Orbit Dental Lab",
                    contact_person: None,
                    phone: Some("+1-555-0163"),
                    email: Some("lab@orbitdental.example"),
                    address: Some("7 Industrial Way"),
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
            products: vec![
                ProductFixture {
                    id: "prod-001",
                    code: "MAT-0001",
                    name: "Composite Resin A2",
                    category: "Restorative",
                    unit: "syringe",
                    unit_price: dec!(42.50),
                    current_stock: 80,
                    min_stock: 20,
                    max_stock: 200,
                    clinic_id: DEMO_CLINIC_ID,
                },
                ProductFixture {
                    id: "prod-002",
                    code: "MAT-0002",
                    name: "Dental Impression Alginate",
                    category: "Impression",
                    unit: "bag",
                    unit_price: dec!(18.90),
                    current_stock: 50,
                    min_stock: 10,
                    max_stock: 120,
                    clinic_id: DEMO_CLINIC_ID,
                },
                ProductFixture {
                    id: "prod-003",
                    code: "CON-0003",
                    name: "Nitrile Gloves M",
                    category: "Consumable",
                    unit: "box",
                    unit_price: dec!(9.80),
                    current_stock: 170,
                    min_stock: 40,
                    max_stock: 400,
                    clinic_id: DEMO_CLINIC_ID,
                },
                ProductFixture {
                    id: "prod-004",
                    code: "PHA-0004",
                    name: "Lidocaine 2% Cartridge",
                    category: "Pharmaceutical",
                    unit: "box",
                    unit_price: dec!(27.00),
                    current_stock: 40,
                    min_stock: 15,
                    max_stock: 100,
                    clinic_id: DEMO_CLINIC_ID,
                },
                ProductFixture {
                    id: "prod-005",
                    code: "CON-0005",
                    name: "Saliva Ejectors",
                    category: "Consumable",
                    unit: "pack",
                    unit_price: dec!(6.40),
                    current_stock: 60,
                    min_stock: 20,
                    max_stock: 150,
                    clinic_id: DEMO_CLINIC_ID,
                },
                ProductFixture {
                    id: "prod-006",
                    code: "INS-0006",
                    name: "Scaler Tip S1",
                    category: "Instrument",
                    unit: "piece",
                    unit_price: dec!(54.00),
                    // Newly listed item: nothing received yet, ledger is empty
                    current_stock: 0,
                    min_stock: 2,
                    max_stock: 20,
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
            product_suppliers: vec![
                ProductSupplierFixture {
                    product_id: "prod-001",
                    supplier_id: "sup-001",
                    is_preferred: true,
                    supplier_product_code: Some("DS-CR-A2"),
                },
                ProductSupplierFixture {
                    product_id: "prod-002",
                    supplier_id: "sup-001",
                    is_preferred: true,
                    supplier_product_code: Some("DS-ALG-01"),
                },
                ProductSupplierFixture {
                    product_id: "prod-003",
                    supplier_id: "sup-002",
                    is_preferred: true,
                    supplier_product_code: None,
                },
                ProductSupplierFixture {
                    product_id: "prod-004",
                    supplier_id: "sup-002",
                    is_preferred: true,
                    supplier_product_code: Some("MT-LID-2"),
                },
                ProductSupplierFixture {
                    product_id: "prod-005",
                    supplier_id: "sup-002",
                    is_preferred: false,
                    supplier_product_code: None,
                },
                ProductSupplierFixture {
                    product_id: "prod-006",
                    supplier_id: "sup-003",
                    is_preferred: true,
                    supplier_product_code: Some("OB-SC-S1"),
                },
            ],
            stock_movements: vec![
                StockMovementFixture {
                    product_id: "prod-001",
                    direction: MovementDirection::In,
                    quantity: 100,
                    reason: "opening purchase",
                    performed_by: "Mina Cho",
                    occurred_at: ts("2025-03-03T09:15:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-001",
                    direction: MovementDirection::Out,
                    quantity: 20,
                    reason: "treatment usage",
                    performed_by: "Grace Han",
                    occurred_at: ts("2025-03-10T14:40:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-002",
                    direction: MovementDirection::In,
                    quantity: 50,
                    reason: "opening purchase",
                    performed_by: "Mina Cho",
                    occurred_at: ts("2025-03-03T09:20:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-003",
                    direction: MovementDirection::In,
                    quantity: 200,
                    reason: "bulk restock",
                    performed_by: "Mina Cho",
                    occurred_at: ts("2025-03-04T10:05:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-003",
                    direction: MovementDirection::Out,
                    quantity: 30,
                    reason: "weekly ward issue",
                    performed_by: "Grace Han",
                    occurred_at: ts("2025-03-11T08:30:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-004",
                    direction: MovementDirection::In,
                    quantity: 40,
                    reason: "opening purchase",
                    performed_by: "Daniel Park",
                    occurred_at: ts("2025-03-05T11:00:00Z"),
                },
                StockMovementFixture {
                    product_id: "prod-005",
                    direction: MovementDirection::In,
                    quantity: 60,
                    reason: "opening purchase",
                    performed_by: "Mina Cho",
                    occurred_at: ts("2025-03-05T11:10:00Z"),
                },
            ],
        }
    }
}
