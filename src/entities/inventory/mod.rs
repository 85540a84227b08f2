//! Inventory store: suppliers, products, supplier links, and the append-only
//! stock-movement ledger.

pub mod product;
pub mod product_supplier;
pub mod stock_movement;
pub mod supplier;
