use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inventory item.
///
/// `current_stock` is seeded as an independent field rather than derived from
/// the movement ledger; the fixture catalog keeps the two consistent and a
/// test asserts the ledger sum, but the seeder never recomputes stock.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Product code, unique within a tenant's store
    #[sea_orm(unique)]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Product code must be between 1 and 50 characters"
    ))]
    pub code: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Category (consumable, instrument, pharmaceutical, ...)
    pub category: String,

    /// Stocking unit (box, piece, bottle, ...)
    pub unit: String,

    pub unit_price: Decimal,

    pub current_stock: i32,
    pub min_stock: i32,
    pub max_stock: i32,

    pub clinic_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_supplier::Entity")]
    ProductSuppliers,
    #[sea_orm(has_many = "super::stock_movement::Entity")]
    StockMovements,
}

impl Related<super::product_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductSuppliers.def()
    }
}

impl Related<super::stock_movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockMovements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
