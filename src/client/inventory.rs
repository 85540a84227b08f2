use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::inventory::stock_movement::MovementDirection;

use super::{ApiClient, Envelope, ListQuery, Paginated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub unit_price: Decimal,
    pub current_stock: i32,
    pub min_stock: i32,
    pub max_stock: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProductRequest {
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub unit_price: Decimal,
    pub min_stock: i32,
    pub max_stock: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordMovementRequest {
    pub product_id: String,
    pub direction: MovementDirection,
    pub quantity: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    pub direction: MovementDirection,
    pub quantity: i32,
    pub reason: String,
    pub performed_by: String,
    pub occurred_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET /inventory/products`
    pub async fn list_products(&self, query: &ListQuery) -> Envelope<Paginated<Product>> {
        self.get_with_query("/inventory/products", query).await
    }

    /// `POST /inventory/products`
    pub async fn create_product(&self, request: &CreateProductRequest) -> Envelope<Product> {
        self.post("/inventory/products", request).await
    }

    /// `GET /inventory/suppliers`
    pub async fn list_suppliers(&self, query: &ListQuery) -> Envelope<Paginated<Supplier>> {
        self.get_with_query("/inventory/suppliers", query).await
    }

    /// `POST /inventory/stock-movements`
    pub async fn record_stock_movement(
        &self,
        request: &RecordMovementRequest,
    ) -> Envelope<StockMovement> {
        self.post("/inventory/stock-movements", request).await
    }
}
