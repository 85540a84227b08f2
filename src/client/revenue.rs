use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ApiClient, Envelope};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRevenue {
    pub employee_id: String,
    pub year: i32,
    pub month: i32,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: i32,
}

/// Aggregated target-vs-actual for one month.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: i32,
    pub target_total: Decimal,
    pub actual_total: Decimal,
    pub achievement_rate: Decimal,
}

impl ApiClient {
    /// `GET /revenue/targets?year=&month=`
    pub async fn list_target_revenues(&self, query: &MonthQuery) -> Envelope<Vec<TargetRevenue>> {
        self.get_with_query("/revenue/targets", query).await
    }

    /// `PUT /revenue/targets`
    pub async fn upsert_target_revenue(&self, target: &TargetRevenue) -> Envelope<TargetRevenue> {
        self.put("/revenue/targets", target).await
    }

    /// `GET /revenue/summary?year=&month=`
    pub async fn monthly_summary(&self, query: &MonthQuery) -> Envelope<MonthlySummary> {
        self.get_with_query("/revenue/summary", query).await
    }
}
