use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::marketing::campaign::{CampaignStatus, CampaignType};

use super::{ApiClient, Envelope, ListQuery, Paginated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: Decimal,
    pub spent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target_patient_count: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub campaign_type: CampaignType,
    pub budget: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target_patient_count: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddExpenseRequest {
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceSnapshot {
    pub record_date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientSource {
    pub source_channel: String,
    pub patient_count: i32,
    pub record_date: NaiveDate,
}

impl ApiClient {
    /// `GET /marketing/campaigns`
    pub async fn list_campaigns(&self, query: &ListQuery) -> Envelope<Paginated<Campaign>> {
        self.get_with_query("/marketing/campaigns", query).await
    }

    /// `POST /marketing/campaigns`
    pub async fn create_campaign(&self, request: &CreateCampaignRequest) -> Envelope<Campaign> {
        self.post("/marketing/campaigns", request).await
    }

    /// `POST /marketing/campaigns/{id}/expenses`
    pub async fn add_expense(
        &self,
        campaign_id: &str,
        request: &AddExpenseRequest,
    ) -> Envelope<()> {
        self.post(&format!("/marketing/campaigns/{campaign_id}/expenses"), request)
            .await
    }

    /// `GET /marketing/campaigns/{id}/performance`
    pub async fn list_performance(
        &self,
        campaign_id: &str,
    ) -> Envelope<Vec<PerformanceSnapshot>> {
        self.get(&format!("/marketing/campaigns/{campaign_id}/performance"))
            .await
    }

    /// `GET /marketing/patient-sources`
    pub async fn list_patient_sources(
        &self,
        query: &ListQuery,
    ) -> Envelope<Paginated<PatientSource>> {
        self.get_with_query("/marketing/patient-sources", query).await
    }
}
