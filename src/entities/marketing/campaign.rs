use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Marketing initiative.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Campaign name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub campaign_type: CampaignType,

    pub status: CampaignStatus,

    pub budget: Decimal,

    /// Amount spent so far, maintained by expense recording
    pub spent_amount: Decimal,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    /// How many new patients the campaign aims to attract
    pub target_patient_count: i32,

    pub clinic_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    #[sea_orm(string_value = "event")]
    Event,
    #[sea_orm(string_value = "search")]
    Search,
    #[sea_orm(string_value = "sns")]
    Sns,
    #[sea_orm(string_value = "offline")]
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "paused")]
    Paused,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::marketing_expense::Entity")]
    Expenses,
    #[sea_orm(has_many = "super::campaign_performance::Entity")]
    Performance,
}

impl Related<super::marketing_expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl Related<super::campaign_performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
