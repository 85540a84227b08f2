use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::marketing::campaign::{CampaignStatus, CampaignType};

use super::{date, DEMO_CLINIC_ID};

/// Marketing-domain fixtures: campaigns plus their expense, performance, and
/// patient-attribution ledgers.
#[derive(Debug, Clone)]
pub struct MarketingFixtures {
    pub campaigns: Vec<CampaignFixture>,
    pub expenses: Vec<ExpenseFixture>,
    pub performance: Vec<PerformanceFixture>,
    pub patient_sources: Vec<PatientSourceFixture>,
}

#[derive(Debug, Clone)]
pub struct CampaignFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: Decimal,
    pub spent_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub target_patient_count: i32,
    pub clinic_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct ExpenseFixture {
    pub campaign_id: &'static str,
    pub amount: Decimal,
    pub category: &'static str,
    pub description: Option<&'static str>,
    pub expense_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct PerformanceFixture {
    pub campaign_id: &'static str,
    pub record_date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone)]
pub struct PatientSourceFixture {
    pub source_channel: &'static str,
    pub patient_count: i32,
    pub record_date: NaiveDate,
    pub clinic_id: &'static str,
}

impl MarketingFixtures {
    pub fn demo() -> Self {
        Self {
            campaigns: vec![
                CampaignFixture {
                    id: "camp-001",
                    name: "Spring Whitening Event",
                    campaign_type: CampaignType::Event,
                    status: CampaignStatus::Active,
                    budget: dec!(5000.00),
                    spent_amount: dec!(2100.00),
                    start_date: date(2025, 3, 1),
                    end_date: Some(date(2025, 4, 30)),
                    target_patient_count: 60,
                    clinic_id: DEMO_CLINIC_ID,
                },
                CampaignFixture {
                    id: "camp-002",
                    name: "Search Ads - Implant Keywords",
                    campaign_type: CampaignType::Search,
                    status: CampaignStatus::Active,
                    budget: dec!(8000.00),
                    spent_amount: dec!(3450.00),
                    start_date: date(2025, 2, 15),
                    end_date: None,
                    target_patient_count: 40,
                    clinic_id: DEMO_CLINIC_ID,
                },
                CampaignFixture {
                    id: "camp-003",
                    name: "Instagram Before/After Series",
                    campaign_type: CampaignType::Sns,
                    status: CampaignStatus::Completed,
                    budget: dec!(2500.00),
                    spent_amount: dec!(2500.00),
                    start_date: date(2025, 1, 10),
                    end_date: Some(date(2025, 2, 28)),
                    target_patient_count: 30,
                    clinic_id: DEMO_CLINIC_ID,
                },
                CampaignFixture {
                    id: "camp-004",
                    name: "Neighborhood Flyer Drop",
                    campaign_type: CampaignType::Offline,
                    status: CampaignStatus::Draft,
                    budget: dec!(1200.00),
                    spent_amount: dec!(0.00),
                    start_date: date(2025, 5, 1),
                    end_date: Some(date(2025, 5, 31)),
                    target_patient_count: 25,
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
            expenses: vec![
                ExpenseFixture {
                    campaign_id: "camp-001",
                    amount: dec!(1400.00),
                    category: "venue",
                    description: Some("Event space and signage"),
                    expense_date: date(2025, 3, 2),
                },
                ExpenseFixture {
                    campaign_id: "camp-001",
                    amount: dec!(700.00),
                    category: "printing",
                    description: None,
                    expense_date: date(2025, 3, 6),
                },
                ExpenseFixture {
                    campaign_id: "camp-002",
                    amount: dec!(1800.00),
                    category: "ad_spend",
                    description: Some("February search budget"),
                    expense_date: date(2025, 2, 28),
                },
                ExpenseFixture {
                    campaign_id: "camp-002",
                    amount: dec!(1650.00),
                    category: "ad_spend",
                    description: Some("March search budget"),
                    expense_date: date(2025, 3, 31),
                },
                ExpenseFixture {
                    campaign_id: "camp-003",
                    amount: dec!(2500.00),
                    category: "ad_spend",
                    description: Some("Boosted posts, full run"),
                    expense_date: date(2025, 2, 28),
                },
            ],
            performance: vec![
                PerformanceFixture {
                    campaign_id: "camp-002",
                    record_date: date(2025, 3, 1),
                    impressions: 48200,
                    clicks: 1630,
                    conversions: 21,
                    revenue: dec!(18900.00),
                },
                PerformanceFixture {
                    campaign_id: "camp-002",
                    record_date: date(2025, 3, 15),
                    impressions: 51400,
                    clicks: 1720,
                    conversions: 18,
                    revenue: dec!(16400.00),
                },
                PerformanceFixture {
                    campaign_id: "camp-003",
                    record_date: date(2025, 2, 14),
                    impressions: 30100,
                    clicks: 2210,
                    conversions: 12,
                    revenue: dec!(7300.00),
                },
                PerformanceFixture {
                    campaign_id: "camp-001",
                    record_date: date(2025, 3, 20),
                    impressions: 9100,
                    clicks: 540,
                    conversions: 26,
                    revenue: dec!(11250.00),
                },
            ],
            patient_sources: vec![
                PatientSourceFixture {
                    source_channel: "search",
                    patient_count: 14,
                    record_date: date(2025, 3, 7),
                    clinic_id: DEMO_CLINIC_ID,
                },
                PatientSourceFixture {
                    source_channel: "referral",
                    patient_count: 9,
                    record_date: date(2025, 3, 7),
                    clinic_id: DEMO_CLINIC_ID,
                },
                PatientSourceFixture {
                    source_channel: "sns",
                    patient_count: 6,
                    record_date: date(2025, 3, 14),
                    clinic_id: DEMO_CLINIC_ID,
                },
                PatientSourceFixture {
                    source_channel: "walk_in",
                    patient_count: 11,
                    record_date: date(2025, 3, 14),
                    clinic_id: DEMO_CLINIC_ID,
                },
                PatientSourceFixture {
                    source_channel: "search",
                    patient_count: 17,
                    record_date: date(2025, 3, 21),
                    clinic_id: DEMO_CLINIC_ID,
                },
                PatientSourceFixture {
                    source_channel: "event",
                    patient_count: 8,
                    record_date: date(2025, 3, 21),
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
        }
    }
}
