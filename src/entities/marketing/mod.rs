//! Marketing store: campaigns plus their append-only expense, performance,
//! and patient-attribution records.

pub mod campaign;
pub mod campaign_performance;
pub mod marketing_expense;
pub mod patient_source;
