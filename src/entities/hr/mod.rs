//! HR store: employees, incentive policies, and per-month revenue targets.

pub mod employee;
pub mod incentive_policy;
pub mod target_revenue;
