use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entities::hr::employee::{EmployeeStatus, EmploymentType};
use crate::entities::hr::incentive_policy::IncentiveType;

use super::{date, DEMO_CLINIC_ID};

/// HR-domain fixtures: employees, one incentive policy, and a quarter of
/// revenue targets for the clinical staff.
#[derive(Debug, Clone)]
pub struct HrFixtures {
    pub employees: Vec<EmployeeFixture>,
    pub incentive_policies: Vec<IncentivePolicyFixture>,
    pub target_revenues: Vec<TargetRevenueFixture>,
}

#[derive(Debug, Clone)]
pub struct EmployeeFixture {
    pub id: &'static str,
    pub employee_number: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub department: &'static str,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    pub employment_type: EmploymentType,
    pub base_salary: Decimal,
    pub clinic_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct IncentivePolicyFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub policy_type: IncentiveType,
    pub value: Decimal,
    pub min_achievement_rate: Decimal,
    pub is_default: bool,
    pub is_active: bool,
    pub clinic_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct TargetRevenueFixture {
    pub employee_id: &'static str,
    pub year: i32,
    pub month: i32,
    pub amount: Decimal,
    pub clinic_id: &'static str,
}

impl HrFixtures {
    pub fn demo() -> Self {
        Self {
            employees: vec![
                EmployeeFixture {
                    id: "emp-001",
                    employee_number: "E-2021-001",
                    name: "Dr. Yuna Seo",
                    position: "Lead Dentist",
                    department: "Clinical",
                    phone: Some("+1-555-0141"),
                    email: Some("yuna.seo@brightsmile.example"),
                    hire_date: date(2021, 3, 2),
                    status: EmployeeStatus::Active,
                    employment_type: EmploymentType::FullTime,
                    base_salary: dec!(9800.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                EmployeeFixture {
                    id: "emp-002",
                    employee_number: "E-2022-004",
                    name: "Dr. Ethan Lee",
                    position: "Dentist",
                    department: "Clinical",
                    phone: Some("+1-555-0142"),
                    email: Some("ethan.lee@brightsmile.example"),
                    hire_date: date(2022, 7, 18),
                    status: EmployeeStatus::Active,
                    employment_type: EmploymentType::FullTime,
                    base_salary: dec!(8200.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                EmployeeFixture {
                    id: "emp-003",
                    employee_number: "E-2022-009",
                    name: "Grace Han",
                    position: "Dental Hygienist",
                    department: "Clinical",
                    phone: Some("+1-555-0143"),
                    email: Some("grace.han@brightsmile.example"),
                    hire_date: date(2022, 11, 7),
                    status: EmployeeStatus::Active,
                    employment_type: EmploymentType::FullTime,
                    base_salary: dec!(4100.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                EmployeeFixture {
                    id: "emp-004",
                    employee_number: "E-2023-002",
                    name: "Noah Jung",
                    position: "Treatment Coordinator",
                    department: "Front Office",
                    phone: None,
                    email: Some("noah.jung@brightsmile.example"),
                    hire_date: date(2023, 2, 13),
                    status: EmployeeStatus::OnLeave,
                    employment_type: EmploymentType::FullTime,
                    base_salary: dec!(3600.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                EmployeeFixture {
                    id: "emp-005",
                    employee_number: "E-2024-006",
                    name: "Lily Kwon",
                    position: "Receptionist",
                    department: "Front Office",
                    phone: Some("+1-555-0145"),
                    email: None,
                    hire_date: date(2024, 6, 3),
                    status: EmployeeStatus::Active,
                    employment_type: EmploymentType::PartTime,
                    base_salary: dec!(2200.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
            incentive_policies: vec![IncentivePolicyFixture {
                id: "pol-001",
                name: "Standard clinical incentive",
                policy_type: IncentiveType::Percentage,
                value: dec!(3.5),
                min_achievement_rate: dec!(80),
                is_default: true,
                is_active: true,
                clinic_id: DEMO_CLINIC_ID,
            }],
            target_revenues: vec![
                TargetRevenueFixture {
                    employee_id: "emp-001",
                    year: 2025,
                    month: 3,
                    amount: dec!(45000.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                TargetRevenueFixture {
                    employee_id: "emp-002",
                    year: 2025,
                    month: 3,
                    amount: dec!(38000.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
                TargetRevenueFixture {
                    employee_id: "emp-003",
                    year: 2025,
                    month: 3,
                    amount: dec!(12000.00),
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
        }
    }
}
