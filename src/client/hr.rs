use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::hr::employee::{EmployeeStatus, EmploymentType};
use crate::entities::hr::incentive_policy::IncentiveType;

use super::{ApiClient, Envelope, ListQuery, Paginated};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub employee_number: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    pub employment_type: EmploymentType,
    pub base_salary: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeRequest {
    pub employee_number: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hire_date: NaiveDate,
    pub employment_type: EmploymentType,
    pub base_salary: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncentivePolicy {
    pub id: String,
    pub name: String,
    pub policy_type: IncentiveType,
    pub value: Decimal,
    pub min_achievement_rate: Decimal,
    pub is_default: bool,
    pub is_active: bool,
}

impl ApiClient {
    /// `GET /hr/employees`
    pub async fn list_employees(&self, query: &ListQuery) -> Envelope<Paginated<Employee>> {
        self.get_with_query("/hr/employees", query).await
    }

    /// `GET /hr/employees/{id}`
    pub async fn get_employee(&self, id: &str) -> Envelope<Employee> {
        self.get(&format!("/hr/employees/{id}")).await
    }

    /// `POST /hr/employees`
    pub async fn create_employee(&self, request: &CreateEmployeeRequest) -> Envelope<Employee> {
        self.post("/hr/employees", request).await
    }

    /// `GET /hr/incentive-policies`
    pub async fn list_incentive_policies(&self) -> Envelope<Vec<IncentivePolicy>> {
        self.get("/hr/incentive-policies").await
    }
}
