use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity
///
/// Independent of the auth store's users: an employee row carries no link to
/// a login principal in the fixture data.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Employee number, unique within the HR store
    #[sea_orm(unique)]
    #[validate(length(min = 1, max = 50))]
    pub employee_number: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Employee name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Job title (e.g. dentist, hygienist, coordinator)
    pub position: String,

    /// Organizational department
    pub department: String,

    pub phone: Option<String>,

    #[validate(email(message = "Employee email must be a valid address"))]
    pub email: Option<String>,

    pub hire_date: NaiveDate,

    pub status: EmployeeStatus,

    pub employment_type: EmploymentType,

    /// Monthly base salary
    pub base_salary: Decimal,

    /// Owning tenant
    pub clinic_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "on_leave")]
    OnLeave,
    #[sea_orm(string_value = "resigned")]
    Resigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    #[sea_orm(string_value = "full_time")]
    FullTime,
    #[sea_orm(string_value = "part_time")]
    PartTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::target_revenue::Entity")]
    TargetRevenues,
}

impl Related<super::target_revenue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TargetRevenues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
