use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Clinic entity: the tenant anchor every other entity references by
/// `clinic_id`. Created once per environment bootstrap and never deleted by
/// the seed process.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "clinics")]
pub struct Model {
    /// Stable literal identifier, e.g. "clinic-001"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Clinic display name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Clinic name must be between 1 and 255 characters"
    ))]
    pub name: String,

    /// Business registration number
    pub business_registration_number: String,

    /// Street address
    pub address: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// Contact email
    #[validate(email(message = "Clinic email must be a valid address"))]
    pub email: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
