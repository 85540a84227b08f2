use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Authentication principal.
///
/// Email is the natural unique key the seeder upserts against; `id` is the
/// stable fixture identifier.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Login email, unique within the auth store
    #[sea_orm(unique)]
    #[validate(email(message = "User email must be a valid address"))]
    pub email: String,

    /// Password credential (digest, never plaintext)
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    /// Role within the auth bounded context
    pub role: UserRole,

    /// Owning tenant
    pub clinic_id: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Role vocabulary of the auth domain.
///
/// Deliberately scoped to this bounded context; other parts of the product
/// use different role sets and the vocabularies are not unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    #[sea_orm(string_value = "MANAGER")]
    Manager,
    #[sea_orm(string_value = "STAFF")]
    Staff,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::Id"
    )]
    Clinic,
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
