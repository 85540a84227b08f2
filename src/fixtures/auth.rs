use crate::entities::auth::user::UserRole;

use super::DEMO_CLINIC_ID;

/// Auth-domain fixtures: the demo clinic and its login users.
#[derive(Debug, Clone)]
pub struct AuthFixtures {
    pub clinic: ClinicFixture,
    pub users: Vec<UserFixture>,
}

#[derive(Debug, Clone)]
pub struct ClinicFixture {
    pub id: &'static str,
    pub name: &'static str,
    pub business_registration_number: &'static str,
    pub address: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct UserFixture {
    pub id: &'static str,
    /// Idempotency key: re-seeding matches on email, not id
    pub email: &'static str,
    /// Demo credential, digested before storage
    pub password: &'static str,
    pub display_name: &'static str,
    pub role: UserRole,
    pub clinic_id: &'static str,
}

impl AuthFixtures {
    pub fn demo() -> Self {
        Self {
            clinic: ClinicFixture {
                id: DEMO_CLINIC_ID,
                name: "Bright Smile Dental Clinic",
                business_registration_number: "123-45-67890",
                address: Some("88 Harbor View Road, Suite 301"),
                phone: Some("+1-555-0130"),
                email: Some("hello@brightsmile.example"),
            },
            users: vec![
                UserFixture {
                    id: "user-001",
                    email: "admin@brightsmile.example",
                    password: "demo-admin-2024!",
                    display_name: "Sora Kim",
                    role: UserRole::Admin,
                    clinic_id: DEMO_CLINIC_ID,
                },
                UserFixture {
                    id: "user-002",
                    email: "manager@brightsmile.example",
                    password: "demo-manager-2024!",
                    display_name: "Daniel Park",
                    role: UserRole::Manager,
                    clinic_id: DEMO_CLINIC_ID,
                },
                UserFixture {
                    id: "user-003",
                    email: "frontdesk@brightsmile.example",
                    password: "demo-staff-2024!",
                    display_name: "Mina Cho",
                    role: UserRole::Staff,
                    clinic_id: DEMO_CLINIC_ID,
                },
            ],
        }
    }
}
