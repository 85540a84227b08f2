//! Auth store: clinics (tenants) and their users.

pub mod clinic;
pub mod user;
