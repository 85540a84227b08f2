//! Entity definitions, grouped by owning domain store.
//!
//! Each domain service owns its own relational schema; nothing here crosses a
//! store boundary. References into another domain (most notably `clinic_id`)
//! are tagged identifiers, not relations: the holding domain looks the value
//! up, it does not own the referenced row.

pub mod auth;
pub mod hr;
pub mod inventory;
pub mod marketing;
