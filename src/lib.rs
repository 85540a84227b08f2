//! Clinicore API — backend core for a multi-tenant dental-clinic management
//! system.
//!
//! A single logical tenant (a clinic) has its data partitioned across four
//! independently-stored domains: auth, HR, inventory, and marketing. This
//! crate provides the pieces that cut across those stores:
//!
//! - [`fixtures`]: the static demo-tenant catalog;
//! - [`seed`]: per-domain seeders and the orchestrator that runs them in
//!   dependency order (auth first);
//! - [`client`]: typed HTTP wrappers over the domain REST services with the
//!   uniform response envelope and tenant-scoping header;
//! - [`entities`], [`db`], [`config`], [`errors`]: the supporting layers.

pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod fixtures;
pub mod seed;

pub use client::{ApiClient, Envelope, Navigator, SessionState};
pub use config::AppConfig;
pub use errors::SeedError;
pub use fixtures::FixtureSet;
pub use seed::{Domain, SeedOrchestrator};
