//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the snapshot generator and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::business_service::BusinessService`] - Snapshot get-or-create,
//!   headline regeneration and listing

pub mod services;
