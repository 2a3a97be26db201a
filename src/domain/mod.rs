//! Domain layer containing business entities and logic.
//!
//! It defines entities, repository interfaces, and the metric generator
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`generator`] - Simulated rating, review and headline generation
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod generator;
pub mod repositories;
