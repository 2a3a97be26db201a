//! Business repository implementations.
//!
//! # Repositories
//!
//! - [`PgBusinessRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryBusinessRepository`] - In-process storage for tests and local runs

pub mod memory_business_repository;
pub mod pg_business_repository;

pub use memory_business_repository::InMemoryBusinessRepository;
pub use pg_business_repository::PgBusinessRepository;
