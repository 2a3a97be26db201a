//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_business.rs` for usage examples.

pub mod business_repository;

pub use business_repository::BusinessRepository;

#[cfg(test)]
pub use business_repository::MockBusinessRepository;
