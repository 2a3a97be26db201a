//! Business logic services for the application layer.

pub mod business_service;

pub use business_service::BusinessService;
