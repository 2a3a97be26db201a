//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod business_data;
pub mod businesses;
pub mod health;
pub mod regenerate;

pub use business_data::business_data_handler;
pub use businesses::businesses_handler;
pub use health::health_handler;
pub use regenerate::regenerate_headline_handler;
