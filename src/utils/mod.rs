//! Utility helpers used across the application.
//!
//! - [`random`] - Injectable random number sources

pub mod random;
