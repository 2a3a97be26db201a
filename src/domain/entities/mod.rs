//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation goes through a separate
//! `NewBusiness` struct because ids and timestamps are assigned by the store.
//!
//! # Entity Types
//!
//! - [`Business`] - A persisted business record
//! - [`BusinessKey`] - Validated (name, location) identity
//! - [`Snapshot`] - The `{rating, reviews, headline}` triple
//! - [`Rating`] - One-decimal star rating in `[4.0, 5.0]`

pub mod business;

pub use business::{
    Business, BusinessKey, NewBusiness, REVIEWS_MAX, REVIEWS_MIN, Rating, Snapshot, Upserted,
};
