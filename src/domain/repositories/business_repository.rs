//! Repository trait for business record access.

use crate::domain::entities::{Business, BusinessKey, NewBusiness, Upserted};
use crate::error::StoreError;
use async_trait::async_trait;

/// Record store accessor for [`Business`] records keyed by (name, location).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBusinessRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryBusinessRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// Every operation fails with [`StoreError::Unavailable`] when the store cannot
/// be reached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Finds a record by exact (name, location) match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Business))` if found
    /// - `Ok(None)` if not found
    async fn find_one(&self, key: &BusinessKey) -> Result<Option<Business>, StoreError>;

    /// Inserts a record unless one with the same key already exists.
    ///
    /// The check and the insert are a single atomic step, so concurrent calls
    /// for the same key create at most one record. `created_at` and `updated_at`
    /// are both set to the store's current time.
    ///
    /// # Returns
    ///
    /// - [`Upserted::Created`] with the new record
    /// - [`Upserted::Existing`] with the stored record on conflict
    async fn create(&self, new_business: NewBusiness) -> Result<Upserted, StoreError>;

    /// Persists the headline of an existing record.
    ///
    /// `updated_at` is refreshed to the store's current time in the same
    /// operation and never moves backwards. Rating and reviews are not written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches the key of `business`.
    async fn save(&self, business: &Business) -> Result<Business, StoreError>;

    /// Returns every record ordered by `created_at` descending, then `id` descending.
    async fn list_all(&self) -> Result<Vec<Business>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
