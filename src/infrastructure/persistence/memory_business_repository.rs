//! In-process implementation of business repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Business, BusinessKey, NewBusiness, Upserted};
use crate::domain::repositories::BusinessRepository;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<BusinessKey, Business>,
    last_id: i64,
}

/// Business repository held entirely in memory.
///
/// All state sits behind one [`RwLock`]; insert-if-absent runs under the
/// write lock, so concurrent creations for a key never duplicate. Contents are
/// lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBusinessRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn find_one(&self, key: &BusinessKey) -> Result<Option<Business>, StoreError> {
        Ok(self.inner.read().await.records.get(key).cloned())
    }

    async fn create(&self, new_business: NewBusiness) -> Result<Upserted, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.records.get(&new_business.key) {
            return Ok(Upserted::Existing(existing.clone()));
        }

        inner.last_id += 1;
        let now = Utc::now();
        let business = Business {
            id: inner.last_id,
            name: new_business.key.name().to_string(),
            location: new_business.key.location().to_string(),
            rating: new_business.snapshot.rating,
            reviews: new_business.snapshot.reviews,
            headline: new_business.snapshot.headline,
            created_at: now,
            updated_at: now,
        };

        inner.records.insert(new_business.key, business.clone());
        Ok(Upserted::Created(business))
    }

    async fn save(&self, business: &Business) -> Result<Business, StoreError> {
        let mut inner = self.inner.write().await;

        let stored = inner
            .records
            .get_mut(&business.key())
            .ok_or(StoreError::NotFound)?;

        stored.headline = business.headline.clone();
        stored.updated_at = Utc::now().max(stored.updated_at);

        Ok(stored.clone())
    }

    async fn list_all(&self) -> Result<Vec<Business>, StoreError> {
        let mut records: Vec<Business> =
            self.inner.read().await.records.values().cloned().collect();

        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
