//! Business snapshot orchestration: get-or-create, regenerate, list.

use std::sync::Arc;

use metrics::counter;

use crate::domain::entities::{Business, BusinessKey, NewBusiness, Upserted};
use crate::domain::generator::SnapshotGenerator;
use crate::domain::repositories::BusinessRepository;
use crate::error::{AppError, NOT_FOUND_MESSAGE, StoreError};

/// Service composing the record store and the snapshot generator.
///
/// Stateless apart from the injected repository; safe to share across requests.
pub struct BusinessService {
    repository: Arc<dyn BusinessRepository>,
    generator: SnapshotGenerator,
}

impl BusinessService {
    /// Creates a new business service.
    pub fn new(repository: Arc<dyn BusinessRepository>, generator: SnapshotGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Returns the record for `key`, creating it with generated metrics on first request.
    ///
    /// An existing record is returned unchanged; nothing is regenerated. When
    /// two callers race on a new key, the store's insert-if-absent makes both
    /// receive the same record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn get_or_create(&self, key: &BusinessKey) -> Result<Business, AppError> {
        if let Some(existing) = self.repository.find_one(key).await? {
            return Ok(existing);
        }

        let snapshot = self.generator.generate_metrics(key.name(), key.location());

        match self
            .repository
            .create(NewBusiness::new(key.clone(), snapshot))
            .await?
        {
            Upserted::Created(business) => {
                counter!("business_records_created_total").increment(1);
                tracing::info!(
                    id = business.id,
                    name = %business.name,
                    location = %business.location,
                    rating = %business.rating,
                    reviews = business.reviews,
                    "Created business record"
                );
                Ok(business)
            }
            Upserted::Existing(business) => {
                tracing::debug!(
                    id = business.id,
                    "Concurrent creation resolved to existing record"
                );
                Ok(business)
            }
        }
    }

    /// Replaces the headline of an existing record.
    ///
    /// Rating and reviews are untouched; `updated_at` is refreshed by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `key`; no write happens then.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn regenerate_headline(&self, key: &BusinessKey) -> Result<Business, AppError> {
        let mut business = self
            .repository
            .find_one(key)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        business.headline = self
            .generator
            .generate_headline(&business.name, &business.location);

        let saved = self.repository.save(&business).await?;

        counter!("business_headlines_regenerated_total").increment(1);
        tracing::info!(id = saved.id, headline = %saved.headline, "Regenerated headline");

        Ok(saved)
    }

    /// Returns every record, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_all(&self) -> Result<Vec<Business>, AppError> {
        Ok(self.repository.list_all().await?)
    }

    /// Probes the record store.
    pub async fn check_store(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }

    /// Name of the configured store backend.
    pub fn store_backend(&self) -> &'static str {
        self.repository.backend()
    }
}
