//! PostgreSQL implementation of business repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Business, BusinessKey, NewBusiness, Rating, Upserted};
use crate::domain::repositories::BusinessRepository;
use crate::error::StoreError;

/// Row shape of the `businesses` table.
#[derive(sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    name: String,
    location: String,
    rating_tenths: i16,
    reviews: i32,
    headline: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Business {
            id: row.id,
            name: row.name,
            location: row.location,
            rating: Rating::clamped(row.rating_tenths),
            reviews: row.reviews,
            headline: row.headline,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for business records.
///
/// Uniqueness of (name, location) is enforced by the
/// `businesses_name_location_key` constraint; creation relies on
/// `ON CONFLICT DO NOTHING` instead of a prior existence check.
pub struct PgBusinessRepository {
    pool: Arc<PgPool>,
}

impl PgBusinessRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for PgBusinessRepository {
    async fn find_one(&self, key: &BusinessKey) -> Result<Option<Business>, StoreError> {
        let row = sqlx::query_as::<_, BusinessRow>(
            r#"
            SELECT id, name, location, rating_tenths, reviews, headline, created_at, updated_at
            FROM businesses
            WHERE name = $1 AND location = $2
            "#,
        )
        .bind(key.name())
        .bind(key.location())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Business::from))
    }

    async fn create(&self, new_business: NewBusiness) -> Result<Upserted, StoreError> {
        let inserted = sqlx::query_as::<_, BusinessRow>(
            r#"
            INSERT INTO businesses (name, location, rating_tenths, reviews, headline)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (name, location) DO NOTHING
            RETURNING id, name, location, rating_tenths, reviews, headline, created_at, updated_at
            "#,
        )
        .bind(new_business.key.name())
        .bind(new_business.key.location())
        .bind(new_business.snapshot.rating.tenths())
        .bind(new_business.snapshot.reviews)
        .bind(&new_business.snapshot.headline)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(row) = inserted {
            return Ok(Upserted::Created(row.into()));
        }

        // The conflicting insert has committed by the time ON CONFLICT resolves,
        // so a fresh statement sees it.
        match self.find_one(&new_business.key).await? {
            Some(existing) => Ok(Upserted::Existing(existing)),
            None => Err(StoreError::Backend(
                "conflicting business record is not visible".to_string(),
            )),
        }
    }

    async fn save(&self, business: &Business) -> Result<Business, StoreError> {
        let row = sqlx::query_as::<_, BusinessRow>(
            r#"
            UPDATE businesses
            SET headline = $3, updated_at = GREATEST(NOW(), updated_at)
            WHERE name = $1 AND location = $2
            RETURNING id, name, location, rating_tenths, reviews, headline, created_at, updated_at
            "#,
        )
        .bind(&business.name)
        .bind(&business.location)
        .bind(&business.headline)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Business::from).ok_or(StoreError::NotFound)
    }

    async fn list_all(&self) -> Result<Vec<Business>, StoreError> {
        let rows = sqlx::query_as::<_, BusinessRow>(
            r#"
            SELECT id, name, location, rating_tenths, reviews, headline, created_at, updated_at
            FROM businesses
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Business::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
