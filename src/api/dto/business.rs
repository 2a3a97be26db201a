//! DTOs for the business snapshot endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Business, BusinessKey, Rating};
use crate::error::AppError;

/// Identity of a business as sent by clients.
///
/// Used both as the `POST /business-data` JSON body and as the
/// `GET /regenerate-headline` query string. Fields are optional so that a
/// missing field yields the service's own 400 message rather than a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BusinessParams {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub location: Option<String>,
}

#[allow(clippy::ptr_arg)]
fn not_blank(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl TryFrom<BusinessParams> for BusinessKey {
    type Error = AppError;

    fn try_from(params: BusinessParams) -> Result<Self, Self::Error> {
        params.validate()?;
        BusinessKey::new(
            params.name.unwrap_or_default(),
            params.location.unwrap_or_default(),
        )
    }
}

/// Response of `POST /business-data`.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub rating: Rating,
    pub reviews: i32,
    pub headline: String,
}

impl From<Business> for SnapshotResponse {
    fn from(business: Business) -> Self {
        Self {
            rating: business.rating,
            reviews: business.reviews,
            headline: business.headline,
        }
    }
}

/// Response of `GET /regenerate-headline`.
#[derive(Debug, Serialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

/// Full record as returned by `GET /businesses`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: Rating,
    pub reviews: i32,
    pub headline: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            name: business.name,
            location: business.location,
            rating: business.rating,
            reviews: business.reviews,
            headline: business.headline,
            created_at: business.created_at,
            updated_at: business.updated_at,
        }
    }
}
