//! Handler for headline regeneration.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::business::{BusinessParams, HeadlineResponse};
use crate::domain::entities::BusinessKey;
use crate::error::AppError;
use crate::state::AppState;

/// Picks a new headline for an existing business.
///
/// # Endpoint
///
/// `GET /regenerate-headline?name=Cake%20%26%20Co&location=Mumbai`
///
/// Never creates a record. The new headline may equal the previous one.
///
/// # Response
///
/// ```json
/// { "headline": "The Ultimate Guide to Cake & Co in Mumbai" }
/// ```
///
/// # Errors
///
/// - 400 if `name` or `location` is missing or blank
/// - 404 if the business does not exist
/// - 500 on store failure
pub async fn regenerate_headline_handler(
    State(state): State<AppState>,
    query: Result<Query<BusinessParams>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, AppError> {
    let Query(params) = query?;
    let key = BusinessKey::try_from(params)?;

    let business = state.business_service.regenerate_headline(&key).await?;

    Ok(Json(HeadlineResponse {
        headline: business.headline,
    }))
}
