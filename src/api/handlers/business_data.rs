//! Handler for the get-or-create snapshot endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::business::{BusinessParams, SnapshotResponse};
use crate::domain::entities::BusinessKey;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the snapshot for a business, creating simulated data on first request.
///
/// # Endpoint
///
/// `POST /business-data`
///
/// # Request Body
///
/// ```json
/// { "name": "Cake & Co", "location": "Mumbai" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "rating": 4.3,
///   "reviews": 102,
///   "headline": "Cake & Co - The Best in Mumbai According to Customers"
/// }
/// ```
///
/// Repeating the request returns the same values.
///
/// # Errors
///
/// - 400 if `name` or `location` is missing or blank, or the body is not JSON
/// - 500 on store failure
pub async fn business_data_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessParams>, JsonRejection>,
) -> Result<Json<SnapshotResponse>, AppError> {
    let Json(params) = payload?;
    let key = BusinessKey::try_from(params)?;

    let business = state.business_service.get_or_create(&key).await?;

    Ok(Json(SnapshotResponse::from(business)))
}
