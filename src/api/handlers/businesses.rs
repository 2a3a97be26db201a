//! Handler for listing every business record.

use axum::{Json, extract::State};

use crate::api::dto::business::BusinessResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all business records, newest first.
///
/// # Endpoint
///
/// `GET /businesses`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "name": "Cake & Co",
///     "location": "Mumbai",
///     "rating": 4.3,
///     "reviews": 102,
///     "headline": "Cake & Co - The Best in Mumbai According to Customers",
///     "createdAt": "2026-10-16T09:12:44.120Z",
///     "updatedAt": "2026-10-16T09:15:02.431Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn businesses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BusinessResponse>>, AppError> {
    let businesses = state.business_service.list_all().await?;

    Ok(Json(
        businesses.into_iter().map(BusinessResponse::from).collect(),
    ))
}
