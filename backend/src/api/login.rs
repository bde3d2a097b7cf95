//! Login endpoint.

use axum::{extract::State, Json};

use super::{success, with_campus, ApiResult};
use crate::models::{LoginRequest, PrincipalView};
use crate::AppState;

/// POST /api/login - Authenticate a student or representative.
///
/// The stored digest never leaves the process; callers get the redacted profile.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<PrincipalView> {
    let principal = with_campus(&state, move |campus| {
        campus
            .auth()
            .authenticate(&request.role, &request.identifier, &request.password)
    })
    .await?;

    tracing::debug!(role = %principal.role(), "Issued principal");
    success(principal.redacted())
}
