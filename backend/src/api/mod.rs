//! REST API module.
//!
//! Handlers translate JSON bodies into service calls on the shared [`Campus`].

mod announcements;
mod login;
mod registration;

pub use announcements::*;
pub use login::*;
pub use registration::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::services::Campus;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Run `f` against the campus on the blocking pool.
///
/// Service calls do file I/O and may talk SMTP, so they stay off the async workers. The
/// lock is held for the whole call, which makes every mutation a single-writer step.
pub(crate) async fn with_campus<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce(&mut Campus) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let campus = state.campus.clone();
    tokio::task::spawn_blocking(move || {
        let mut campus = campus.blocking_lock();
        f(&mut campus)
    })
    .await?
}
