//! Announcement endpoints.

use axum::{extract::State, Json};

use super::{success, with_campus, ApiResult};
use crate::models::{Announcement, PostAnnouncementRequest, PostedAnnouncement};
use crate::AppState;

/// GET /api/announcements - List announcements, oldest first.
pub async fn list_announcements(State(state): State<AppState>) -> ApiResult<Vec<Announcement>> {
    let mut campus = state.campus.lock().await;
    success(campus.announcements().list().to_vec())
}

/// POST /api/announcements - Post as the representative whose credentials are supplied.
pub async fn post_announcement(
    State(state): State<AppState>,
    Json(request): Json<PostAnnouncementRequest>,
) -> ApiResult<PostedAnnouncement> {
    let posted = with_campus(&state, move |campus| {
        let representative = campus
            .auth()
            .representative(&request.username, &request.password)?;
        campus
            .announcements()
            .post_as(&representative, &request.announcement)
    })
    .await?;

    success(posted)
}
