//! Announcement model.

use serde::{Deserialize, Serialize};

use crate::notify::Delivery;

/// A posted announcement. `department` is free text, not a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub department: String,
    pub announcement: String,
}

/// Request body for posting an announcement with representative credentials.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnnouncementRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub announcement: String,
}

/// Result of a successful post, with the outcome of the local notification.
#[derive(Debug, Clone, Serialize)]
pub struct PostedAnnouncement {
    pub announcement: Announcement,
    pub notification: Delivery,
}
