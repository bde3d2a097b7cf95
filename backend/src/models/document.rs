//! The single persisted document.

use serde::{Deserialize, Serialize};

use super::{Announcement, Representative, Student};

/// Root of the data file: three collections in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub representatives: Vec<Representative>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.representatives.is_empty() && self.announcements.is_empty()
    }
}
