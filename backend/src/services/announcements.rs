//! Posting and listing announcements.

use crate::errors::AppError;
use crate::models::{Announcement, PostedAnnouncement, Representative};
use crate::notify::{Delivery, LocalNotifier, Notice};
use crate::store::Store;

/// Title of the local notice raised for a new announcement.
pub const NOTICE_TITLE: &str = "New Announcement";

/// How long the local notice stays up.
pub const NOTICE_TIMEOUT_SECS: u64 = 10;

/// Appends announcements to the store and raises a local notice for each.
pub struct AnnouncementService<'a> {
    store: &'a mut Store,
    notifier: &'a dyn LocalNotifier,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(store: &'a mut Store, notifier: &'a dyn LocalNotifier) -> Self {
        Self { store, notifier }
    }

    /// All announcements, oldest first.
    pub fn list(&self) -> &[Announcement] {
        &self.store.document().announcements
    }

    /// Append an announcement for `department`.
    ///
    /// Only the text must be non-empty. The local notice is best effort.
    pub fn post(&mut self, department: &str, text: &str) -> Result<PostedAnnouncement, AppError> {
        if text.is_empty() {
            return Err(AppError::Validation(
                "Announcement cannot be empty!".to_string(),
            ));
        }

        let announcement = Announcement {
            department: department.to_string(),
            announcement: text.to_string(),
        };
        let record = announcement.clone();
        self.store.update(move |doc| doc.announcements.push(record))?;
        tracing::info!(department, "Announcement posted");

        let notice = Notice {
            title: NOTICE_TITLE.to_string(),
            message: text.to_string(),
            timeout_secs: NOTICE_TIMEOUT_SECS,
        };
        let notification = Delivery::from(self.notifier.notify(&notice));
        if let Delivery::Failed { reason } = &notification {
            tracing::warn!(error = %reason, "Failed to send notification");
        }

        Ok(PostedAnnouncement {
            announcement,
            notification,
        })
    }

    /// Post under the representative's department.
    pub fn post_as(
        &mut self,
        representative: &Representative,
        text: &str,
    ) -> Result<PostedAnnouncement, AppError> {
        self.post(&representative.department_name, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> Store {
        Store::open(dir.path().join("data.json"))
    }

    #[test]
    fn test_post_appends_as_last_element() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let notifier = RecordingNotifier::default();
        let mut service = AnnouncementService::new(&mut store, &notifier);

        for n in 0..3 {
            service.post("Registrar", &format!("notice {}", n)).unwrap();
        }
        service.post("CS Dept", "Exam moved").unwrap();

        let persisted = store.load().announcements;
        assert_eq!(persisted.len(), 4);
        assert_eq!(
            persisted.last(),
            Some(&Announcement {
                department: "CS Dept".into(),
                announcement: "Exam moved".into(),
            })
        );
        assert_eq!(persisted[0].announcement, "notice 0");
    }

    #[test]
    fn test_post_raises_notice() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let notifier = RecordingNotifier::default();

        let posted = AnnouncementService::new(&mut store, &notifier)
            .post("CS Dept", "Exam moved")
            .unwrap();

        assert_eq!(posted.notification, Delivery::Sent);
        assert_eq!(
            notifier.notices(),
            vec![Notice {
                title: NOTICE_TITLE.into(),
                message: "Exam moved".into(),
                timeout_secs: NOTICE_TIMEOUT_SECS,
            }]
        );
    }

    #[test]
    fn test_notice_failure_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let notifier = RecordingNotifier::failing();

        let posted = AnnouncementService::new(&mut store, &notifier)
            .post("CS Dept", "Exam moved")
            .unwrap();

        assert!(matches!(posted.notification, Delivery::Failed { .. }));
        assert_eq!(store.load().announcements.len(), 1);
    }

    #[test]
    fn test_empty_text_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let notifier = RecordingNotifier::default();

        let err = AnnouncementService::new(&mut store, &notifier)
            .post("CS Dept", "")
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(notifier.notices().is_empty());
        assert!(store.document().announcements.is_empty());
    }

    #[test]
    fn test_post_as_uses_department_name() {
        let dir = TempDir::new().unwrap();
        let mut store = open(&dir);
        let notifier = RecordingNotifier::default();
        let rep = Representative {
            department_name: "Engineering".into(),
            username: "eng".into(),
            password: crate::auth::hash_password("x"),
        };

        let mut service = AnnouncementService::new(&mut store, &notifier);
        let posted = service.post_as(&rep, "Lab closed Friday").unwrap();
        assert_eq!(posted.announcement.department, "Engineering");
        assert_eq!(service.list().len(), 1);
    }
}
