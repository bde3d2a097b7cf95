//! Out-of-band notifications triggered by the services.
//!
//! Both kinds are best effort: the caller's operation has already been persisted when a
//! notifier runs, and a failure only shows up in the returned [`Delivery`] and the logs.

mod local;
mod smtp;

pub use local::*;
pub use smtp::*;

use std::fmt;

use serde::Serialize;

/// Outcome of a single notification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Delivery {
    Sent,
    Failed { reason: String },
}

impl From<Result<(), NotifyError>> for Delivery {
    fn from(result: Result<(), NotifyError>) -> Self {
        match result {
            Ok(()) => Delivery::Sent,
            Err(err) => Delivery::Failed {
                reason: err.to_string(),
            },
        }
    }
}

/// Why a notification could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NotifyError {}

/// Sends the "registration successful" email to a new student.
pub trait Mailer: Send + Sync {
    fn send_registration(&self, name: &str, email: &str) -> Result<(), NotifyError>;
}

/// Shows a short-lived notice on the host.
pub trait LocalNotifier: Send + Sync {
    fn notify(&self, notice: &Notice) -> Result<(), NotifyError>;
}

/// A title/message/timeout triple for [`LocalNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub timeout_secs: u64,
}

/// Subject line of the registration email.
pub const REGISTRATION_SUBJECT: &str = "Registration Successful";

/// Body of the registration email.
pub fn registration_body(name: &str) -> String {
    format!(
        "Dear {},\n\nYou have successfully registered as a student.\n\nBest regards,\nICCT College",
        name
    )
}
