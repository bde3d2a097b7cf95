//! Local notices routed through the log.

use super::{LocalNotifier, Notice, NotifyError};

/// [`LocalNotifier`] that emits each notice as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LocalNotifier for LogNotifier {
    fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        tracing::info!(
            title = %notice.title,
            message = %notice.message,
            timeout_secs = notice.timeout_secs,
            "notification"
        );
        Ok(())
    }
}
