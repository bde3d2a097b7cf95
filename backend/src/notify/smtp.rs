//! Registration email over SMTP with STARTTLS.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{registration_body, Mailer, NotifyError, REGISTRATION_SUBJECT};
use crate::config::SmtpConfig;

/// [`Mailer`] that submits through a fixed SMTP relay.
///
/// Sender credentials are only checked when a message is sent, so a missing
/// `SENDER_EMAIL`/`SENDER_PASSWORD` surfaces as a failed delivery, not a startup error.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn build_message(&self, sender: &str, name: &str, email: &str) -> Result<Message, NotifyError> {
        Message::builder()
            .from(
                sender
                    .parse()
                    .map_err(|e| NotifyError(format!("Invalid sender address: {}", e)))?,
            )
            .to(email
                .parse()
                .map_err(|e| NotifyError(format!("Invalid recipient address: {}", e)))?)
            .subject(REGISTRATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(registration_body(name))
            .map_err(|e| NotifyError(format!("Could not build message: {}", e)))
    }
}

impl Mailer for SmtpMailer {
    fn send_registration(&self, name: &str, email: &str) -> Result<(), NotifyError> {
        let sender = self
            .config
            .sender_email
            .as_deref()
            .ok_or_else(|| NotifyError("SENDER_EMAIL is not set".to_string()))?;
        let password = self
            .config
            .sender_password
            .as_deref()
            .ok_or_else(|| NotifyError("SENDER_PASSWORD is not set".to_string()))?;

        let message = self.build_message(sender, name, email)?;

        let transport = SmtpTransport::starttls_relay(&self.config.host)
            .map_err(|e| NotifyError(format!("SMTP relay error: {}", e)))?
            .port(self.config.port)
            .credentials(Credentials::new(sender.to_string(), password.to_string()))
            .build();

        transport
            .send(&message)
            .map_err(|e| NotifyError(format!("SMTP send failed: {}", e)))?;

        tracing::info!(recipient = %email, "Registration email sent");
        Ok(())
    }
}
