use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::error::{AppError, Result};
use super::settings::EmailConfig;

/// Send the current document text by email. Synchronous, single attempt:
/// the call blocks the event loop until the SMTP submission returns or
/// errors, and there is no retry.
///
/// An incomplete config is a soft failure — no network call is attempted.
pub fn send(config: &EmailConfig, subject: &str, body: &str) -> Result<()> {
    if let Some(field) = config.first_missing_field() {
        return Err(AppError::Config(format!("{} is empty", field)));
    }

    let from: Mailbox = config
        .sender_email
        .parse()
        .map_err(|e| AppError::Config(format!("sender_email is not a valid address: {}", e)))?;
    let to: Mailbox = config
        .recipient_email
        .parse()
        .map_err(|e| AppError::Config(format!("recipient_email is not a valid address: {}", e)))?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .body(body.to_string())
        .map_err(|e| AppError::Transport(e.to_string()))?;

    let mailer = SmtpTransport::starttls_relay(&config.server)
        .map_err(|e| AppError::Transport(e.to_string()))?
        .port(config.port)
        .credentials(Credentials::new(
            config.sender_email.clone(),
            config.sender_password.clone(),
        ))
        .build();

    mailer
        .send(&message)
        .map(|_| ())
        .map_err(|e| AppError::Transport(e.to_string()))
}

/// Subject line used by the email action.
pub fn subject_for(filename: &str) -> String {
    format!("Current Text: {}", filename)
}
