//! Outgoing mail over an SMTP relay.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

use crate::SmtpCredentials;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    /// Connection, TLS, authentication or submission failure reported by the relay
    #[error("{0}")]
    Transport(String),
}

/// A plain-text email ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    /// Convert into a lettre message with a UTF-8 plain-text body.
    pub fn to_message(&self) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(self.to.parse::<Mailbox>()?)
            .subject(&self.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())?;
        Ok(message)
    }
}

/// Something that can deliver an email on behalf of an SMTP account.
///
/// Each call is one complete delivery attempt.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, credentials: &SmtpCredentials, email: &Email) -> Result<(), MailError>;
}

/// Delivers mail through a STARTTLS relay.
///
/// A new SMTP session is opened for every message and closed once it has been
/// submitted, whether or not submission succeeded.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, credentials: &SmtpCredentials, email: &Email) -> Result<(), MailError> {
        let message = email.to_message()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(
                credentials.email.clone(),
                credentials.password.clone(),
            ))
            .build();

        debug!(host = %self.host, port = self.port, "Submitting message to SMTP relay");

        transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(address: &str) -> Email {
        Email {
            from: address.to_string(),
            to: address.to_string(),
            subject: "Новая запись на консультацию - Legal".to_string(),
            body: "Услуга: Legal".to_string(),
        }
    }

    #[test]
    fn test_to_message_is_plain_text_utf8() {
        let message = email("bookings@example.com").to_message().unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: bookings@example.com"));
        assert!(formatted.contains("To: bookings@example.com"));
        assert!(formatted.contains("Content-Type: text/plain; charset=utf-8"));
    }

    #[test]
    fn test_to_message_rejects_bad_address() {
        let result = email("not an address").to_message();
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[tokio::test]
    async fn test_send_fails_before_connecting_on_bad_address() {
        let mailer = SmtpMailer::new("smtp.invalid", 587);
        let credentials = SmtpCredentials::new("not an address", "secret");

        let result = mailer.send(&credentials, &email("not an address")).await;

        assert!(matches!(result, Err(MailError::Address(_))));
    }
}
