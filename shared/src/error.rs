//! Error types for the booking Lambda functions.

use thiserror::Error;

use crate::mailer::MailError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while starting a Lambda function.
#[derive(Error, Debug)]
pub enum Error {
    /// AWS SDK error
    #[error("AWS error: {0}")]
    Aws(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Ways a booking notification can fail.
///
/// The `Display` text of each variant is the message returned to the caller.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Request body is not JSON of the expected shape
    #[error("Некорректный JSON в запросе")]
    InvalidJson(#[source] serde_json::Error),

    /// One of service, date or time is missing
    #[error("Не указаны обязательные поля: услуга, дата, время")]
    MissingFields,

    /// Anything other than POST or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// SMTP credentials were not provided to the function
    #[error("Email настройки не сконфигурированы")]
    NotConfigured,

    /// Composing or delivering the email failed
    #[error("Ошибка отправки email: {0}")]
    Delivery(#[from] MailError),
}

impl NotificationError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            NotificationError::InvalidJson(_) | NotificationError::MissingFields => 400,
            NotificationError::MethodNotAllowed => 405,
            NotificationError::NotConfigured | NotificationError::Delivery(_) => 500,
        }
    }

    /// Whether the response should echo the request id.
    ///
    /// Only delivery failures do, since nothing was attempted in the other cases.
    pub fn includes_request_id(&self) -> bool {
        matches!(self, NotificationError::Delivery(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert_eq!(NotificationError::InvalidJson(invalid).status_code(), 400);
        assert_eq!(NotificationError::MissingFields.status_code(), 400);
        assert_eq!(NotificationError::MethodNotAllowed.status_code(), 405);
        assert_eq!(NotificationError::NotConfigured.status_code(), 500);

        let delivery = NotificationError::from(MailError::Transport("boom".to_string()));
        assert_eq!(delivery.status_code(), 500);
    }

    #[test]
    fn test_delivery_message_embeds_cause() {
        let err = NotificationError::from(MailError::Transport("connection refused".to_string()));
        assert_eq!(err.to_string(), "Ошибка отправки email: connection refused");
        assert!(err.includes_request_id());
        assert!(!NotificationError::NotConfigured.includes_request_id());
    }
}
