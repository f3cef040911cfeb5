//! Shared data models.

use serde::{Deserialize, Serialize};

use crate::NotificationError;

/// Placeholder for contact details the client left out.
pub const NOT_SPECIFIED: &str = "Не указано";

/// Booking payload posted by the booking widget.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingRequest {
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    pub message: Option<String>,
}

/// A booking that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub service: String,
    pub date: String,
    pub time: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Empty when the client wrote nothing
    pub message: String,
}

impl BookingRequest {
    /// Check required fields and apply defaults to the optional ones.
    pub fn validate(self) -> Result<Booking, NotificationError> {
        let required = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(service), Some(date), Some(time)) =
            (required(self.service), required(self.date), required(self.time))
        else {
            return Err(NotificationError::MissingFields);
        };

        let or_placeholder =
            |value: Option<String>| value.unwrap_or_else(|| NOT_SPECIFIED.to_string());

        Ok(Booking {
            service,
            date,
            time,
            client_name: or_placeholder(self.client_name),
            client_phone: or_placeholder(self.client_phone),
            client_email: or_placeholder(self.client_email),
            message: self.message.unwrap_or_default(),
        })
    }
}

/// Body returned once the notification has been sent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
    pub request_id: String,
}

/// Body returned for every rejected or failed request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
