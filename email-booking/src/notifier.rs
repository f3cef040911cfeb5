//! Request handling for the booking Lambda.

use chrono::{DateTime, Local};
use lambda_http::http::Method;
use lambda_http::{Body, Request, Response};
use shared::http::{error_response, json_response, parse_json_body, preflight_response};
use shared::{BookingRequest, MailTransport, NotificationError, SmtpCredentials, SuccessResponse};
use tracing::{error, info, warn};

use crate::compose::compose_email;

const SUBMITTED: &str = "Заявка успешно отправлена";

/// A notification that reached the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub request_id: String,
}

/// Forwards bookings to the configured mailbox.
pub struct BookingNotifier<T> {
    credentials: Option<SmtpCredentials>,
    transport: T,
    clock: fn() -> DateTime<Local>,
}

impl<T: MailTransport> BookingNotifier<T> {
    /// Create a notifier. Without credentials every booking is rejected as unconfigured.
    pub fn new(credentials: Option<SmtpCredentials>, transport: T) -> Self {
        Self {
            credentials,
            transport,
            clock: Local::now,
        }
    }

    /// Replace the clock used to stamp submissions.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn handle(
        &self,
        event: Request,
        request_id: &str,
    ) -> Result<Response<Body>, lambda_http::Error> {
        info!(method = %event.method(), request_id, "Booking request");

        if *event.method() == Method::OPTIONS {
            return preflight_response();
        }

        match self.notify(&event, request_id).await {
            Ok(sent) => {
                info!(request_id = %sent.request_id, "Booking notification sent");
                json_response(
                    200,
                    &SuccessResponse {
                        success: true,
                        message: SUBMITTED.to_string(),
                        request_id: sent.request_id,
                    },
                )
            }
            Err(e) => {
                match &e {
                    NotificationError::Delivery(cause) => {
                        error!(request_id, error = %cause, "Failed to send booking notification")
                    }
                    NotificationError::NotConfigured => {
                        error!(request_id, "SMTP credentials are not configured")
                    }
                    _ => warn!(request_id, error = %e, "Rejected booking request"),
                }
                error_response(&e, request_id)
            }
        }
    }

    /// Validate the booking in `event` and deliver it. Exactly one delivery attempt is made.
    pub async fn notify(
        &self,
        event: &Request,
        request_id: &str,
    ) -> Result<Sent, NotificationError> {
        if *event.method() != Method::POST {
            return Err(NotificationError::MethodNotAllowed);
        }

        let request: BookingRequest = parse_json_body(event.body())?;
        let booking = request.validate()?;

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(NotificationError::NotConfigured)?;

        let email = compose_email(&booking, &credentials.email, request_id, (self.clock)());
        self.transport.send(credentials, &email).await?;

        Ok(Sent {
            request_id: request_id.to_string(),
        })
    }
}
