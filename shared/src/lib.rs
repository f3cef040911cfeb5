//! Shared library for the booking Lambda functions.
//!
//! This crate provides the configuration, error types, request models, HTTP helpers and
//! mail transport used by the booking handlers.

pub mod config;
pub mod error;
pub mod http;
pub mod mailer;
pub mod models;
pub mod secrets;

pub use config::{Config, SmtpCredentials};
pub use error::{Error, NotificationError, Result};
pub use mailer::{Email, MailError, MailTransport, SmtpMailer};
pub use models::{Booking, BookingRequest, SuccessResponse};
pub use secrets::{get_secret, get_smtp_credentials};
