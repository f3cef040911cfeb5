//! Email Booking Lambda - Forwards consultation bookings to the specialist's mailbox.
//!
//! Handles `POST` submissions and CORS preflight from the website's booking widget.

use email_booking::BookingNotifier;
use lambda_http::{run, service_fn, Error, Request};
use shared::http::request_id;
use shared::{Config, SmtpMailer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::load().await?;
    info!(host = %config.smtp_host, port = config.smtp_port, "Using SMTP relay");

    let mailer = SmtpMailer::new(config.smtp_host, config.smtp_port);
    let notifier = Arc::new(BookingNotifier::new(config.credentials, mailer));

    run(service_fn(move |event: Request| {
        let notifier = Arc::clone(&notifier);
        async move {
            let request_id = request_id(&event);
            notifier.handle(event, &request_id).await
        }
    }))
    .await
}
