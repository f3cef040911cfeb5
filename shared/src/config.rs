//! Configuration management for Lambda functions.

use std::env;
use std::fmt;

use tracing::{info, warn};

use crate::{Error, Result};

/// Relay used when `SMTP_HOST` is not set.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// STARTTLS submission port used when `SMTP_PORT` is not set.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Account used to authenticate with the relay.
///
/// The same address is the sender and the recipient of every notification.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub email: String,
    pub password: String,
}

impl SmtpCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SMTP account, absent when either half is missing
    pub credentials: Option<SmtpCredentials>,
    /// Relay host
    pub smtp_host: String,
    /// Relay port
    pub smtp_port: u16,
    /// ARN of a secret holding the SMTP account (if applicable)
    pub smtp_secret_arn: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let credentials = match (var("SMTP_EMAIL"), var("SMTP_PASSWORD")) {
            (Some(email), Some(password)) => Some(SmtpCredentials { email, password }),
            _ => None,
        };

        let smtp_port = match var("SMTP_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| Error::Config(format!("SMTP_PORT is not a valid port: {}", port)))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            credentials,
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port,
            smtp_secret_arn: var("SMTP_SECRET_ARN"),
        })
    }

    /// Load configuration, falling back to Secrets Manager for the SMTP account.
    ///
    /// The secret is only consulted when the environment does not carry complete
    /// credentials. A failed lookup leaves the credentials unset.
    pub async fn load() -> Result<Self> {
        let mut config = Self::from_env()?;

        if config.credentials.is_none() {
            if let Some(secret_arn) = config.smtp_secret_arn.clone() {
                let aws_config =
                    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
                let client = aws_sdk_secretsmanager::Client::new(&aws_config);

                match crate::secrets::get_smtp_credentials(&client, &secret_arn).await {
                    Ok(credentials) => {
                        info!("Loaded SMTP credentials from Secrets Manager");
                        config.credentials = Some(credentials);
                    }
                    Err(e) => warn!(error = %e, "Failed to load SMTP credentials secret"),
                }
            }
        }

        if config.credentials.is_none() {
            warn!("SMTP credentials are not configured; bookings will be rejected");
        }

        Ok(config)
    }
}
