//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;

use crate::{Error, Result, SmtpCredentials};

/// SMTP account as stored in Secrets Manager.
///
/// Uses the same key names as the environment variables.
#[derive(Deserialize)]
struct SmtpSecret {
    #[serde(rename = "SMTP_EMAIL")]
    email: String,
    #[serde(rename = "SMTP_PASSWORD")]
    password: String,
}

/// Get a secret string from Secrets Manager.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    response
        .secret_string()
        .map(str::to_string)
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))
}

/// Get the SMTP account from Secrets Manager.
pub async fn get_smtp_credentials(
    client: &SecretsClient,
    secret_arn: &str,
) -> Result<SmtpCredentials> {
    let secret_string = get_secret(client, secret_arn).await?;
    parse_smtp_secret(&secret_string)
}

fn parse_smtp_secret(secret_string: &str) -> Result<SmtpCredentials> {
    let secret: SmtpSecret = serde_json::from_str(secret_string)?;

    if secret.email.is_empty() || secret.password.is_empty() {
        return Err(Error::Config("SMTP credentials secret has empty values".to_string()));
    }

    Ok(SmtpCredentials::new(secret.email, secret.password))
}
