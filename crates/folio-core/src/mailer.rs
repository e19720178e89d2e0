use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::EmailJsConfig;
use crate::contact::ContactPayload;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

// Timeout configuration. The browser fetch backend has no client timeouts.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
#[cfg(not(target_arch = "wasm32"))]
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers a contact message somewhere a human will read it.
///
/// Success or failure is all callers learn; failures are not categorized.
#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, payload: &ContactPayload) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// [`Mailer`] backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Result<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT);
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Mailer for EmailJsMailer {
    async fn send(&self, payload: &ContactPayload) -> Result<()> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
        };

        log::debug!("Sending contact message via {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .context("Failed to reach EmailJS")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response.text().await.unwrap_or_default();
        let details = describe_failure(status, &error_text);
        log::warn!("{details}");
        bail!("EmailJS rejected the message (status {})", status.as_u16());
    }
}

/// Log line for a rejected request. Visitors only ever see one generic
/// message; this is for whoever reads the console.
fn describe_failure(status: StatusCode, error_text: &str) -> String {
    let hint = match status {
        StatusCode::BAD_REQUEST => "check the service id, template id and public key",
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            "the public key was refused or this origin is not allowed"
        }
        StatusCode::PAYMENT_REQUIRED | StatusCode::TOO_MANY_REQUESTS => {
            "the account quota or rate limit was hit"
        }
        status if status.is_server_error() => "EmailJS is having trouble",
        _ => "unexpected response",
    };

    format!(
        "EmailJS send failed ({hint}). Status: {}, Response: {}",
        status,
        error_text.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_failure_bad_request() {
        let line = describe_failure(StatusCode::BAD_REQUEST, "The user_id parameter is required");
        assert!(line.contains("template id"));
        assert!(line.contains("400"));
        assert!(line.contains("user_id parameter"));
    }

    #[test]
    fn test_describe_failure_server_error() {
        let line = describe_failure(StatusCode::BAD_GATEWAY, "  upstream  ");
        assert!(line.contains("having trouble"));
        assert!(line.ends_with("Response: upstream"));
    }

    #[test]
    fn test_describe_failure_quota() {
        let line = describe_failure(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(line.contains("rate limit"));
    }

    #[test]
    fn test_request_shape() {
        let payload = ContactPayload {
            name: "Alice".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let request = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "pk",
            template_params: &payload,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {"name": "Alice", "email": "a@b.com", "message": "hi"}
            })
        );
    }
}
