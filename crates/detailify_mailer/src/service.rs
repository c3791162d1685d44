// --- File: crates/detailify_mailer/src/service.rs ---
use detailify_common::services::{BoxFuture, NotificationResult, NotificationService};
use detailify_config::AppConfig;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Mailer-specific error types.
#[derive(Error, Debug)]
pub enum MailerError {
    /// Error occurred during a mail API request
    #[error("Mail API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the mail API
    #[error("Mail API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete mailer configuration
    #[error("Mailer configuration missing or incomplete")]
    ConfigError,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Notification service backed by an HTTP mail API.
///
/// Delivery is a single JSON POST per call; the API key comes from the
/// `MAILER_API_KEY` environment variable, never from config files.
pub struct HttpMailerService {
    config: Arc<AppConfig>,
    client: reqwest::Client,
}

impl HttpMailerService {
    /// Create a new mailer service with its own connection pool.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl NotificationService for HttpMailerService {
    type Error = MailerError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        // Clone the values to avoid lifetime issues
        let to = to.to_string();
        let subject = subject.to_string();
        let body = body.to_string();

        Box::pin(async move {
            let mailer_config = self.config.mailer.as_ref().ok_or(MailerError::ConfigError)?;
            let api_key = std::env::var("MAILER_API_KEY").map_err(|_| MailerError::ConfigError)?;

            let mut payload = serde_json::json!({
                "from": mailer_config.from_address,
                "to": [to],
                "subject": subject,
            });
            let body_field = if is_html { "html" } else { "text" };
            payload[body_field] = serde_json::Value::String(body);

            let url = format!(
                "{}/v1/send",
                mailer_config.api_base_url.trim_end_matches('/')
            );
            info!("Sending mail to {}: {}", to, subject);
            let response = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(&payload)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(MailerError::ApiError {
                    status_code: status.as_u16(),
                    message,
                });
            }

            let parsed: SendResponse = response.json().await.unwrap_or(SendResponse { id: None });
            Ok(NotificationResult {
                id: parsed.id.unwrap_or_else(|| "unknown".to_string()),
                status: "sent".to_string(),
            })
        })
    }
}
