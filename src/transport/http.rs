use keyring::Entry;
use reqwest::header::HeaderMap;
use std::env;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::failure::FailureClass;
use crate::prompt::Prompt;
use crate::{Error, Result};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Result<Self> {
        url::Url::parse(base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL {:?}: {}", base_url, e)))?;

        // Minimal production-friendly defaults (env-overridable).
        let timeout_secs = env::var("ASTROCAST_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(60);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(
                env::var("ASTROCAST_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.or_else(resolve_api_key),
        })
    }

    /// Execute one completion attempt and return the raw reading text.
    ///
    /// This is a single attempt; the retry loop lives in the caller.
    pub async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            Error::Configuration(
                "missing API key: set ASTROCAST_API_KEY or pass one to the builder".to_string(),
            )
        })?;

        let request_id = Uuid::new_v4().to_string();
        let body = serde_json::json!({
            "model": self.model,
            "messages": prompt.to_messages(),
        });

        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);
        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("x-astrocast-request-id", &request_id)
            .json(&body)
            .send()
            .await
            .map_err(Error::Http)?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let retry_after = retry_after(resp.headers());
            let message = resp.text().await.unwrap_or_default();

            let class = error_code_from_body(&message)
                .as_deref()
                .and_then(FailureClass::from_provider_code)
                .unwrap_or_else(|| FailureClass::from_http_status(status));

            info!(
                http_status = status,
                class = class.name(),
                request_id = request_id.as_str(),
                duration_ms = start.elapsed().as_millis() as u64,
                "completion request failed"
            );

            return Err(Error::Remote {
                status,
                class,
                message,
                retryable: class.retryable(),
                retry_after,
            });
        }

        let json: serde_json::Value = resp.json().await.map_err(Error::Http)?;
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::decode("completion response carries no message content"))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Keyring first, environment variable fallback.
fn resolve_api_key() -> Option<String> {
    if let Ok(entry) = Entry::new("astrocast", "api-key") {
        if let Ok(key) = entry.get_password() {
            return Some(key);
        }
    }
    env::var("ASTROCAST_API_KEY").ok()
}

/// Best-effort parsing of `Retry-After`. Only the common `<seconds>` form
/// is supported.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let raw = headers.get("retry-after")?.to_str().ok()?.trim();
    let secs: u64 = raw.parse().ok()?;
    Some(Duration::from_secs(secs))
}

/// Extract a provider error code from the common OpenAI-style error shape.
fn error_code_from_body(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = json.get("error")?;
    error
        .get("code")
        .or_else(|| error.get("type"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}
