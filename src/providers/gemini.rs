//! Google Gemini `generateContent` responder.
//!
//! One attempt = primary model, then the secondary model only when the
//! primary answers 404 (model not found), all under a single deadline.
//! When the deadline fires the in-flight request future is dropped, so a
//! late response can never reach the caller.

use super::gemini_types::{GenerateContentRequest, GenerateContentResponse};
use super::http_client::backstop_client;
use super::scrub::sanitize_api_error;
use super::traits::{RemoteAttempt, RemoteResponder};
use crate::config::RemoteConfig;
use reqwest::{Client, Response, StatusCode};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_SECONDARY_MODEL: &str = "gemini-pro";
pub const DEFAULT_DEADLINE_SECS: u64 = 12;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiResponder {
    api_key: Option<String>,
    base_url: String,
    primary_model: String,
    secondary_model: String,
    deadline: Duration,
    client: Client,
}

impl GeminiResponder {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()).map(String::from),
            base_url: DEFAULT_BASE_URL.to_string(),
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            secondary_model: DEFAULT_SECONDARY_MODEL.to_string(),
            deadline: Duration::from_secs(DEFAULT_DEADLINE_SECS),
            client: backstop_client(Duration::from_secs(DEFAULT_DEADLINE_SECS)),
        }
    }

    pub fn from_config(config: &RemoteConfig, api_key: Option<&str>) -> Self {
        Self::new(api_key)
            .with_base_url(&config.base_url)
            .with_models(&config.primary_model, &config.secondary_model)
            .with_deadline(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, primary: &str, secondary: &str) -> Self {
        self.primary_model = primary.to_string();
        self.secondary_model = secondary.to_string();
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self.client = backstop_client(deadline);
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, Self::model_name(model))
    }

    async fn post(
        &self,
        model: &str,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<Response, reqwest::Error> {
        self.client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
    }

    async fn run_chain(&self, instruction: &str) -> RemoteAttempt {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("Gemini API key not configured, skipping remote call");
            return RemoteAttempt::Unconfigured;
        };
        let request = GenerateContentRequest::single_text(instruction);

        let mut model = self.primary_model.as_str();
        let mut response = match self.post(model, api_key, &request).await {
            Ok(response) => response,
            Err(e) => return Self::transport_failure(model, e),
        };

        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(
                model,
                fallback = self.secondary_model.as_str(),
                "Model not found, retrying with secondary model"
            );
            model = self.secondary_model.as_str();
            response = match self.post(model, api_key, &request).await {
                Ok(response) => response,
                Err(e) => return Self::transport_failure(model, e),
            };
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt = sanitize_api_error(&body);
            tracing::warn!(model, status = status.as_u16(), "Gemini API error: {excerpt}");
            return RemoteAttempt::HttpError(status.as_u16());
        }

        match response.json::<GenerateContentResponse>().await {
            Ok(body) => match body.first_text() {
                Some(text) => RemoteAttempt::Success(text),
                None => {
                    tracing::warn!(model, "Empty response from Gemini");
                    RemoteAttempt::EmptyPayload
                }
            },
            Err(e) if e.is_decode() => {
                tracing::warn!(model, "Undecodable Gemini response: {e}");
                RemoteAttempt::EmptyPayload
            }
            Err(e) => Self::transport_failure(model, e),
        }
    }

    fn transport_failure(model: &str, err: reqwest::Error) -> RemoteAttempt {
        tracing::warn!(model, "Gemini request failed: {}", Self::describe(err));
        RemoteAttempt::NetworkError
    }

    /// Loggable form of a transport error: no URL, secrets scrubbed.
    fn describe(err: reqwest::Error) -> String {
        sanitize_api_error(&err.without_url().to_string())
    }
}

impl RemoteResponder for GeminiResponder {
    fn name(&self) -> &str {
        "gemini"
    }

    fn attempt<'a>(
        &'a self,
        instruction: &'a str,
    ) -> Pin<Box<dyn Future<Output = RemoteAttempt> + Send + 'a>> {
        Box::pin(async move {
            match tokio::time::timeout(self.deadline, self.run_chain(instruction)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(
                        deadline_ms = u64::try_from(self.deadline.as_millis()).unwrap_or(u64::MAX),
                        "Gemini request timed out"
                    );
                    RemoteAttempt::Timeout
                }
            }
        })
    }
}
