//! REST client module.
//!
//! One file per backend resource. Every operation issues exactly one HTTP
//! request and returns normalized records; nothing is retried or cached here.

mod books;
mod curriculums;
mod faculties;
mod majors;
mod study_times;
mod subjects;

pub use books::*;
pub use curriculums::*;
pub use faculties::*;
pub use majors::*;
pub use study_times::*;
pub use subjects::*;

use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::errors::{error_message_from_body, AppError};

/// Shared HTTP client for the course registry backend.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Client with default HTTP settings.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Client built from configuration (base URL and optional timeout).
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_http(&config.api_url, builder.build()?)
    }

    fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, AppError> {
        let base = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| AppError::Validation(format!("Invalid API URL {}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "Invalid API URL {}: not a base URL",
                base_url
            )));
        }
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Endpoint URL with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get_json(&self, segments: &[&str]) -> Result<Value, AppError> {
        let url = self.endpoint(segments);
        tracing::debug!("GET {}", url);
        self.execute(self.http.get(url)).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, AppError> {
        let url = self.endpoint(segments);
        tracing::debug!("{} {}", method, url);
        self.execute(self.http.request(method, url).json(body)).await
    }

    pub(crate) async fn send_multipart(
        &self,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> Result<Value, AppError> {
        let url = self.endpoint(segments);
        tracing::debug!("POST {} (multipart)", url);
        self.execute(self.http.post(url).multipart(form)).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), AppError> {
        let url = self.endpoint(segments);
        tracing::debug!("DELETE {}", url);
        self.execute(self.http.delete(url)).await?;
        Ok(())
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, AppError> {
        let resp = request.send().await?;
        Self::parse(resp).await
    }

    /// Parse an API response, mapping HTTP errors to `AppError`.
    ///
    /// An empty success body decodes to `Value::Null`.
    async fn parse(resp: reqwest::Response) -> Result<Value, AppError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = error_message_from_body(&body);
            tracing::warn!("Backend answered {}: {}", status, message);
            return Err(AppError::Http {
                status: status.as_u16(),
                message,
            });
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
