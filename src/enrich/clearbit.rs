//! Clearbit combined-enrichment client
//!
//! One blocking GET per lookup, authenticated with the API key as a bearer
//! token. No retries and no caching.

use super::Enricher;
use crate::domain::Enrichment;
use crate::error::EnrichError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "https://person.clearbit.com/v2/combined/find";

const ERROR_BODY_PREVIEW_CHARS: usize = 200;

pub struct ClearbitClient {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl ClearbitClient {
    /// Create a client; `endpoint` falls back to [`DEFAULT_ENDPOINT`].
    pub fn new(api_key: impl Into<String>, endpoint: Option<&str>) -> Result<Self, EnrichError> {
        let raw = endpoint.unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(raw).map_err(|e| EnrichError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, api_key: api_key.into(), endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Enricher for ClearbitClient {
    fn lookup(&self, email: &str) -> Result<Enrichment, EnrichError> {
        tracing::debug!("Requesting combined enrichment for {} from {}", email, self.endpoint);

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("email", email)])
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        let body = response.text()?;
        interpret_response(status, &body)
    }
}

/// Map a service response onto an enrichment result.
///
/// 404 means Clearbit has no record for the email and 202 means it queued a
/// lookup; both are reported as "no person", not as failures.
fn interpret_response(status: StatusCode, body: &str) -> Result<Enrichment, EnrichError> {
    match status {
        StatusCode::OK => Ok(serde_json::from_str(body)?),
        StatusCode::NOT_FOUND => Ok(Enrichment::default()),
        StatusCode::ACCEPTED => {
            tracing::info!("Clearbit queued the lookup; no result is available yet");
            Ok(Enrichment::default())
        }
        _ => Err(EnrichError::Api { status, message: error_message(body) }),
    }
}

/// Prefer the service's `error.message`, otherwise a preview of the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect())
}
