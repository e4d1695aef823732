use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SubmitError;
use crate::payload::ScoringRequest;

/// Environment variable overriding the scoring service base URL.
pub const BASE_URL_ENV: &str = "SCORING_API_BASE_URL";
/// Environment variable overriding the request timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "SCORING_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Risk assessment returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAssessment {
    pub credit_score: f64,
    pub risk_category: String,
    pub risk_level: String,
    pub recommendation: String,
}

/// Response envelope. The service also echoes the input and a raw
/// performance score alongside `assessment`; only the assessment matters
/// here, so unknown siblings are ignored.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    assessment: Option<ScoreAssessment>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The external prediction service, seen as an opaque collaborator.
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Submit one scoring request and return the classified outcome.
    /// Exactly one completion per call; no retries.
    async fn predict(&self, request: &ScoringRequest) -> Result<ScoreAssessment, SubmitError>;
}

/// reqwest-backed [`ScoringService`] posting JSON to `{base}/predict`.
pub struct HttpScoringService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpScoringService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Configure from the environment: `SCORING_API_BASE_URL` for the base
    /// URL and `SCORING_TIMEOUT_MS` for the bound, with defaults of
    /// `http://127.0.0.1:8000` and 30 000 ms.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self::with_timeout(base_url, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn predict(&self, request: &ScoringRequest) -> Result<ScoreAssessment, SubmitError> {
        let url = format!("{}/predict", self.base_url.trim_end_matches('/'));
        debug!(%url, "dispatching scoring request");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(SubmitError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            return Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response
            .json::<ResponseEnvelope>()
            .await
            .map_err(|_| SubmitError::MalformedResponse)?;
        envelope.assessment.ok_or(SubmitError::MalformedResponse)
    }
}
