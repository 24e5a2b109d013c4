//! Comment summary API client module
//!
//! Fetches the AI-generated comment summary and tone rating for a video,
//! retrying transient failures and validating the response body.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use url::Url;
use uuid::Uuid;

use crate::core::config::ClientConfig;
use crate::core::models::{SummaryPayload, SummaryResult, VideoId};
use crate::core::retry::{RetryPolicy, with_retry};
use crate::errors::SummaryError;

const SUMMARY_PATH: &str = "get";
const VIDEO_ID_PARAM: &str = "videoId";

const NOT_FOUND_MESSAGE: &str = "Summary endpoint not found (HTTP 404). \
     The summary service may still be starting up.";
const SERVER_ERROR_MESSAGE: &str =
    "The summary service ran into a server error. Please try again later.";

/// Client for the comment summary service. Holds no per-request state, so a
/// single instance can serve concurrent calls for different videos.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    policy: RetryPolicy,
}

impl SummaryClient {
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidRequest` if the configured base URL
    /// cannot be parsed.
    pub fn new(config: &ClientConfig) -> Result<Self, SummaryError> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(&config.api_url)?,
            api_key: config.api_key.clone(),
            policy: config.retry_policy(),
        })
    }

    /// Client with default settings pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidRequest` if `base_url` is not a URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, SummaryError> {
        Self::new(&ClientConfig {
            api_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// `{base}/get?videoId={id}`. Any path on the base URL is kept.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidRequest` if the joined URL is invalid.
    pub fn request_url(&self, video_id: &VideoId) -> Result<Url, SummaryError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{SUMMARY_PATH}"))?;
        url.query_pairs_mut()
            .append_pair(VIDEO_ID_PARAM, video_id.as_str());
        Ok(url)
    }

    /// Fetches a summary using the client's own retry policy.
    pub async fn fetch_summary(&self, video_id: &str) -> SummaryResult {
        self.fetch_summary_with_policy(video_id, &self.policy).await
    }

    /// Fetches a summary, retrying per `policy`. Never returns an error:
    /// every failure is folded into `SummaryResult::Failure`.
    pub async fn fetch_summary_with_policy(
        &self,
        video_id: &str,
        policy: &RetryPolicy,
    ) -> SummaryResult {
        let request_id = Uuid::new_v4();
        let span = info_span!("fetch_summary", %request_id, video_id);

        async {
            match self.fetch_payload(video_id, policy).await {
                Ok(payload) => {
                    info!(
                        has_tone_rating = payload.tone_rating.is_some(),
                        "Summary received"
                    );
                    SummaryResult::from(payload)
                }
                Err(err) => {
                    error!(kind = ?err.kind(), "Summary request failed: {}", err);
                    SummaryResult::Failure {
                        message: humanize_error(&err),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn fetch_payload(
        &self,
        video_id: &str,
        policy: &RetryPolicy,
    ) -> Result<SummaryPayload, SummaryError> {
        let video_id = VideoId::new(video_id)?;
        let url = self.request_url(&video_id)?;

        with_retry(policy, || self.attempt(&url)).await
    }

    async fn attempt(&self, url: &Url) -> Result<SummaryPayload, SummaryError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Summary service returned an error status");
            return Err(SummaryError::from_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SummaryError::Transport(format!("failed to read response body: {e}")))?;

        #[cfg(feature = "debug-logs")]
        tracing::debug!("Summary response body:\n{}", body);

        decode_summary_body(&body)
    }
}

/// Parses and validates a success response body.
///
/// # Errors
///
/// `SummaryError::Format` when the body is empty, looks like HTML, or is not
/// JSON. `SummaryError::Contract` when it is JSON of the wrong shape.
pub fn decode_summary_body(body: &str) -> Result<SummaryPayload, SummaryError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(SummaryError::Format("empty response body".to_string()));
    }
    if trimmed.starts_with('<') {
        return Err(SummaryError::Format(
            "received HTML instead of JSON".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| SummaryError::Format(format!("body is not valid JSON: {e}")))?;

    serde_json::from_value(value).map_err(|e| SummaryError::Contract(e.to_string()))
}

/// Turns the last error of a request into the message shown to users.
#[must_use]
pub fn humanize_error(error: &SummaryError) -> String {
    if error.is_not_found() {
        NOT_FOUND_MESSAGE.to_string()
    } else if error.is_server_error() {
        SERVER_ERROR_MESSAGE.to_string()
    } else {
        error.to_string()
    }
}
