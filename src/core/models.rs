use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SummaryError;

/// Opaque video identifier. Only emptiness is checked; the backend decides
/// whether the token is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidRequest` if the identifier is blank.
    pub fn new(raw: impl Into<String>) -> Result<Self, SummaryError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SummaryError::InvalidRequest(
                "video id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "quite positive")]
    QuitePositive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "quite negative")]
    QuiteNegative,
    #[serde(rename = "negative")]
    Negative,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::QuitePositive => "quite positive",
            Tone::Neutral => "neutral",
            Tone::QuiteNegative => "quite negative",
            Tone::Negative => "negative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRating {
    pub rating: Tone,
    pub reason: String,
}

/// Success body returned by the summary service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryPayload {
    pub comments: String,
    // Absent and null both decode to None.
    #[serde(rename = "toneRating", default)]
    pub tone_rating: Option<ToneRating>,
}

/// Outcome of a summary request. This is the only thing callers of the
/// client ever see; errors are flattened into `Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SummaryResult {
    Success {
        summary_text: String,
        tone_rating: Option<ToneRating>,
    },
    Failure {
        message: String,
    },
}

impl SummaryResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryResult::Success { .. })
    }
}

impl From<SummaryPayload> for SummaryResult {
    fn from(payload: SummaryPayload) -> Self {
        SummaryResult::Success {
            summary_text: payload.comments,
            tone_rating: payload.tone_rating,
        }
    }
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryResult::Success {
                summary_text,
                tone_rating,
            } => {
                write!(f, "{summary_text}")?;
                if let Some(tone) = tone_rating {
                    write!(f, "\n\nTone: {} ({})", tone.rating, tone.reason)?;
                }
                Ok(())
            }
            SummaryResult::Failure { message } => write!(f, "Error: {message}"),
        }
    }
}
