use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to reach summary service: {0}")]
    Transport(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Invalid response body format: {0}")]
    Format(String),

    #[error("Response failed schema validation: {0}")]
    Contract(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Coarse classification of a [`SummaryError`], used for logging and
/// retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Protocol,
    Format,
    Contract,
    Request,
}

impl SummaryError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::Transport(_) => ErrorKind::Transport,
            SummaryError::Http { .. } => ErrorKind::Protocol,
            SummaryError::Format(_) => ErrorKind::Format,
            SummaryError::Contract(_) => ErrorKind::Contract,
            SummaryError::InvalidRequest(_) => ErrorKind::Request,
        }
    }

    /// HTTP status carried by a protocol error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            SummaryError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Builds a protocol error from a response status.
    ///
    /// 5xx responses carry a generic reason; their own status text is not
    /// useful to a reader.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let reason = if status.is_server_error() {
            "server error".to_string()
        } else {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        };

        SummaryError::Http {
            status: status.as_u16(),
            reason,
        }
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::Transport(error.to_string())
    }
}

impl From<url::ParseError> for SummaryError {
    fn from(error: url::ParseError) -> Self {
        SummaryError::InvalidRequest(format!("bad service URL: {error}"))
    }
}
