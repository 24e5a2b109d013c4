use std::error::Error;
use comments_summarizer::errors::{ErrorKind, SummaryError};

#[test]
fn test_summary_error_implements_error_trait() {
    // Verify SummaryError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SummaryError::Format("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summary_error_display() {
    let error = SummaryError::Transport("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to reach summary service: connection refused"
    );

    let error = SummaryError::Http {
        status: 418,
        reason: "I'm a teapot".to_string(),
    };
    assert_eq!(format!("{error}"), "HTTP 418: I'm a teapot");

    let error = SummaryError::Format("empty response body".to_string());
    assert_eq!(
        format!("{error}"),
        "Invalid response body format: empty response body"
    );

    let error = SummaryError::Contract("missing field `comments`".to_string());
    assert_eq!(
        format!("{error}"),
        "Response failed schema validation: missing field `comments`"
    );
}

#[test]
fn test_summary_error_kinds() {
    assert_eq!(
        SummaryError::Transport(String::new()).kind(),
        ErrorKind::Transport
    );
    assert_eq!(
        SummaryError::Http {
            status: 404,
            reason: String::new()
        }
        .kind(),
        ErrorKind::Protocol
    );
    assert_eq!(SummaryError::Format(String::new()).kind(), ErrorKind::Format);
    assert_eq!(
        SummaryError::Contract(String::new()).kind(),
        ErrorKind::Contract
    );
    assert_eq!(
        SummaryError::InvalidRequest(String::new()).kind(),
        ErrorKind::Request
    );
}

#[test]
fn test_from_status_uses_generic_reason_for_server_errors() {
    let err = SummaryError::from_status(reqwest::StatusCode::BAD_GATEWAY);
    assert_eq!(err.status(), Some(502));
    assert!(err.is_server_error());
    assert_eq!(format!("{err}"), "HTTP 502: server error");

    let err = SummaryError::from_status(reqwest::StatusCode::NOT_FOUND);
    assert!(err.is_not_found());
    assert!(!err.is_server_error());
    assert_eq!(format!("{err}"), "HTTP 404: Not Found");
}

#[test]
fn test_summary_error_from_conversions() {
    let err: SummaryError = url::Url::parse("not a url").unwrap_err().into();
    assert!(matches!(err, SummaryError::InvalidRequest(_)));

    // reqwest::Error cannot be built directly; this only checks the
    // conversion exists.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummaryError {
        SummaryError::from(err)
    }
}
