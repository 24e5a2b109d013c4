/// Comments Summarizer - a client for an AI service that summarizes the
/// comment section of a YouTube video and rates its overall tone.
///
/// Given a video identifier, the client asks the summary service for a
/// summary, retries transient failures with a fixed delay, validates the
/// response body, and hands back a single [`core::models::SummaryResult`].
///
/// # Architecture
///
/// The crate uses:
/// - reqwest for HTTP
/// - tokio-retry for the fixed-interval retry loop
/// - serde / `serde_json` for decoding and validating response bodies
/// - tracing for structured logs
///
/// # Example
///
/// ```no_run
/// use comments_summarizer::clients::SummaryClient;
/// use comments_summarizer::core::config::ClientConfig;
/// use comments_summarizer::core::models::SummaryResult;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     comments_summarizer::setup_logging();
///
///     let config = ClientConfig::from_env()?;
///     let client = SummaryClient::new(&config)?;
///
///     match client.fetch_summary("dQw4w9WgXcQ").await {
///         SummaryResult::Success { summary_text, tone_rating } => {
///             println!("Summary: {}", summary_text);
///             if let Some(tone) = tone_rating {
///                 println!("Tone: {} ({})", tone.rating, tone.reason);
///             }
///         }
///         SummaryResult::Failure { message } => println!("Error: {}", message),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod utils;

/// Configure structured logging with JSON format.
///
/// Logs go to stderr so command output on stdout stays clean. The level is
/// taken from `RUST_LOG` and defaults to `info`. Calling this more than once
/// is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// comments_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
