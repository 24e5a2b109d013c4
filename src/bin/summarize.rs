use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use comments_summarizer::clients::SummaryClient;
use comments_summarizer::core::config::ClientConfig;
use comments_summarizer::utils::video_id::resolve_video_id;
use tracing::info;

/// Summarize the comments of a YouTube video.
#[derive(Debug, Parser)]
#[command(name = "summarize", version)]
struct Args {
    /// Video URL (youtube.com/watch or youtu.be) or bare video id.
    target: String,

    /// Base address of the summary service.
    #[arg(long)]
    api_url: Option<String>,

    /// Maximum number of attempts.
    #[arg(long)]
    attempts: Option<u32>,

    /// Delay between attempts, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Also retry 5xx responses.
    #[arg(long)]
    retry_server_errors: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

fn build_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().map_err(|e| anyhow!(e))?;
    if let Some(url) = &args.api_url {
        config.api_url = url.clone();
    }
    if let Some(attempts) = args.attempts {
        config.max_attempts = attempts;
    }
    if let Some(delay) = args.delay_ms {
        config.retry_delay = Duration::from_millis(delay);
    }
    if args.retry_server_errors {
        config.retry_server_errors = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    comments_summarizer::setup_logging();
    let args = Args::parse();

    let video_id = resolve_video_id(&args.target)
        .ok_or_else(|| anyhow!("could not find a video id in {:?}", args.target))?;
    let config = build_config(&args)?;
    let client = SummaryClient::new(&config).context("invalid summary service URL")?;

    info!(video_id = %video_id, api_url = %config.api_url, "Requesting summary");
    let result = client.fetch_summary(&video_id).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{result}");
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
