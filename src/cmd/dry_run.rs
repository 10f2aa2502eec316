use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::{
    config::{AppConfig, ConfigurationError},
    engine::poller::evaluate,
    http_client::{HttpClientError, create_base_http_client, create_plain_http_client},
    models::Report,
    providers::{HomeworkSource, PracticumClient},
};

/// Errors that stop a dry run before any request is made.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration is unusable.
    #[error("Config error: {0}")]
    Config(#[from] ConfigurationError),
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpClientError),
}

/// Arguments of the `dry-run` command.
#[derive(Parser, Debug)]
pub struct DryRunArgs {
    /// Unix timestamp to request updates from. Defaults to now.
    #[arg(short, long)]
    pub from_date: Option<i64>,

    /// Overrides the configured homework statuses endpoint.
    #[arg(short, long)]
    pub endpoint: Option<Url>,
}

/// Runs one fetch, validate and format pass and prints the resulting message.
///
/// Nothing is sent to the chat, so only the API token has to be configured.
pub async fn execute(args: DryRunArgs, config: &AppConfig) -> Result<(), Error> {
    let token = config.practicum_token()?;
    let base_client = create_base_http_client(&config.http_base_config)?;
    let endpoint = args.endpoint.unwrap_or_else(|| config.endpoint.clone());
    let source = PracticumClient::new(endpoint, token, create_plain_http_client(base_client));

    let from_date = args.from_date.unwrap_or_else(|| chrono::Utc::now().timestamp());
    match report_since(&source, from_date).await {
        Some(report) => println!("{}", report.text(from_date)),
        None => println!("The API response carried no homework data."),
    }
    Ok(())
}

/// The report a poll cycle starting at `from_date` would produce.
///
/// Returns `None` for the responses the poll loop skips silently.
pub async fn report_since<S: HomeworkSource + ?Sized>(
    source: &S,
    from_date: i64,
) -> Option<Report> {
    let mut since = from_date;
    match evaluate(source, &mut since).await {
        Ok(report) => Some(report),
        Err(e) if e.is_silent() => None,
        Err(e) => {
            tracing::error!(error = %e, "Dry run failed.");
            Some(Report::failure(&e))
        }
    }
}
