use std::sync::Arc;

use clap::{Parser, Subcommand};
use homework_bot::{
    cmd::{DryRunArgs, dry_run},
    config::AppConfig,
    engine::Poller,
    http_client::{create_base_http_client, create_plain_http_client, create_retryable_http_client},
    logging,
    notification::TelegramNotifier,
    providers::PracticumClient,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding `app.yaml`.
    #[arg(long, global = true)]
    config_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Polls the review API and notifies the chat about status changes.
    Run,
    /// Fetches and formats once, printing the message instead of sending it.
    DryRun(DryRunArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            logging::init_console_tracing()?;
            tracing::error!(error = %e, "Failed to load configuration, the bot cannot start.");
            return Err(e.into());
        }
    };
    logging::init_tracing(&config.log_file)?;
    tracing::debug!(
        endpoint = %config.endpoint,
        interval = ?config.retry_interval_secs,
        "Configuration loaded."
    );

    match cli.command {
        Commands::Run => run_poller(config).await?,
        Commands::DryRun(args) => dry_run::execute(args, &config).await?,
    }

    Ok(())
}

async fn run_poller(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!(error = %e, "Required credentials are missing, the bot cannot start.");
            return Err(e.into());
        }
    };

    let base_client = create_base_http_client(&config.http_base_config)?;
    let source = PracticumClient::new(
        config.endpoint.clone(),
        credentials.practicum_token,
        create_plain_http_client(base_client.clone()),
    );
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        &credentials.telegram_token,
        create_retryable_http_client(&config.delivery_retry_config, base_client),
    )?;

    let poller = Poller::new(
        Arc::new(source),
        Arc::new(notifier),
        credentials.telegram_chat_id,
        config.retry_interval_secs,
    );
    poller.run().await;

    Ok(())
}
