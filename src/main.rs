use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use odyssey_project::{
    read_credentials, setup_logger, AccountRunner, ApiClient, DelayPolicy, OdysseyConfig,
    WalletStore,
};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    /// Override the credential list path from the config file.
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = setup_logger();
    // Keep guard alive for file logging
    std::mem::forget(_log_guard);
    dotenv().ok();

    let args = Args::parse();
    let config = match OdysseyConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return Ok(());
        }
    };

    let query_file = args.query.unwrap_or_else(|| config.query_file.clone());
    let credentials = match read_credentials(Path::new(&query_file)) {
        Ok(c) => c,
        Err(e) => {
            error!("Error: {}", e);
            return Ok(());
        }
    };

    if credentials.is_empty() {
        info!("No credentials found in {}", query_file);
        return Ok(());
    }
    info!("Found {} accounts to process", credentials.len());

    let client = ApiClient::new(config.api.clone())?;
    let runner = AccountRunner::new(
        client,
        WalletStore::new(&config.accounts_dir),
        DelayPolicy::fixed(Duration::from_secs(config.account_delay_secs)),
    );
    runner.run(&credentials).await;

    Ok(())
}
