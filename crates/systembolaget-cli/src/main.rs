mod config;
mod fetch;

use clap::{Parser, Subcommand};
use systembolaget::CatalogClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "systembolaget-cli")]
#[command(about = "Fetch the Systembolaget article catalog and store directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the full article catalog
    Articles {
        /// Print at most this many articles
        #[arg(long)]
        limit: Option<usize>,
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch every store and agent
    Stores {
        /// Print at most this many stores
        #[arg(long)]
        limit: Option<usize>,
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Arguments first: `--help` and usage errors must not depend on the
    // environment being valid.
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("usage: systembolaget-cli <articles|stores> [--limit N] [--json]");
        return Ok(());
    };

    let config = config::load_config()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = CatalogClient::from_config(&config.client)?;
    tracing::debug!(base_url = %client.base_url, user_agent = %client.user_agent, "client ready");

    match command {
        Commands::Articles { limit, json } => fetch::run_articles(&client, limit, json).await?,
        Commands::Stores { limit, json } => fetch::run_stores(&client, limit, json).await?,
    }

    Ok(())
}
