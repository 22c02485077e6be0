mod commands;

use anyhow::Result;
use civic_report_core::constants::DEFAULT_PORT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "civic-report")]
#[command(about = "Civic issue reporting server", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "DATABASE_PATH", default_value = "issues.db")]
    db: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Directory for uploaded attachments
        #[arg(long, env = "UPLOADS_DIR", default_value = "uploads")]
        uploads_dir: PathBuf,
    },
    /// Create the database tables and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, uploads_dir } => {
            commands::serve::run(&cli.db, &host, port, uploads_dir).await?;
        },
        Commands::Migrate => commands::migrate::run(&cli.db)?,
    }

    Ok(())
}
