use anyhow::Result;
use clap::{Parser, Subcommand};

/// valdeci - Aluminum gates, doors and glass
#[derive(Parser)]
#[command(name = "valdeci")]
#[command(about = "Marketing site and contact intake for Valdeci Alumínio", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = valdeci::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    valdeci::observability::init_observability(
        "valdeci",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => valdeci::cli::serve(config, host, port).await,
    }
}
