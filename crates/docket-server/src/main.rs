//! Docket server binary
//!
//! Loads configuration and starts the HTTP server.

use clap::Parser;
use docket_pipeline::DocketConfig;
use docket_server::{start_server, ServerError};
use std::path::PathBuf;
use std::process;

/// Docket - meeting notes to tracked tasks
#[derive(Parser, Debug)]
#[command(name = "docket-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file; environment variables override it
    #[arg(short, long, env = "DOCKET_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args = Args::parse();

    let mut config = DocketConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.port = port;
    }

    start_server(config).await
}
