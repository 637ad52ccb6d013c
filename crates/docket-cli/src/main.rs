//! Docket CLI - Turn meeting notes into tracked tasks from the terminal.

use clap::Parser;
use docket_cli::commands;
use docket_cli::{Cli, Command, Formatter};
use docket_pipeline::LivePipeline;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> docket_cli::Result<()> {
    let cli = Cli::parse();

    let config = docket_cli::config::load(cli.config.as_deref())?;
    docket_cli::init_logging(&config.log_filter);

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);
    let pipeline = LivePipeline::from_config(&config)?;

    let output = match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &pipeline, &formatter).await?,
        Command::Boards => commands::execute_boards(&pipeline, &formatter).await?,
        Command::Users => commands::execute_users(&pipeline, &formatter).await?,
    };

    println!("{}", output);
    Ok(())
}
