mod ai;
mod app;
mod classifier;
mod cli;
mod config;
mod domain;
mod extract;
mod infrastructure;
mod model;
mod nlp;
mod server;
mod workflow;

use anyhow::Result;
use clap::Parser;
use infrastructure::{directories, logging, shutdown};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories, &config.models)?;
    logging::init_tracing(&config.logging, &paths.logs_dir)?;

    let shutdown = shutdown::Shutdown::new();
    let app = app::SafetyApp::initialize(config, &paths, shutdown.clone())?;

    match cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
    }) {
        Commands::Serve { port, host } => {
            shutdown::install_signal_handlers(shutdown);
            app.run(host, port).await
        }
        Commands::Check { file } => {
            let evaluation = app.check_message(file.as_deref()).await?;
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
            Ok(())
        }
        Commands::CheckUrl { url } => {
            let outcome = app.check_url(&url).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
    }
}
