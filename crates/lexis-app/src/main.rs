use clap::Parser;
use tokio::signal;

pub mod cli;
pub mod controller;
pub mod logging;
pub mod profile;
pub mod server;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::resolve_config(&cli)?;
    logging::init_tracing(&config.logging);

    if let Some(path) = &cli.config {
        tracing::info!("Using config file {}", path.display());
    }

    // Indices are fully built before anything is served
    let state = AppState::load(&config)?;

    match cli.command {
        Some(Command::Lookup { words }) => {
            let response = state.service.lookup(&words.join(" "))?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Some(Command::Serve { bind }) => {
            let bind_addr = bind.unwrap_or(config.server.bind_addr);
            run(state, &bind_addr).await?;
        }
        None => run(state, &config.server.bind_addr).await?,
    }

    Ok(())
}

async fn run(state: AppState, bind_addr: &str) -> anyhow::Result<()> {
    let controller = AppController::new(state);

    // Shutdown future (Ctrl+C)
    let cancel = controller.cancel_token();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown requested");
                cancel.cancel();
            }
            Err(e) => tracing::error!("failed to listen for ctrl+c: {e}"),
        }
    });

    controller.serve(bind_addr).await
}
