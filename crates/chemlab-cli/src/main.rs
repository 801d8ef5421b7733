mod cli;
mod commands;
mod config;
mod display;
mod error;
mod explainer;
mod logging;
mod ui;

use crate::cli::{Cli, Commands};
use crate::commands::CommandContext;
use crate::error::{CliError, Result};
use crate::ui::{UiHandle, UiManager};
use chemlab::core::catalog::Catalog;
use clap::Parser;
use tokio::task;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let (ui_manager, ui_sender, shutdown_sender) = UiManager::new();
    let ui_handle = task::spawn(ui_manager.run());

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    let command_result = async {
        info!("Hydrocarbon Lab v{} starting up.", env!("CARGO_PKG_VERSION"));
        debug!("Full CLI arguments parsed: {:?}", &cli);

        let env_api_key = if cli.settings.offline {
            None
        } else {
            config::resolve_api_key()
        };
        let app_config = config::build_config(&cli.settings, env_api_key)?;
        let catalog = Catalog::shared()?;
        let explainer = explainer::from_settings(&app_config.explanation)?;
        info!(
            "Loaded {} molecules; explanations via '{}'.",
            catalog.len(),
            explainer.name()
        );

        let ctx = CommandContext {
            catalog,
            config: app_config,
            explainer,
            ui: UiHandle::new(ui_sender),
        };

        match cli.command {
            Commands::List(args) => {
                info!("Dispatching to 'list' command.");
                commands::catalog::list(args, &ctx)
            }
            Commands::Show(args) => {
                info!("Dispatching to 'show' command.");
                commands::catalog::show(args, &ctx).await
            }
            Commands::React(args) => {
                info!("Dispatching to 'react' command.");
                commands::react::run(args, &ctx).await
            }
            Commands::Process(args) => {
                info!("Dispatching to 'process' command.");
                commands::process::run(args, &ctx).await
            }
            Commands::Lab(args) => {
                info!("Dispatching to 'lab' command.");
                commands::lab::run(args, &ctx).await
            }
        }
    }
    .await;

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    if shutdown_sender.send(true).is_err() {
        warn!("UI manager may have already exited before shutdown signal.");
    }

    ui_handle
        .await
        .map_err(|e| CliError::Other(anyhow::anyhow!("UI manager task failed: {}", e)))?;

    command_result
}
