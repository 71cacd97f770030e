//! Command dispatch and the shared controller session.

pub mod clients;
pub mod devices;
pub mod licenses;
pub mod version;

use unimac_core::{Controller, ControllerConfig, ControllerSource, Site};

use crate::cli::{Cli, Command};
use crate::config::controller_config;
use crate::error::CliError;
use crate::output::Progress;

pub async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let progress = Progress::new(cli.global.quiet);

    match cli.command {
        Command::Version => {
            version::handle();
            Ok(())
        }
        Command::Licenses => {
            licenses::handle();
            Ok(())
        }
        Command::Devices(args) => {
            let config = controller_config(&cli.global)?;
            tracing::debug!(host = %config.url, "devices report");
            devices::handle(&args, &config, progress).await
        }
        Command::Clients(args) => {
            let config = controller_config(&cli.global)?;
            tracing::debug!(host = %config.url, "clients report");
            clients::handle(&args, &config, progress).await
        }
    }
}

/// Log in and list sites. The caller owns the session and must disconnect.
async fn open_session(
    config: &ControllerConfig,
    progress: Progress,
) -> Result<(Controller, Vec<Site>), CliError> {
    let controller = Controller::connect(config).await?;
    progress.line(format_args!("Connected to {}", controller.url()));

    match controller.sites().await {
        Ok(sites) => {
            progress.line(format_args!("{} sites found", sites.len()));
            Ok((controller, sites))
        }
        Err(e) => {
            controller.disconnect().await;
            Err(e.into())
        }
    }
}
