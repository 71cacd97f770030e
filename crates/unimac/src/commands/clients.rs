use unimac_core::correlate::{ap_names, switch_names};
use unimac_core::{
    Client, Controller, ControllerConfig, ControllerSource, DeviceInventory, Site,
    hydrate_clients, sort_by_mac,
};

use crate::cli::ClientsArgs;
use crate::error::CliError;
use crate::output::{OutputTarget, Progress};

pub async fn handle(
    args: &ClientsArgs,
    config: &ControllerConfig,
    progress: Progress,
) -> Result<(), CliError> {
    let target = OutputTarget::from_arg(args.output.as_deref())?;

    let (controller, sites) = super::open_session(config, progress).await?;
    let fetched = fetch(&controller, &sites).await;
    controller.disconnect().await;
    let (mut clients, inventory) = fetched?;

    progress.line(format_args!("{} clients connected", clients.len()));
    progress.line(format_args!(
        "\tto {} switches and {} access points",
        inventory.switches.len(),
        inventory.access_points.len()
    ));

    hydrate_clients(&mut clients, &switch_names(&inventory), &ap_names(&inventory));
    if args.sort {
        sort_by_mac(&mut clients);
    }

    target.emit(&clients, progress)
}

/// Clients plus the device inventory their switch and AP names come from.
async fn fetch(
    controller: &Controller,
    sites: &[Site],
) -> Result<(Vec<Client>, DeviceInventory), CliError> {
    let clients = controller.clients(sites).await?;
    let inventory = controller.devices(sites).await?;
    Ok((clients, inventory))
}
