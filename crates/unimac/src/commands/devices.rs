use unimac_core::{ControllerConfig, ControllerSource, correlate_devices};

use crate::cli::DevicesArgs;
use crate::error::CliError;
use crate::output::{OutputTarget, Progress};

pub async fn handle(
    args: &DevicesArgs,
    config: &ControllerConfig,
    progress: Progress,
) -> Result<(), CliError> {
    let target = OutputTarget::from_arg(args.output.as_deref())?;

    let (controller, sites) = super::open_session(config, progress).await?;
    let fetched = controller.devices(&sites).await;
    controller.disconnect().await;
    let inventory = fetched?;

    let report = correlate_devices(&inventory);
    for count in &report.counts {
        progress.line(format_args!(
            "\twith {} {} added {}",
            count.available, count.kind, count.added
        ));
    }

    target.emit(&report.devices, progress)
}
