use anyhow::{Context, Result};
use log::debug;

use crate::{
    engine::scaffold::scaffold,
    ui::{cli::Cli, config::build_config, output},
};

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    let config = build_config(&args)?;
    debug!("Resolved configuration: {config:?}");

    let report = scaffold(&config).with_context(|| {
        format!(
            "Failed to scaffold {} from {}",
            config.day_name(),
            config.template_root().display()
        )
    })?;

    output::OutputHandler::new(&report, &args).handle()
}
