use anyhow::Result;

use skillbridge_bootstrap::{bootstrap, BootstrapConfig, BootstrapOutcome, InquirePrompter};
use skillbridge_exec::SystemRunner;

/// Handle the `init` command.
pub(crate) fn handle_init_command(name: Option<String>, yes: bool) -> Result<()> {
    let config = BootstrapConfig {
        root: std::env::current_dir()?,
        app_name: name,
        assume_yes: yes,
    };
    match bootstrap(&SystemRunner, &InquirePrompter, &config)? {
        BootstrapOutcome::Completed { app_name, .. } => {
            tracing::debug!(%app_name, "bootstrap completed");
        }
        BootstrapOutcome::Declined => {}
    }
    Ok(())
}
