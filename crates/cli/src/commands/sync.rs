use anyhow::Result;

use crate::paths::{home_dir, repo_root};

/// Handle the `sync` command.
pub(crate) fn handle_sync_command() -> Result<()> {
    let repo = repo_root()?;
    let home = home_dir()?;
    println!("Linking skills from {}", repo.join("skills").display());
    let report = skillbridge_links::sync_with_progress(&repo, &home, |link| {
        println!("  {}", link.describe());
    })?;
    print!("{}", report.format_summary());
    Ok(())
}
