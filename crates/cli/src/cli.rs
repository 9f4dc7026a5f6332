use clap::{Parser, Subcommand};

/// Command-line interface for the `skillbridge` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillbridge",
    about = "Workstation setup for the Flutter skills monorepo"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `skillbridge` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Projects the skills directory into every tool-specific location via symlinks.
    Sync,
    /// Scaffolds the mobile/backend monorepo and generates the Flutter app.
    Init {
        /// Project name (prompts with a default when omitted).
        name: Option<String>,
        /// Skip confirmation prompts (non-interactive mode).
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Validates the Android toolchain: SDK root, platform tools, AVDs, devices.
    Doctor,
}
