//! Command-line entry point for skillbridge.

mod cli;
mod commands;
mod paths;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Sync => commands::handle_sync_command(),
        cli::Commands::Init { name, yes } => commands::handle_init_command(name, yes),
        cli::Commands::Doctor => commands::handle_doctor_command(),
    }
}
