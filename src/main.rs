//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fpl_nexus::{
    cli::Nexus,
    commands::{common::CommandContext, dispatch},
    core::{logging::init_tracing, ServiceConfig},
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let app = Nexus::parse();

    let config = ServiceConfig::load().context("failed to load configuration")?;
    let ctx = CommandContext::new(&app.global, config).context("failed to load saved state")?;

    if let Err(err) = dispatch(&ctx, app.command).await {
        if err.is_recoverable() {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        return Err(err.into());
    }

    Ok(())
}
