//! Command implementations for the FPL Nexus CLI

pub mod account;
pub mod admin;
pub mod common;
pub mod content;
pub mod leagues;
pub mod system;


use crate::cli::Commands;
use crate::Result;
use common::CommandContext;

/// Run one subcommand against the context's service.
pub async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Leagues { cmd } => leagues::handle_leagues(ctx, cmd).await,
        Commands::Account { cmd } => account::handle_account(ctx, cmd).await,
        Commands::Admin { cmd } => admin::handle_admin(ctx, cmd).await,
        Commands::Content { cmd } => content::handle_content(ctx, cmd).await,
        Commands::System { cmd } => system::handle_system(ctx, cmd).await,
    }
}
