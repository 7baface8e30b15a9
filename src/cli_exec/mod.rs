use anyhow::Result;

use crate::Commands;
use crate::cli_runtime::Session;

mod assets;
mod dialogs;
mod layers;
mod tokens;

pub(super) fn handle_command(session: &Session, command: Commands) -> Result<()> {
    tracing::debug!(
        base_url = %session.config.base_url,
        auth_cfg = %session.config.auth_cfg,
        "running command"
    );
    match command {
        Commands::Assets(args) => assets::handle_assets(session, args),
        Commands::Browse(args) => assets::handle_browse(session, args),
        Commands::Tokens(args) => tokens::handle_tokens(session, args),
        Commands::CreateToken(args) => tokens::handle_create_token(session, args),
        Commands::Add(args) => layers::handle_add(session, args),
        Commands::Drop(args) => layers::handle_drop(session, args),
        Commands::AddById(args) => layers::handle_add_by_id(session, args),
        Commands::Layers(args) => layers::handle_layers(session, args),
    }
}
