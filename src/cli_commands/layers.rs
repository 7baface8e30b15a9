use clap::Args;

/// How the layer gets its access token. Without any of these the dialog
/// keeps its default (first listed token).
#[derive(Args, Clone, Debug, Default)]
#[group(multiple = false)]
pub(crate) struct TokenArgs {
    /// Use the listed token with this name
    #[arg(long, value_name = "NAME")]
    pub(crate) existing: Option<String>,
    /// Create a token with this name, restricted to the asset
    #[arg(long = "new-token", value_name = "NAME")]
    pub(crate) new_token: Option<String>,
    /// Use this access token as-is
    #[arg(long, value_name = "TOKEN")]
    pub(crate) token: Option<String>,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    pub(crate) asset_id: String,
    #[command(flatten)]
    pub(crate) token: TokenArgs,
}

#[derive(Args)]
pub(crate) struct DropArgs {
    pub(crate) asset_id: String,
    /// Asset type in the drag payload (3DTILES or TERRAIN)
    #[arg(long = "type", default_value = "3DTILES")]
    pub(crate) asset_type: String,
    /// Layer name (defaults to the asset id)
    #[arg(long)]
    pub(crate) name: Option<String>,
    #[command(flatten)]
    pub(crate) token: TokenArgs,
}

#[derive(Args)]
pub(crate) struct AddByIdArgs {
    pub(crate) asset_id: String,
    /// Access token for the asset
    #[arg(long)]
    pub(crate) token: String,
}

#[derive(Args)]
pub(crate) struct LayersArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
