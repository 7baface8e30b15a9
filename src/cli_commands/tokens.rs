use clap::Args;

#[derive(Args)]
pub(crate) struct TokensArgs {
    /// Page number
    #[arg(long)]
    pub(crate) page: Option<u32>,
    /// Search string
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CreateTokenArgs {
    #[arg(long)]
    pub(crate) name: String,
    /// Token scope (repeatable)
    #[arg(long = "scope", default_values_t = ["assets:list".to_string(), "assets:read".to_string()])]
    pub(crate) scopes: Vec<String>,
    /// Restrict the token to this asset id (repeatable)
    #[arg(long = "asset-id")]
    pub(crate) asset_ids: Vec<u64>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
