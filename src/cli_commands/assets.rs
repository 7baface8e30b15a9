use clap::Args;

#[derive(Args)]
pub(crate) struct AssetsArgs {
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
pub(crate) struct BrowseArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
