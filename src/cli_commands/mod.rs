use clap::Subcommand;

pub(crate) mod assets;
pub(crate) mod layers;
pub(crate) mod tokens;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List completed 3D tiles assets
    Assets(assets::AssetsArgs),

    /// Expand the Cesium ion browser node
    Browse(assets::BrowseArgs),

    /// List access tokens
    Tokens(tokens::TokensArgs),

    /// Create an access token
    CreateToken(tokens::CreateTokenArgs),

    /// Add a listed asset to the project (browser double-click)
    Add(layers::AddArgs),

    /// Add an asset from a browser drag payload
    Drop(layers::DropArgs),

    /// Add an asset by id with a pasted access token
    AddById(layers::AddByIdArgs),

    /// Show the layers of the project
    Layers(layers::LayersArgs),
}
