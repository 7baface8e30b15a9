//! Token and asset entry state behind the add-asset dialogs.

mod asset_by_id;
mod dialogs;
mod token_selection;

pub use self::asset_by_id::AssetByIdForm;
pub use self::dialogs::{ADD_ASSET_BY_ID_TITLE, ADD_ASSET_TITLE, AddAssetByIdDialog, AddAssetDialog};
pub use self::token_selection::{TokenMode, TokenOption, TokenSelection};

/// How the token for an import was chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenChoice {
    /// Secret of a token listed by ion.
    Existing(String),
    /// Secret pasted by the user.
    Manual(String),
    /// Create a token with this name, restricted to the imported asset.
    New(String),
    /// No explicit token; the host resolves the stored credentials.
    StoredCredentials,
}

impl TokenChoice {
    pub fn explicit_token(&self) -> Option<&str> {
        match self {
            TokenChoice::Existing(t) | TokenChoice::Manual(t) => Some(t),
            TokenChoice::New(_) | TokenChoice::StoredCredentials => None,
        }
    }
}
