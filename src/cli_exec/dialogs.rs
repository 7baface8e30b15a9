use cesium_ion::IonClient;
use cesium_ion::browser::DialogRunner;
use cesium_ion::selection::{AddAssetByIdDialog, AddAssetDialog, TokenMode};

use crate::cli_commands::layers::TokenArgs;

/// Fills the dialogs from command-line flags instead of user input.
#[derive(Default)]
pub(super) struct ScriptedDialogs {
    pub(super) token: TokenArgs,
    pub(super) asset_id: Option<String>,
    pub(super) access_token: Option<String>,
}

impl DialogRunner for ScriptedDialogs {
    fn exec_add_asset(&mut self, client: &IonClient, dialog: &mut AddAssetDialog) -> bool {
        let selection = dialog.selection_mut();
        if let Some(name) = &self.token.new_token {
            selection.set_mode(TokenMode::New);
            selection.set_new_token_name(name);
        } else if let Some(token) = &self.token.token {
            selection.set_mode(TokenMode::Manual);
            selection.set_manual_token(token);
        } else {
            selection.wait_for_listing(client);
            if let Some(name) = &self.token.existing {
                if !selection.set_mode(TokenMode::Existing) {
                    eprintln!("no existing tokens are available");
                    return false;
                }
                if !selection.select_existing_by_name(name) {
                    eprintln!("no listed token named {:?}", name);
                    return false;
                }
            }
        }

        if !dialog.ok_enabled() {
            eprintln!("no usable token selected (pass --existing, --new-token or --token)");
            return false;
        }
        true
    }

    fn exec_add_asset_by_id(&mut self, dialog: &mut AddAssetByIdDialog) -> bool {
        let form = dialog.form_mut();
        form.set_asset_id(self.asset_id.as_deref().unwrap_or_default());
        form.set_access_token(self.access_token.as_deref().unwrap_or_default());
        if !dialog.ok_enabled() {
            eprintln!("asset id and access token are both required");
            return false;
        }
        true
    }
}
