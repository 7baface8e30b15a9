//! Modal dialog models. Confirmation is only available while the wrapped
//! form reports itself valid, and `accept` does not re-check anything.

use std::cell::Cell;
use std::rc::Rc;

use crate::model::Asset;
use crate::remote::IonClient;

use super::{AssetByIdForm, TokenChoice, TokenMode, TokenSelection};

pub const ADD_ASSET_TITLE: &str = "Select Cesium ion Token";
pub const ADD_ASSET_BY_ID_TITLE: &str = "Add Cesium ion Asset by ID";

fn follow_validity(initial: bool) -> (Rc<Cell<bool>>, impl FnMut(&bool) + 'static) {
    let ok = Rc::new(Cell::new(initial));
    let slot = {
        let ok = ok.clone();
        move |valid: &bool| ok.set(*valid)
    };
    (ok, slot)
}

#[derive(Debug)]
pub struct AddAssetDialog {
    selection: TokenSelection,
    ok_enabled: Rc<Cell<bool>>,
}

impl AddAssetDialog {
    pub fn new(selection: TokenSelection) -> Self {
        let (ok_enabled, slot) = follow_validity(selection.is_valid());
        selection.is_valid_changed().connect(slot);
        Self {
            selection,
            ok_enabled,
        }
    }

    /// Dialog with its token listing already under way.
    pub fn open(client: &IonClient) -> Self {
        let mut selection = TokenSelection::new();
        selection.begin_listing(client);
        Self::new(selection)
    }

    pub fn title(&self) -> &'static str {
        ADD_ASSET_TITLE
    }

    pub fn selection(&self) -> &TokenSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut TokenSelection {
        &mut self.selection
    }

    pub fn ok_enabled(&self) -> bool {
        self.ok_enabled.get()
    }

    pub fn existing_token(&self) -> Option<String> {
        self.selection.existing_token()
    }

    pub fn new_token_name(&self) -> Option<String> {
        self.selection.new_token_name()
    }

    pub fn accept(&self) -> Option<TokenChoice> {
        if !self.ok_enabled() {
            return None;
        }
        Some(match (self.existing_token(), self.new_token_name()) {
            (Some(token), _) => match self.selection.mode() {
                TokenMode::Manual => TokenChoice::Manual(token),
                _ => TokenChoice::Existing(token),
            },
            (None, Some(name)) => TokenChoice::New(name),
            (None, None) => return None,
        })
    }
}

#[derive(Debug)]
pub struct AddAssetByIdDialog {
    form: AssetByIdForm,
    ok_enabled: Rc<Cell<bool>>,
}

impl Default for AddAssetByIdDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddAssetByIdDialog {
    pub fn new() -> Self {
        let form = AssetByIdForm::new();
        let (ok_enabled, slot) = follow_validity(form.is_valid());
        form.is_valid_changed().connect(slot);
        Self { form, ok_enabled }
    }

    pub fn title(&self) -> &'static str {
        ADD_ASSET_BY_ID_TITLE
    }

    pub fn form(&self) -> &AssetByIdForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AssetByIdForm {
        &mut self.form
    }

    pub fn ok_enabled(&self) -> bool {
        self.ok_enabled.get()
    }

    /// The asset to add and the token typed in for it.
    pub fn accept(&self) -> Option<(Asset, TokenChoice)> {
        if !self.ok_enabled() {
            return None;
        }
        Some((
            Asset::from_manual_entry(self.form.asset_id()),
            TokenChoice::Manual(self.form.token().to_string()),
        ))
    }
}

#[cfg(test)]
#[path = "../tests/selection/dialogs_tests.rs"]
mod tests;
