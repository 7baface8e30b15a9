use super::*;
use crate::model::{AssetType, Token};
use crate::selection::TokenMode;

fn listed(name: &str, secret: &str) -> Token {
    Token::from_json(serde_json::json!({
        "id": name,
        "name": name,
        "token": secret,
        "scopes": ["assets:read"]
    }))
    .expect("token json")
}

#[test]
fn ok_button_follows_the_selection() {
    let mut dialog = AddAssetDialog::new(TokenSelection::new());
    assert_eq!(dialog.title(), ADD_ASSET_TITLE);
    assert!(!dialog.ok_enabled());
    assert_eq!(dialog.accept(), None);

    dialog
        .selection_mut()
        .tokens_loaded(vec![listed("Default", "aaa")]);
    assert!(dialog.ok_enabled());
    assert_eq!(dialog.accept(), Some(TokenChoice::Existing("aaa".to_string())));

    dialog.selection_mut().set_mode(TokenMode::New);
    assert!(!dialog.ok_enabled());
    assert_eq!(dialog.accept(), None);

    dialog.selection_mut().set_new_token_name("fresh");
    assert!(dialog.ok_enabled());
    assert_eq!(dialog.accept(), Some(TokenChoice::New("fresh".to_string())));
    assert_eq!(dialog.new_token_name().as_deref(), Some("fresh"));
    assert_eq!(dialog.existing_token(), None);

    dialog.selection_mut().set_mode(TokenMode::Manual);
    dialog.selection_mut().set_manual_token("typed");
    assert_eq!(dialog.accept(), Some(TokenChoice::Manual("typed".to_string())));
    assert_eq!(dialog.ok_enabled(), dialog.selection().is_valid());
}

#[test]
fn ok_button_starts_from_current_validity() {
    let mut selection = TokenSelection::new();
    selection.set_mode(TokenMode::Manual);
    selection.set_manual_token("abc");
    let dialog = AddAssetDialog::new(selection);
    assert!(dialog.ok_enabled());
}

#[test]
fn add_by_id_dialog_synthesizes_a_tiles_asset() {
    let mut dialog = AddAssetByIdDialog::new();
    assert_eq!(dialog.title(), ADD_ASSET_BY_ID_TITLE);
    assert!(!dialog.ok_enabled());

    dialog.form_mut().set_asset_id("75343");
    assert!(!dialog.ok_enabled());
    dialog.form_mut().set_access_token(" secret ");
    assert!(dialog.ok_enabled());

    let (asset, choice) = dialog.accept().expect("accepted");
    assert_eq!(asset.id, "75343");
    assert_eq!(asset.asset_type, AssetType::Tiles3D);
    assert_eq!(choice, TokenChoice::Manual("secret".to_string()));
    assert_eq!(dialog.form().asset_id(), "75343");
}
