use super::*;

#[test]
fn token_with_every_field_parses() {
    let token = Token::from_json(serde_json::json!({
        "id": "e1b7f2c0-0000-4000-8000-000000000001",
        "name": "Default",
        "token": "eyJhbGciOi",
        "dateAdded": "2023-01-05T10:00:00Z",
        "dateModified": "2023-02-05T10:00:00Z",
        "dateLastUsed": "2023-03-05T10:00:00.5Z",
        "assetIds": [1, 2, 96188],
        "isDefault": true,
        "scopes": ["assets:read", "geocode"]
    }))
    .expect("parse token");

    assert_eq!(token.name, "Default");
    assert_eq!(token.secret(), Some("eyJhbGciOi"));
    assert_eq!(token.asset_ids, vec![1, 2, 96188]);
    assert_eq!(token.is_default, Some(true));
    assert_eq!(token.scopes, vec!["assets:read", "geocode"]);
    assert_eq!(token.date_added.map(|d| d.month() as u8), Some(1));
    assert_eq!(token.date_modified.map(|d| d.month() as u8), Some(2));
    assert!(token.date_last_used.is_some());

    let again = Token::from_json(serde_json::to_value(&token).expect("serialize token"))
        .expect("reparse token");
    assert_eq!(again, token);
}

#[test]
fn minimal_token_defaults_optional_fields() {
    let token = Token::from_json(serde_json::json!({
        "id": "t1",
        "name": "test",
        "scopes": "assets:list,assets:read"
    }))
    .expect("parse token");

    assert_eq!(token.token, None);
    assert_eq!(token.secret(), None);
    assert!(token.asset_ids.is_empty());
    assert_eq!(token.is_default, None);
    assert_eq!(token.date_added, None);
    assert_eq!(token.scopes, vec!["assets:list", "assets:read"]);
}

#[test]
fn empty_secret_is_not_usable() {
    let token = Token::from_json(serde_json::json!({
        "id": 7,
        "name": "blank",
        "token": "",
        "scopes": []
    }))
    .expect("parse token");
    assert_eq!(token.id, "7");
    assert_eq!(token.secret(), None);
}

#[test]
fn missing_scopes_fail_the_parse() {
    assert!(Token::from_json(serde_json::json!({"id": "t1", "name": "x"})).is_err());
}
