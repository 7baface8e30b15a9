use super::*;

fn full_asset_json() -> serde_json::Value {
    serde_json::json!({
        "id": 96188,
        "name": "Cesium OSM Buildings",
        "description": "Global 3D buildings",
        "attribution": "OpenStreetMap contributors",
        "type": "3DTILES",
        "bytes": 123456789,
        "dateAdded": "2020-09-22T18:40:42.371Z",
        "status": "COMPLETE",
        "percentComplete": 100,
        "archivable": false,
        "exportable": true
    })
}

#[test]
fn asset_json_with_every_field_survives_a_round_trip() {
    let asset = Asset::from_json(full_asset_json()).expect("parse asset");
    assert_eq!(asset.id, "96188");
    assert_eq!(asset.name, "Cesium OSM Buildings");
    assert_eq!(asset.description.as_deref(), Some("Global 3D buildings"));
    assert_eq!(asset.attribution.as_deref(), Some("OpenStreetMap contributors"));
    assert_eq!(asset.asset_type, AssetType::Tiles3D);
    assert_eq!(asset.bytes, Some(123456789));
    assert_eq!(asset.status, Status::Complete);
    assert_eq!(asset.percent_complete, Some(100));
    assert_eq!(asset.archivable, Some(false));
    assert_eq!(asset.exportable, Some(true));

    let date = asset.date_added.expect("date added");
    assert_eq!(date.year(), 2020);
    assert_eq!(date.millisecond(), 371);

    let again = Asset::from_json(serde_json::to_value(&asset).expect("serialize asset"))
        .expect("reparse asset");
    assert_eq!(again, asset);
}

#[test]
fn omitted_optional_fields_are_absent() {
    let asset = Asset::from_json(serde_json::json!({
        "id": "5",
        "name": "Foo",
        "type": "3DTILES",
        "status": "COMPLETE"
    }))
    .expect("parse asset");
    assert_eq!(asset, Asset::new("5", "Foo", AssetType::Tiles3D));

    let out = serde_json::to_value(&asset).expect("serialize asset");
    assert_eq!(
        out,
        serde_json::json!({"id": "5", "name": "Foo", "type": "3DTILES", "status": "COMPLETE"})
    );
}

#[test]
fn unparseable_date_is_dropped_not_fatal() {
    let mut json = full_asset_json();
    json["dateAdded"] = serde_json::json!("yesterday");
    let asset = Asset::from_json(json).expect("parse asset");
    assert!(asset.date_added.is_none());
}

#[test]
fn unknown_type_or_status_fails_the_parse() {
    let mut json = full_asset_json();
    json["type"] = serde_json::json!("POINTCLOUD");
    let err = Asset::from_json(json).unwrap_err();
    assert!(format!("{:#}", err).contains("POINTCLOUD"), "{:#}", err);

    let mut json = full_asset_json();
    json["status"] = serde_json::json!("ARCHIVED");
    assert!(Asset::from_json(json).is_err());
}

#[test]
fn drop_uri_round_trips_tiles_and_terrain() {
    let tiles = Asset::from_drop_uri("Buildings", "96188\n3DTILES").expect("tiles drop");
    assert_eq!(tiles.id, "96188");
    assert_eq!(tiles.name, "Buildings");
    assert_eq!(tiles.asset_type, AssetType::Tiles3D);
    assert_eq!(tiles.status, Status::Complete);
    assert_eq!(tiles.as_drop_uri(), "96188\n3DTILES");

    let terrain = Asset::from_drop_uri("World Terrain", "1\nTERRAIN").expect("terrain drop");
    assert_eq!(terrain.asset_type, AssetType::Terrain);
    assert_eq!(terrain.as_drop_uri(), "1\nTERRAIN");
}

#[test]
fn malformed_drop_uris_are_rejected() {
    assert!(Asset::from_drop_uri("x", "96188").is_err());
    assert!(Asset::from_drop_uri("x", "\n3DTILES").is_err());
    assert!(Asset::from_drop_uri("x", "1\n3DTILES\nextra").is_err());
    assert!(Asset::from_drop_uri("x", "1\nKML").is_err());
}

#[test]
fn data_source_prefers_explicit_token() {
    let asset = Asset::new("42", "Tiles", AssetType::Tiles3D);
    assert_eq!(
        asset.as_data_source(Some("abc"), "cesiion"),
        "ion://?assetId=42&accessToken=abc"
    );
    assert_eq!(
        asset.as_data_source(None, "cesiion"),
        "ion://?assetId=42&authcfg=cesiion"
    );
    assert_eq!(
        asset.as_data_source(Some(""), "other"),
        "ion://?assetId=42&authcfg=other"
    );
}

#[test]
fn manual_entry_trims_and_names_the_asset() {
    let asset = Asset::from_manual_entry("  75343 ");
    assert_eq!(asset.id, "75343");
    assert_eq!(asset.name, "Cesium ion asset 75343");
    assert_eq!(asset.numeric_id().expect("numeric id"), 75343);

    assert!(Asset::new("abc", "x", AssetType::Tiles3D).numeric_id().is_err());
}
