use super::*;

#[test]
fn asset_type_strings_map_both_ways() {
    let known = [
        ("3DTILES", AssetType::Tiles3D),
        ("GLTF", AssetType::Gltf),
        ("IMAGERY", AssetType::Imagery),
        ("TERRAIN", AssetType::Terrain),
        ("KML", AssetType::Kml),
        ("CZML", AssetType::Czml),
        ("GEOJSON", AssetType::GeoJson),
    ];
    for (s, expected) in known {
        let parsed: AssetType = s.parse().expect("known asset type");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), s);

        let lower: AssetType = s.to_lowercase().parse().expect("lowercase asset type");
        assert_eq!(lower.to_string(), s);
    }
}

#[test]
fn status_strings_map_both_ways() {
    let known = [
        ("AWAITING_FILES", Status::AwaitingFiles),
        ("NOT_STARTED", Status::NotStarted),
        ("IN_PROGRESS", Status::InProgress),
        ("COMPLETE", Status::Complete),
        ("DATA_ERROR", Status::DataError),
        ("ERROR", Status::Error),
    ];
    for (s, expected) in known {
        let parsed: Status = s.parse().expect("known status");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), s);

        let mixed: Status = s.to_lowercase().parse().expect("lowercase status");
        assert_eq!(mixed.to_string(), s);
    }
}

#[test]
fn unknown_strings_fail_the_lookup() {
    let err = "POINTCLOUD".parse::<AssetType>().unwrap_err();
    assert_eq!(err.kind, "asset type");
    assert_eq!(err.value, "POINTCLOUD");
    assert!(err.to_string().contains("POINTCLOUD"), "{}", err);

    assert!("".parse::<AssetType>().is_err());
    assert!("3D TILES".parse::<AssetType>().is_err());
    assert!("DONE".parse::<Status>().is_err());
    assert!("complete ".parse::<Status>().is_err());
}

#[test]
fn serde_uses_server_strings() {
    let t: AssetType = serde_json::from_str("\"terrain\"").expect("deserialize type");
    assert_eq!(t, AssetType::Terrain);
    assert_eq!(
        serde_json::to_string(&AssetType::Tiles3D).expect("serialize type"),
        "\"3DTILES\""
    );

    let err = serde_json::from_str::<Status>("\"ARCHIVED\"").unwrap_err();
    assert!(err.to_string().contains("ARCHIVED"), "{}", err);
}

#[test]
fn status_converts_from_owned_strings() {
    assert_eq!(Status::try_from("error".to_string()), Ok(Status::Error));
    assert_eq!(
        AssetType::try_from("Terrain".to_string()),
        Ok(AssetType::Terrain)
    );
    let err = Status::try_from("PAUSED".to_string()).unwrap_err();
    assert_eq!(err.value, "PAUSED");
}
