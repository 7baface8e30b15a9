use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A server string that has no matching variant.
///
/// Unknown values are never mapped to a fallback variant: a new server-side
/// asset type or status has to be added here before it can be handled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownEnumValue {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AssetType {
    Tiles3D,
    Gltf,
    Imagery,
    Terrain,
    Kml,
    Czml,
    GeoJson,
}

impl AssetType {
    pub const ALL: [AssetType; 7] = [
        AssetType::Tiles3D,
        AssetType::Gltf,
        AssetType::Imagery,
        AssetType::Terrain,
        AssetType::Kml,
        AssetType::Czml,
        AssetType::GeoJson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Tiles3D => "3DTILES",
            AssetType::Gltf => "GLTF",
            AssetType::Imagery => "IMAGERY",
            AssetType::Terrain => "TERRAIN",
            AssetType::Kml => "KML",
            AssetType::Czml => "CZML",
            AssetType::GeoJson => "GEOJSON",
        }
    }
}

impl FromStr for AssetType {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| UnknownEnumValue {
                kind: "asset type",
                value: s.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Status {
    AwaitingFiles,
    NotStarted,
    InProgress,
    Complete,
    DataError,
    Error,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::AwaitingFiles,
        Status::NotStarted,
        Status::InProgress,
        Status::Complete,
        Status::DataError,
        Status::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::AwaitingFiles => "AWAITING_FILES",
            Status::NotStarted => "NOT_STARTED",
            Status::InProgress => "IN_PROGRESS",
            Status::Complete => "COMPLETE",
            Status::DataError => "DATA_ERROR",
            Status::Error => "ERROR",
        }
    }
}

impl FromStr for Status {
    type Err = UnknownEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Status::ALL
            .into_iter()
            .find(|st| st.as_str() == upper)
            .ok_or_else(|| UnknownEnumValue {
                kind: "asset status",
                value: s.to_string(),
            })
    }
}

macro_rules! server_string_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $ty {
            type Error = UnknownEnumValue;

            fn try_from(value: String) -> Result<Self, UnknownEnumValue> {
                value.parse()
            }
        }

        impl From<$ty> for &'static str {
            fn from(value: $ty) -> Self {
                value.as_str()
            }
        }
    };
}

server_string_conversions!(AssetType);
server_string_conversions!(Status);

#[cfg(test)]
#[path = "../tests/model/enums_tests.rs"]
mod tests;
