use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::enums::{AssetType, Status};
use super::wire;

/// An asset hosted on Cesium ion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(
        default,
        with = "wire::iso_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archivable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exportable: Option<bool>,
}

impl Asset {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("parse asset")
    }

    /// Minimal complete asset with no server-side metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            asset_type,
            status: Status::Complete,
            description: None,
            attribution: None,
            bytes: None,
            date_added: None,
            percent_complete: None,
            archivable: None,
            exportable: None,
        }
    }

    /// Asset typed in by hand; only 3D tiles can be added this way.
    pub fn from_manual_entry(id: &str) -> Self {
        let id = id.trim();
        Self::new(id, format!("Cesium ion asset {}", id), AssetType::Tiles3D)
    }

    /// Rebuilds an asset from a browser drag payload (`"<id>\n<type>"`).
    pub fn from_drop_uri(name: &str, uri: &str) -> Result<Self> {
        let (id, type_str) = uri
            .split_once('\n')
            .with_context(|| format!("malformed ion drop payload {:?}", uri))?;
        if id.is_empty() || type_str.contains('\n') {
            anyhow::bail!("malformed ion drop payload {:?}", uri);
        }
        let asset_type = match type_str {
            "3DTILES" => AssetType::Tiles3D,
            "TERRAIN" => AssetType::Terrain,
            other => anyhow::bail!("unsupported asset type in drop payload: {}", other),
        };
        Ok(Self::new(id, name, asset_type))
    }

    pub fn as_drop_uri(&self) -> String {
        let type_str = match self.asset_type {
            AssetType::Tiles3D => "3DTILES",
            _ => "TERRAIN",
        };
        format!("{}\n{}", self.id, type_str)
    }

    /// Connection string understood by the host's ion data providers.
    ///
    /// Without an explicit access token the host resolves credentials from
    /// the stored configuration named by `auth_cfg`.
    pub fn as_data_source(&self, access_token: Option<&str>, auth_cfg: &str) -> String {
        match access_token.filter(|t| !t.is_empty()) {
            Some(token) => format!("ion://?assetId={}&accessToken={}", self.id, token),
            None => format!("ion://?assetId={}&authcfg={}", self.id, auth_cfg),
        }
    }

    pub fn numeric_id(&self) -> Result<u64> {
        self.id
            .parse()
            .with_context(|| format!("asset id {:?} is not numeric", self.id))
    }
}

#[cfg(test)]
#[path = "../tests/model/asset_tests.rs"]
mod tests;
