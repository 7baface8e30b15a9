//! Turning a chosen asset and token into a host map layer.

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Asset, AssetType};
use crate::remote::IonClient;
use crate::selection::TokenChoice;

/// Scopes given to tokens created for a single imported asset.
pub const READ_ONLY_SCOPES: [&str; 2] = ["assets:list", "assets:read"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerProvider {
    CesiumTiles,
    QuantizedMesh,
}

impl LayerProvider {
    pub fn for_asset_type(asset_type: AssetType) -> Option<Self> {
        match asset_type {
            AssetType::Tiles3D => Some(LayerProvider::CesiumTiles),
            AssetType::Terrain => Some(LayerProvider::QuantizedMesh),
            _ => None,
        }
    }

    /// Data provider key the host registers the layer under.
    pub fn key(self) -> &'static str {
        match self {
            LayerProvider::CesiumTiles => "cesiumtiles",
            LayerProvider::QuantizedMesh => "quantizedmesh",
        }
    }
}

impl fmt::Display for LayerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSource {
    pub name: String,
    pub uri: String,
    pub provider: LayerProvider,
}

/// The map side of the host application.
pub trait MapHost {
    fn add_layer(&mut self, layer: &LayerSource) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    Added(LayerSource),
    /// Token creation failed; the failure went out through the client's
    /// error channel and nothing was added.
    Aborted,
}

pub fn import_asset(
    client: &IonClient,
    host: &mut dyn MapHost,
    asset: &Asset,
    choice: &TokenChoice,
) -> Result<ImportOutcome> {
    let provider = LayerProvider::for_asset_type(asset.asset_type).with_context(|| {
        format!(
            "asset {} has type {}, which cannot be added as a layer",
            asset.id, asset.asset_type
        )
    })?;

    let token = match choice {
        TokenChoice::Existing(token) | TokenChoice::Manual(token) => Some(token.clone()),
        TokenChoice::StoredCredentials => None,
        TokenChoice::New(name) => {
            let asset_id = asset.numeric_id()?;
            let Some(created) = client.create_token_blocking(name, &READ_ONLY_SCOPES, &[asset_id])
            else {
                tracing::info!(asset = %asset.id, "token creation failed; not adding layer");
                return Ok(ImportOutcome::Aborted);
            };
            let Some(secret) = created.secret() else {
                anyhow::bail!("ion returned token {} without a secret", created.id);
            };
            Some(secret.to_string())
        }
    };

    let layer = LayerSource {
        name: asset.name.clone(),
        uri: asset.as_data_source(token.as_deref(), client.auth_cfg()),
        provider,
    };
    host.add_layer(&layer)
        .with_context(|| format!("add layer {}", layer.name))?;
    tracing::info!(asset = %asset.id, provider = %provider, "added ion layer");
    Ok(ImportOutcome::Added(layer))
}
