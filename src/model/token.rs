use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::wire;

/// An ion access token as returned by the token endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,
    pub name: String,

    // Listings may omit the secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(deserialize_with = "wire::scopes")]
    pub scopes: Vec<String>,

    #[serde(
        default,
        with = "wire::iso_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "wire::iso_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_modified: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "wire::iso_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_last_used: Option<OffsetDateTime>,

    #[serde(default)]
    pub asset_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl Token {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).context("parse token")
    }

    pub fn secret(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
#[path = "../tests/model/token_tests.rs"]
mod tests;
