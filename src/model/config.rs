use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.cesium.com";
pub const DEFAULT_AUTH_CFG: &str = "cesiion";
pub const DEFAULT_CONFIG_FILE: &str = "cesium-ion.json";

pub const ENV_URL: &str = "CESIUM_ION_URL";
pub const ENV_TOKEN: &str = "CESIUM_ION_TOKEN";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_auth_cfg() -> String {
    DEFAULT_AUTH_CFG.to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IonConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Id of the stored credential configuration used for authenticated calls.
    #[serde(default = "default_auth_cfg")]
    pub auth_cfg: String,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Access tokens keyed by credential configuration id.
    #[serde(default)]
    pub credentials: HashMap<String, String>,

    /// Project file layers are added to.
    #[serde(default)]
    pub project: Option<PathBuf>,
}

impl Default for IonConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_cfg: default_auth_cfg(),
            timeout_secs: None,
            credentials: HashMap::new(),
            project: None,
        }
    }
}

impl IonConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    /// Loads `path`, or `cesium-ion.json` in the working directory when it
    /// exists, and falls back to defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.is_file() {
                    Self::load(p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(ENV_URL).ok(),
            std::env::var(ENV_TOKEN).ok(),
        );
    }

    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url.filter(|s| !s.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(token) = token.filter(|s| !s.trim().is_empty()) {
            self.credentials
                .insert(self.auth_cfg.clone(), token.trim().to_string());
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
