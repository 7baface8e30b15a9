//! Stored credential lookup, keyed by credential configuration id.

use std::collections::HashMap;

use anyhow::Result;

use crate::model::IonConfig;

/// Resolves the access token behind a stored credential configuration.
///
/// The client never takes per-call credentials; it asks the store for the
/// token of its configured id on every authenticated request.
pub trait CredentialStore {
    fn access_token(&self, auth_cfg: &str) -> Result<Option<String>>;
}

#[derive(Clone, Debug, Default)]
pub struct ConfigCredentials {
    tokens: HashMap<String, String>,
}

impl ConfigCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &IonConfig) -> Self {
        Self {
            tokens: config.credentials.clone(),
        }
    }

    pub fn with_token(mut self, auth_cfg: &str, token: &str) -> Self {
        self.tokens.insert(auth_cfg.to_string(), token.to_string());
        self
    }
}

impl CredentialStore for ConfigCredentials {
    fn access_token(&self, auth_cfg: &str) -> Result<Option<String>> {
        Ok(self
            .tokens
            .get(auth_cfg)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }
}
