//! Cesium ion REST client.
//!
//! Every call comes in two forms. The typed form returns `Result<_, ApiError>`.
//! The host form reports failures through [`IonClient::error_occurred`] and
//! hands back an empty result, which is what browser items and dialogs use.

use anyhow::{Context, Result};

use crate::credentials::CredentialStore;
use crate::model::IonConfig;
use crate::signal::Signal;

mod error;
pub use self::error::ApiError;

mod http_client;
mod pending;
pub use self::pending::{PendingReply, Reply};

mod types;
pub use self::types::*;
mod assets;
mod tokens;

pub const LIST_ASSETS_ENDPOINT: &str = "/v1/assets";
pub const LIST_TOKENS_ENDPOINT: &str = "/v2/tokens";
pub const CREATE_TOKEN_ENDPOINT: &str = "/v2/tokens";

pub const CLIENT_VERSION_HEADER: &str = "x-qgis-plugin-version";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct IonClient {
    base_url: String,
    auth_cfg: String,
    credentials: Box<dyn CredentialStore>,
    client: reqwest::blocking::Client,
    async_client: reqwest::Client,
    // Drives non-blocking replies; the caller's thread never enters it.
    runtime: tokio::runtime::Runtime,
    error_occurred: Signal<String>,
}

impl IonClient {
    pub fn new(config: &IonConfig, credentials: Box<dyn CredentialStore>) -> Result<Self> {
        let mut blocking = reqwest::blocking::Client::builder()
            .user_agent(concat!("cesium-ion/", env!("CARGO_PKG_VERSION")))
            .default_headers(http_client::default_headers());
        let mut non_blocking = reqwest::Client::builder()
            .user_agent(concat!("cesium-ion/", env!("CARGO_PKG_VERSION")))
            .default_headers(http_client::default_headers());
        if let Some(timeout) = config.timeout() {
            blocking = blocking.timeout(timeout);
            non_blocking = non_blocking.timeout(timeout);
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("ion-replies")
            .enable_all()
            .build()
            .context("build reply runtime")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_cfg: config.auth_cfg.clone(),
            credentials,
            client: blocking.build().context("build reqwest client")?,
            async_client: non_blocking
                .build()
                .context("build async reqwest client")?,
            runtime,
            error_occurred: Signal::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Id of the stored credential configuration this client authenticates with.
    pub fn auth_cfg(&self) -> &str {
        &self.auth_cfg
    }

    /// Emits one human readable message per reported failure.
    pub fn error_occurred(&self) -> &Signal<String> {
        &self.error_occurred
    }

    pub(crate) fn report(&self, err: &ApiError) {
        if err.is_cancelled() {
            tracing::debug!("ion request cancelled");
            return;
        }
        tracing::warn!(error = %err, "ion request failed");
        self.error_occurred.emit(&err.to_string());
    }
}
