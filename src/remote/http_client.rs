use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use super::{ApiError, CLIENT_VERSION, CLIENT_VERSION_HEADER, IonClient};

pub(super) fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(CLIENT_VERSION_HEADER),
        HeaderValue::from_static(CLIENT_VERSION),
    );
    headers
}

pub(super) fn page_params(page: Option<u32>, filter: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        params.push(("search", filter.to_string()));
    }
    params
}

/// Flattens an error and its sources into one line.
pub(super) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        let msg = e.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        source = e.source();
    }
    out
}

/// ion error bodies look like `{"code": "...", "message": "..."}`.
pub(super) fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

pub(super) fn check_status(
    label: &'static str,
    status: StatusCode,
    body: &[u8],
) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    let mut message = error_message(status, body);
    if status == StatusCode::UNAUTHORIZED {
        message = format!(
            "unauthorized (ion access token missing, invalid or expired): {}",
            message
        );
    }
    Err(ApiError::Status {
        label,
        status: status.as_u16(),
        message,
    })
}

pub(super) fn parse_json<T: DeserializeOwned>(
    label: &'static str,
    body: &[u8],
) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Parse { label, source })
}

impl IonClient {
    pub(super) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub(super) fn auth(&self) -> Result<Option<String>, ApiError> {
        let token = self
            .credentials
            .access_token(&self.auth_cfg)
            .map_err(|err| ApiError::Credentials(format!("{:#}", err)))?;
        if token.is_none() {
            tracing::debug!(auth_cfg = %self.auth_cfg, "no stored access token");
        }
        Ok(token.map(|t| format!("Bearer {}", t)))
    }

    /// Sends an authenticated blocking request and returns the body of a
    /// successful response.
    pub(super) fn send_blocking(
        &self,
        request: reqwest::blocking::RequestBuilder,
        label: &'static str,
    ) -> Result<Vec<u8>, ApiError> {
        let request = match self.auth()? {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        };
        tracing::debug!(label, "sending ion request");
        let resp = request
            .send()
            .map_err(|err| ApiError::Transport(error_chain(&err)))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .map_err(|err| ApiError::Transport(error_chain(&err)))?;
        check_status(label, status, &body)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
