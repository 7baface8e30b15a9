//! DTOs for ion request and response bodies.

/// Paged listing envelope shared by the asset and token endpoints.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

fn is_empty(v: &&[u64]) -> bool {
    v.is_empty()
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateTokenRequest<'a> {
    pub(super) name: &'a str,
    pub(super) scopes: &'a [&'a str],

    #[serde(skip_serializing_if = "is_empty")]
    pub(super) asset_ids: &'a [u64],
}
