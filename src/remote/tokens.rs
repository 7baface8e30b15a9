use crate::model::Token;

use super::http_client::{page_params, parse_json};
use super::{
    ApiError, CREATE_TOKEN_ENDPOINT, CreateTokenRequest, IonClient, ItemsResponse,
    LIST_TOKENS_ENDPOINT, PendingReply, Reply,
};

impl IonClient {
    /// Starts a token listing without blocking. Pair with
    /// [`IonClient::parse_list_tokens_reply`] once the reply has finished.
    pub fn list_tokens_request(&self, page: Option<u32>, filter: Option<&str>) -> PendingReply {
        let params = page_params(page, filter);
        let request = self
            .async_client
            .get(self.url(LIST_TOKENS_ENDPOINT))
            .query(&params);
        let request = match self.auth() {
            Ok(Some(auth)) => request.header(reqwest::header::AUTHORIZATION, auth),
            Ok(None) => request,
            Err(err) => return PendingReply::ready("list tokens", Reply::Failed(err.to_string())),
        };
        tracing::debug!(?page, "starting token listing");
        PendingReply::spawn(&self.runtime, "list tokens", request)
    }

    pub fn tokens_from_reply(&self, reply: Reply) -> Result<Vec<Token>, ApiError> {
        let body = reply.into_body("list tokens")?;
        let out: ItemsResponse<Token> = parse_json("list tokens", &body)?;
        Ok(out.items)
    }

    pub fn parse_list_tokens_reply(&self, reply: Reply) -> Vec<Token> {
        self.tokens_from_reply(reply).unwrap_or_else(|err| {
            self.report(&err);
            Vec::new()
        })
    }

    /// Blocking token listing.
    pub fn list_tokens(
        &self,
        page: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Vec<Token>, ApiError> {
        let params = page_params(page, filter);
        let request = self.client.get(self.url(LIST_TOKENS_ENDPOINT)).query(&params);
        let body = self.send_blocking(request, "list tokens")?;
        let out: ItemsResponse<Token> = parse_json("list tokens", &body)?;
        Ok(out.items)
    }

    /// Creates a token; an empty `asset_ids` leaves it unrestricted.
    pub fn create_token(
        &self,
        name: &str,
        scopes: &[&str],
        asset_ids: &[u64],
    ) -> Result<Token, ApiError> {
        let request = self
            .client
            .post(self.url(CREATE_TOKEN_ENDPOINT))
            .json(&CreateTokenRequest {
                name,
                scopes,
                asset_ids,
            });
        let body = self.send_blocking(request, "create token")?;
        let token: Token = parse_json("create token", &body)?;
        tracing::info!(id = %token.id, name = %token.name, "created ion token");
        Ok(token)
    }

    pub fn create_token_blocking(
        &self,
        name: &str,
        scopes: &[&str],
        asset_ids: &[u64],
    ) -> Option<Token> {
        match self.create_token(name, scopes, asset_ids) {
            Ok(token) => Some(token),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }
}
