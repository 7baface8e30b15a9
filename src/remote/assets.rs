use crate::model::{Asset, AssetType, Status};

use super::http_client::{page_params, parse_json};
use super::{ApiError, IonClient, ItemsResponse, LIST_ASSETS_ENDPOINT};

impl IonClient {
    /// Lists completed 3D tiles assets visible to the stored credentials.
    pub fn list_assets(
        &self,
        page: Option<u32>,
        filter: Option<&str>,
    ) -> Result<Vec<Asset>, ApiError> {
        let mut params = page_params(page, filter);
        params.push(("status", Status::Complete.as_str().to_string()));
        params.push(("type", AssetType::Tiles3D.as_str().to_string()));

        let request = self.client.get(self.url(LIST_ASSETS_ENDPOINT)).query(&params);
        let body = self.send_blocking(request, "list assets")?;
        let out: ItemsResponse<Asset> = parse_json("list assets", &body)?;
        tracing::debug!(count = out.items.len(), "listed ion assets");
        Ok(out.items)
    }

    /// Blocking listing for browser population; failures are reported through
    /// [`IonClient::error_occurred`] and read as an empty listing.
    pub fn list_assets_blocking(&self, page: Option<u32>, filter: Option<&str>) -> Vec<Asset> {
        self.list_assets(page, filter).unwrap_or_else(|err| {
            self.report(&err);
            Vec::new()
        })
    }
}
