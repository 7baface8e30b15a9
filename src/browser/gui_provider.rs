use anyhow::Result;

use crate::import::{ImportOutcome, MapHost, import_asset};
use crate::model::Asset;
use crate::remote::IonClient;
use crate::selection::{AddAssetByIdDialog, AddAssetDialog};

use super::{ASSET_ITEM_PROVIDER_KEY, DataItem, DataItemGuiProvider, DialogRunner, MimeUri, PROVIDER_KEY};

pub struct IonDataItemGuiProvider<'a> {
    client: &'a IonClient,
}

impl<'a> IonDataItemGuiProvider<'a> {
    pub fn new(client: &'a IonClient) -> Self {
        Self { client }
    }

    /// Opens the token dialog for `asset` and imports it on confirmation.
    /// Returns `None` when the user cancelled.
    pub fn add_asset(
        &self,
        asset: &Asset,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<Option<ImportOutcome>> {
        let mut dialog = AddAssetDialog::open(self.client);
        if !dialogs.exec_add_asset(self.client, &mut dialog) {
            return Ok(None);
        }
        let Some(choice) = dialog.accept() else {
            return Ok(None);
        };
        import_asset(self.client, host, asset, &choice).map(Some)
    }

    pub fn add_asset_by_id(
        &self,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<Option<ImportOutcome>> {
        let mut dialog = AddAssetByIdDialog::new();
        if !dialogs.exec_add_asset_by_id(&mut dialog) {
            return Ok(None);
        }
        let Some((asset, choice)) = dialog.accept() else {
            return Ok(None);
        };
        import_asset(self.client, host, &asset, &choice).map(Some)
    }

    pub fn accepts_drop(&self, uri: &MimeUri) -> bool {
        uri.provider_key == ASSET_ITEM_PROVIDER_KEY
    }
}

impl DataItemGuiProvider for IonDataItemGuiProvider<'_> {
    fn name(&self) -> &str {
        PROVIDER_KEY
    }

    fn handle_double_click(
        &self,
        item: DataItem<'_>,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<bool> {
        let DataItem::Asset(item) = item else {
            return Ok(false);
        };
        self.add_asset(item.asset(), dialogs, host)?;
        Ok(true)
    }

    fn handle_drop(
        &self,
        uri: &MimeUri,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<bool> {
        if !self.accepts_drop(uri) {
            return Ok(false);
        }
        let asset = Asset::from_drop_uri(&uri.name, &uri.uri)?;
        self.add_asset(&asset, dialogs, host)?;
        Ok(true)
    }
}
