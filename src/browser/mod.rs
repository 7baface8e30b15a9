//! Data browser integration: the ion root node, one node per asset, and the
//! handlers that turn a double-click or a drop into an import.

use anyhow::Result;

use crate::import::MapHost;
use crate::remote::IonClient;
use crate::selection::{AddAssetByIdDialog, AddAssetDialog};

mod gui_provider;
mod items;

pub use self::gui_provider::IonDataItemGuiProvider;
pub use self::items::{
    ASSET_ITEM_PROVIDER_KEY, DataItem, IonAssetItem, IonDataItemProvider, IonRootItem, ItemState,
    MimeUri, PROVIDER_KEY, ROOT_NAME,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderCapability {
    Directory,
}

/// Creates top-level browser items for a provider.
pub trait DataItemProvider {
    type Item;

    fn name(&self) -> &str;
    fn data_provider_key(&self) -> &str;
    fn capabilities(&self) -> &'static [ProviderCapability];
    fn create_data_item(&self, path: &str) -> Option<Self::Item>;
}

/// Presents dialogs modally. Each method returns `true` when the user
/// confirmed the dialog.
pub trait DialogRunner {
    fn exec_add_asset(&mut self, client: &IonClient, dialog: &mut AddAssetDialog) -> bool;
    fn exec_add_asset_by_id(&mut self, dialog: &mut AddAssetByIdDialog) -> bool;
}

/// User interaction on browser items. Handlers return `true` when they
/// consumed the event.
pub trait DataItemGuiProvider {
    fn name(&self) -> &str;

    fn handle_double_click(
        &self,
        item: DataItem<'_>,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<bool>;

    fn handle_drop(
        &self,
        uri: &MimeUri,
        dialogs: &mut dyn DialogRunner,
        host: &mut dyn MapHost,
    ) -> Result<bool>;
}
