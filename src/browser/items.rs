use crate::model::Asset;
use crate::remote::IonClient;

use super::{DataItemProvider, ProviderCapability};

pub const PROVIDER_KEY: &str = "cesium_ion";
pub const ASSET_ITEM_PROVIDER_KEY: &str = "cesiumion";
pub const ROOT_NAME: &str = "Cesium ion";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    NotPopulated,
    Populated,
}

/// Drag payload of a browser item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MimeUri {
    pub provider_key: String,
    pub name: String,
    pub uri: String,
}

/// Any item the host hands to a GUI provider.
#[derive(Clone, Copy, Debug)]
pub enum DataItem<'a> {
    Root(&'a IonRootItem),
    Asset(&'a IonAssetItem),
    /// An item owned by another provider.
    Foreign,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IonAssetItem {
    asset: Asset,
    path: String,
}

impl IonAssetItem {
    pub fn new(asset: Asset) -> Self {
        let path = format!("ion{}", asset.id);
        Self { asset, path }
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn name(&self) -> &str {
        &self.asset.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn provider_key(&self) -> &'static str {
        ASSET_ITEM_PROVIDER_KEY
    }

    // Assets have no children to fetch.
    pub fn state(&self) -> ItemState {
        ItemState::Populated
    }

    pub fn has_drag_enabled(&self) -> bool {
        true
    }

    pub fn mime_uri(&self) -> MimeUri {
        MimeUri {
            provider_key: ASSET_ITEM_PROVIDER_KEY.to_string(),
            name: self.asset.name.clone(),
            uri: self.asset.as_drop_uri(),
        }
    }
}

/// Root of the ion namespace. Children come from a blocking asset listing
/// the first time the node is expanded.
#[derive(Debug)]
pub struct IonRootItem {
    state: ItemState,
    children: Vec<IonAssetItem>,
}

impl Default for IonRootItem {
    fn default() -> Self {
        Self::new()
    }
}

impl IonRootItem {
    pub fn new() -> Self {
        Self {
            state: ItemState::NotPopulated,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        ROOT_NAME
    }

    pub fn path(&self) -> &'static str {
        PROVIDER_KEY
    }

    pub fn provider_key(&self) -> &'static str {
        PROVIDER_KEY
    }

    pub fn is_fertile(&self) -> bool {
        true
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    /// A failed listing reads as no children; the failure itself goes out
    /// through the client's error channel.
    pub fn create_children(&self, client: &IonClient) -> Vec<IonAssetItem> {
        client
            .list_assets_blocking(None, None)
            .into_iter()
            .map(IonAssetItem::new)
            .collect()
    }

    pub fn populate(&mut self, client: &IonClient) -> &[IonAssetItem] {
        if self.state == ItemState::NotPopulated {
            self.children = self.create_children(client);
            self.state = ItemState::Populated;
        }
        &self.children
    }

    pub fn refresh(&mut self, client: &IonClient) -> &[IonAssetItem] {
        self.state = ItemState::NotPopulated;
        self.populate(client)
    }

    pub fn children(&self) -> &[IonAssetItem] {
        &self.children
    }

    pub fn find_child(&self, asset_id: &str) -> Option<&IonAssetItem> {
        self.children.iter().find(|c| c.asset.id == asset_id)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IonDataItemProvider;

impl DataItemProvider for IonDataItemProvider {
    type Item = IonRootItem;

    fn name(&self) -> &str {
        PROVIDER_KEY
    }

    fn data_provider_key(&self) -> &str {
        PROVIDER_KEY
    }

    fn capabilities(&self) -> &'static [ProviderCapability] {
        &[ProviderCapability::Directory]
    }

    fn create_data_item(&self, path: &str) -> Option<IonRootItem> {
        if path.is_empty() {
            Some(IonRootItem::new())
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/browser/items_tests.rs"]
mod tests;
