use crate::signal::Signal;

/// Raw asset id + access token entry.
#[derive(Debug, Default)]
pub struct AssetByIdForm {
    asset_id: String,
    access_token: String,
    is_valid_changed: Signal<bool>,
}

impl AssetByIdForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid_changed(&self) -> &Signal<bool> {
        &self.is_valid_changed
    }

    pub fn set_asset_id(&mut self, text: &str) {
        self.asset_id = text.to_string();
        self.is_valid_changed.emit(&self.is_valid());
    }

    pub fn set_access_token(&mut self, text: &str) {
        self.access_token = text.to_string();
        self.is_valid_changed.emit(&self.is_valid());
    }

    pub fn is_valid(&self) -> bool {
        !self.asset_id().is_empty() && !self.token().is_empty()
    }

    pub fn asset_id(&self) -> &str {
        self.asset_id.trim()
    }

    pub fn token(&self) -> &str {
        self.access_token.trim()
    }
}

#[cfg(test)]
#[path = "../tests/selection/asset_by_id_tests.rs"]
mod tests;
