//! Browse Cesium ion assets, pick or create an access token, and add the
//! assets to a map project as tiled-scene layers.

pub mod browser;
pub mod credentials;
pub mod import;
pub mod model;
pub mod project;
pub mod remote;
pub mod selection;
pub mod signal;

pub use crate::credentials::{ConfigCredentials, CredentialStore};
pub use crate::model::{Asset, AssetType, IonConfig, Status, Token};
pub use crate::remote::{ApiError, IonClient};
