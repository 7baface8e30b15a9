mod asset;
mod config;
mod enums;
mod token;
mod wire;

pub use self::asset::Asset;
pub use self::config::{
    DEFAULT_AUTH_CFG, DEFAULT_BASE_URL, DEFAULT_CONFIG_FILE, ENV_TOKEN, ENV_URL, IonConfig,
};
pub use self::enums::{AssetType, Status, UnknownEnumValue};
pub use self::token::Token;
