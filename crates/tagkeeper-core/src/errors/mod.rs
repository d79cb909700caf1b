mod config_error;
mod gateway_error;
mod storage_error;
mod tagkeeper_error;

pub use config_error::ConfigError;
pub use gateway_error::{GatewayError, GatewayResult};
pub use storage_error::StorageError;
pub use tagkeeper_error::{TagKeeperError, TagKeeperResult};
