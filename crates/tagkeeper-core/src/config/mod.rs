//! Configuration: one struct per section, all loadable from TOML with defaults.

mod catalog_config;
pub mod defaults;
mod observability_config;
mod policy_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ConfigError, TagKeeperResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagKeeperConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub policy: PolicyConfig,
    pub observability: ObservabilityConfig,
}

impl TagKeeperConfig {
    /// Parse and validate a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> TagKeeperResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> TagKeeperResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&raw)
    }

    pub fn validate(&self) -> TagKeeperResult<()> {
        if self.catalog.table_name.trim().is_empty() {
            return Err(invalid("catalog.table_name", "must not be blank"));
        }
        if self.policy.required_keys.is_empty() {
            return Err(invalid("policy.required_keys", "must name at least one key"));
        }
        if let Some(blank) = self.policy.required_keys.iter().position(|k| k.trim().is_empty()) {
            return Err(invalid(
                "policy.required_keys",
                &format!("entry {blank} is blank"),
            ));
        }
        if self.policy.compliant_annotation.trim().is_empty() {
            return Err(invalid("policy.compliant_annotation", "must not be blank"));
        }
        if self.policy.non_compliant_annotation.trim().is_empty() {
            return Err(invalid("policy.non_compliant_annotation", "must not be blank"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::TagKeeperError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
