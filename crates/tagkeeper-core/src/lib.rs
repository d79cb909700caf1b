//! # tagkeeper-core
//!
//! Foundation crate for required-tag compliance.
//! Defines the tag/catalog/verdict types, the gateway traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TagKeeperConfig;
pub use errors::{GatewayError, GatewayResult, TagKeeperError, TagKeeperResult};
pub use models::{
    CatalogLookup, CatalogRecord, ChangeNotification, ComplianceType, Evaluation,
    InvocationStatus, TagSet, Verdict,
};
