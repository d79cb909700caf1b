//! # tagkeeper-storage
//!
//! SQLite persistence for the three gateways, so evaluations can run end to
//! end without remote services:
//! - `catalog_records`: reference tag sets by object id (catalog gateway)
//! - `resource_tags`: tags applied to resources (remediation gateway)
//! - `evaluations`: journal of reported verdicts (evaluation reporter)

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;
pub use queries::evaluation_ops::JournalEntry;

use tagkeeper_core::errors::{StorageError, TagKeeperError};

/// Wrap a SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: String) -> TagKeeperError {
    StorageError::SqliteError { message }.into()
}
