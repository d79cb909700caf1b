//! StorageEngine: owns the SQLite connection, runs migrations on open and
//! implements the catalog, remediation, and reporter gateways.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::Connection;

use tagkeeper_core::config::TagKeeperConfig;
use tagkeeper_core::constants::{
    DEFAULT_CATALOG_TABLE, SERVICE_CATALOG, SERVICE_REMEDIATION, SERVICE_REPORTER,
};
use tagkeeper_core::errors::{
    GatewayError, GatewayResult, StorageError, TagKeeperError, TagKeeperResult,
};
use tagkeeper_core::models::{CatalogLookup, CatalogRecord, Evaluation, TagSet};
use tagkeeper_core::traits::{ICatalogGateway, IEvaluationReporter, IRemediationGateway};

use crate::{migrations, pragmas};
use crate::queries::evaluation_ops::JournalEntry;
use crate::queries::{catalog_ops, evaluation_ops, resource_tag_ops};
use crate::to_storage_err;

/// SQLite-backed implementation of all three gateways.
///
/// A single connection behind a mutex; every gateway call is one short
/// statement or transaction.
pub struct StorageEngine {
    conn: Mutex<Connection>,
    catalog_name: String,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> TagKeeperResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        pragmas::apply_pragmas(&conn)?;
        Self::initialize(conn)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> TagKeeperResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Open the database named by `config.storage`, scoped to `config.catalog.table_name`.
    pub fn from_config(config: &TagKeeperConfig) -> TagKeeperResult<Self> {
        let engine = Self::open(Path::new(&config.storage.db_path))?
            .with_catalog_name(&config.catalog.table_name);
        engine.set_busy_timeout(Duration::from_millis(config.storage.busy_timeout_ms))?;
        Ok(engine)
    }

    fn initialize(conn: Connection) -> TagKeeperResult<Self> {
        let version = migrations::run_migrations(&conn)?;
        tracing::debug!(schema_version = version, "storage initialized");
        Ok(Self {
            conn: Mutex::new(conn),
            catalog_name: DEFAULT_CATALOG_TABLE.to_string(),
        })
    }

    /// Scope catalog reads and writes to the logical table `name`.
    pub fn with_catalog_name(mut self, name: &str) -> Self {
        self.catalog_name = name.to_string();
        self
    }

    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    pub fn set_busy_timeout(&self, timeout: Duration) -> TagKeeperResult<()> {
        self.with_conn(|conn| {
            conn.busy_timeout(timeout)
                .map_err(|e| to_storage_err(format!("busy_timeout: {e}")))
        })
    }

    /// Whether the connection runs in WAL mode (file-backed engines only).
    pub fn is_wal_mode(&self) -> TagKeeperResult<bool> {
        Ok(self.with_conn(pragmas::journal_mode)? == "wal")
    }

    pub fn schema_version(&self) -> TagKeeperResult<u32> {
        self.with_conn(migrations::current_version)
    }

    fn with_conn<F, T>(&self, f: F) -> TagKeeperResult<T>
    where
        F: FnOnce(&Connection) -> TagKeeperResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection lock poisoned: {e}")))?;
        f(&conn)
    }

    // --- Catalog ---

    pub fn get_record(&self, object_id: &str) -> TagKeeperResult<Option<CatalogRecord>> {
        self.with_conn(|conn| catalog_ops::get_record(conn, &self.catalog_name, object_id))
    }

    /// Insert or replace a catalog record.
    pub fn put_record(&self, record: &CatalogRecord) -> TagKeeperResult<()> {
        self.with_conn(|conn| catalog_ops::put_record(conn, &self.catalog_name, record))?;
        tracing::debug!(object_id = %record.object_id, "catalog record stored");
        Ok(())
    }

    pub fn delete_record(&self, object_id: &str) -> TagKeeperResult<bool> {
        self.with_conn(|conn| catalog_ops::delete_record(conn, &self.catalog_name, object_id))
    }

    pub fn record_count(&self) -> TagKeeperResult<usize> {
        self.with_conn(|conn| catalog_ops::count_records(conn, &self.catalog_name))
    }

    // --- Resource tags ---

    pub fn apply_tags(&self, resource_arn: &str, tags: &TagSet) -> TagKeeperResult<()> {
        self.with_conn(|conn| resource_tag_ops::apply_tags(conn, resource_arn, tags))
    }

    pub fn tags_for(&self, resource_arn: &str) -> TagKeeperResult<TagSet> {
        self.with_conn(|conn| resource_tag_ops::tags_for(conn, resource_arn))
    }

    // --- Evaluation journal ---

    pub fn append_evaluation(
        &self,
        evaluation: &Evaluation,
        correlation_token: &str,
    ) -> TagKeeperResult<i64> {
        self.with_conn(|conn| evaluation_ops::append(conn, evaluation, correlation_token))
    }

    pub fn evaluations_for(&self, resource_id: &str) -> TagKeeperResult<Vec<JournalEntry>> {
        self.with_conn(|conn| evaluation_ops::entries_for(conn, resource_id))
    }

    pub fn evaluation_count(&self) -> TagKeeperResult<usize> {
        self.with_conn(evaluation_ops::count)
    }
}

/// Only SQLite failures may clear up on retry. Corrupt rows, bad keys and
/// serialization errors fail identically every time.
fn gateway_err(service: &'static str) -> impl Fn(TagKeeperError) -> GatewayError {
    move |e| match e {
        TagKeeperError::StorageError(StorageError::SqliteError { .. }) => {
            GatewayError::transient(service, e.to_string())
        }
        _ => GatewayError::invalid_request(service, e.to_string()),
    }
}

impl ICatalogGateway for StorageEngine {
    fn get(&self, object_id: &str) -> GatewayResult<CatalogLookup> {
        if object_id.is_empty() {
            return Err(GatewayError::invalid_request(
                SERVICE_CATALOG,
                "object id must not be empty",
            ));
        }
        self.get_record(object_id)
            .map(CatalogLookup::from)
            .map_err(gateway_err(SERVICE_CATALOG))
    }
}

impl IRemediationGateway for StorageEngine {
    fn apply(&self, resource_arn: &str, tags: &TagSet) -> GatewayResult<()> {
        if resource_arn.is_empty() {
            return Err(GatewayError::invalid_request(
                SERVICE_REMEDIATION,
                "resource ARN must not be empty",
            ));
        }
        self.apply_tags(resource_arn, tags)
            .map_err(gateway_err(SERVICE_REMEDIATION))
    }
}

impl IEvaluationReporter for StorageEngine {
    fn report(&self, evaluation: &Evaluation, correlation_token: &str) -> GatewayResult<()> {
        let id = self
            .append_evaluation(evaluation, correlation_token)
            .map_err(gateway_err(SERVICE_REPORTER))?;
        tracing::debug!(journal_id = id, "evaluation journaled");
        Ok(())
    }
}
