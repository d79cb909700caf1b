/// Tagkeeper version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mandatory tag keys.
pub const ENVIRONMENT_TAG: &str = "Environment";
pub const DEPARTMENT_TAG: &str = "Department";
pub const OBJECT_ID_TAG: &str = "ObjectId";

/// Keys a tag set must carry (non-empty) to be considered complete.
pub const REQUIRED_TAGS: [&str; 3] = [ENVIRONMENT_TAG, DEPARTMENT_TAG, OBJECT_ID_TAG];

/// Annotation sent with a COMPLIANT verdict.
pub const ANNOTATION_COMPLIANT: &str = "Resource is compliant";

/// Annotation sent with a NON_COMPLIANT verdict.
pub const ANNOTATION_MISSING_TAGS: &str = "Missing required tags";

/// Terminal status returned when a verdict was reported successfully.
pub const STATUS_CONFORMANT: &str = "CONFORMANT";

/// Default region of the catalog and tagging services.
pub const DEFAULT_REGION: &str = "eu-central-1";

/// Default catalog table name.
pub const DEFAULT_CATALOG_TABLE: &str = "TagsTable";

/// Gateway service names used in errors and log fields.
pub const SERVICE_CATALOG: &str = "catalog";
pub const SERVICE_REMEDIATION: &str = "remediation";
pub const SERVICE_REPORTER: &str = "reporter";
