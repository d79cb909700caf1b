//! Span definitions per evaluation stage: evaluation, lookup, remediation, reporting.

/// Create the span wrapping one full evaluation.
#[macro_export]
macro_rules! evaluation_span {
    ($invocation_id:expr, $resource_id:expr) => {
        tracing::info_span!(
            "tagkeeper.evaluation",
            invocation_id = %$invocation_id,
            resource_id = %$resource_id
        )
    };
}

/// Create a catalog lookup span.
#[macro_export]
macro_rules! lookup_span {
    ($object_id:expr) => {
        tracing::debug_span!("tagkeeper.lookup", object_id = %$object_id)
    };
}

/// Create a remediation span.
#[macro_export]
macro_rules! remediation_span {
    ($resource_arn:expr, $tag_count:expr) => {
        tracing::info_span!(
            "tagkeeper.remediation",
            resource_arn = %$resource_arn,
            tag_count = $tag_count
        )
    };
}

/// Create a reporting span.
#[macro_export]
macro_rules! reporting_span {
    ($compliance:expr) => {
        tracing::debug_span!("tagkeeper.reporting", compliance = %$compliance)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATION: &str = "tagkeeper.evaluation";
    pub const LOOKUP: &str = "tagkeeper.lookup";
    pub const REMEDIATION: &str = "tagkeeper.remediation";
    pub const REPORTING: &str = "tagkeeper.reporting";
}
