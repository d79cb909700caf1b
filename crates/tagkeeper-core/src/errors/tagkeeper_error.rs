use super::{ConfigError, GatewayError, StorageError};

/// Top-level error for every tagkeeper operation.
#[derive(Debug, thiserror::Error)]
pub enum TagKeeperError {
    #[error("catalog lookup failed for object '{object_id}': {source}")]
    LookupFailed {
        object_id: String,
        source: GatewayError,
    },

    #[error("remediation failed for {resource_arn}: {source}")]
    RemediationFailed {
        resource_arn: String,
        source: GatewayError,
    },

    #[error("reporting evaluation for {resource_id} failed: {source}")]
    ReportingFailed {
        resource_id: String,
        source: GatewayError,
    },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tracing init failed: {reason}")]
    TracingInit { reason: String },
}

pub type TagKeeperResult<T> = Result<T, TagKeeperError>;

impl TagKeeperError {
    /// The gateway error behind a lookup, remediation, or reporting failure.
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::LookupFailed { source, .. }
            | Self::RemediationFailed { source, .. }
            | Self::ReportingFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether an outer invoker should retry the whole evaluation.
    pub fn is_retryable(&self) -> bool {
        self.gateway_error().is_some_and(GatewayError::is_transient)
    }
}
