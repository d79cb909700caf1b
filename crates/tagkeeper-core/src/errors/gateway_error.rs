/// Failures surfaced by the catalog, remediation, and reporting gateways.
///
/// A catalog miss is not an error; see [`crate::models::CatalogLookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("{service} temporarily unavailable: {reason}")]
    Transient { service: String, reason: String },

    #[error("{service} denied access: {reason}")]
    PermissionDenied { service: String, reason: String },

    #[error("{service} rejected request: {reason}")]
    InvalidRequest { service: String, reason: String },
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    pub fn transient(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transient {
            service: service.into(),
            reason: reason.into(),
        }
    }

    pub fn permission_denied(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            service: service.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_request(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Name of the service that produced the error.
    pub fn service(&self) -> &str {
        match self {
            Self::Transient { service, .. }
            | Self::PermissionDenied { service, .. }
            | Self::InvalidRequest { service, .. } => service,
        }
    }

    /// Whether re-invoking the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}
