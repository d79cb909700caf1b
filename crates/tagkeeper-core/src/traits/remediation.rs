use crate::errors::GatewayResult;
use crate::models::TagSet;

/// Applies a tag set to a live resource.
pub trait IRemediationGateway: Send + Sync {
    /// Apply `tags` to the resource identified by `resource_arn`.
    /// Must be synchronous and authoritative: `Ok` means the tags are in place.
    fn apply(&self, resource_arn: &str, tags: &TagSet) -> GatewayResult<()>;
}
