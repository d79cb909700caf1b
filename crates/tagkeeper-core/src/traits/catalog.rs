use crate::errors::GatewayResult;
use crate::models::CatalogLookup;

/// Read access to the catalog of reference tag sets.
pub trait ICatalogGateway: Send + Sync {
    /// Fetch the record for `object_id`. A miss is `Ok(CatalogLookup::NotFound)`.
    fn get(&self, object_id: &str) -> GatewayResult<CatalogLookup>;
}
