pub mod global_variables;
pub mod kartverket;

use geojson::FeatureCollection;

use crate::error::Result;
use crate::geometric::parcel::MatrikkelId;

/// Boundary-lookup collaborator: resolves one matrikkel unit to the features
/// describing its boundary.
pub trait ParcelSource {
    fn fetch_parcel(&self, id: &MatrikkelId) -> Result<FeatureCollection>;
}

/// Address-lookup collaborator: free-text search returning candidate units in
/// upstream ranking order.
pub trait AddressSource {
    fn search(&self, query: &str) -> Result<Vec<MatrikkelId>>;
}
