pub mod address_collect;
pub mod wfs_collect;

pub use address_collect::AddressCollect;
pub use wfs_collect::WfsCollect;
