//! Resolves Norwegian cadastral identifiers (matrikkel) to property-boundary
//! geometry from Kartverket's WFS service and re-encodes the result as a GPX
//! track export, a KML placemark export and a map preview.

pub mod collect;
pub mod error;
pub mod export;
pub mod geo_core;
pub mod geometric;

pub use error::{Error, Result};
