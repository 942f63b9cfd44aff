use geo::BoundingRect;
use geojson::Geometry;

/// Fixed zoom used for parcel previews. Parcels are small; street-level zoom
/// frames a single property well.
pub const PREVIEW_ZOOM: u8 = 16;

/// Axis-aligned bounding box in lon/lat order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64, // min longitude
    pub min_y: f64, // min latitude
    pub max_x: f64, // max longitude
    pub max_y: f64, // max latitude
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounding box of a GeoJSON geometry. None when the geometry is empty
    /// or has no geo-types representation.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        let geom: geo::Geometry<f64> = geometry.try_into().ok()?;
        let rect = geom.bounding_rect()?;
        Some(BoundingBox::new(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
        ))
    }

    /// Midpoint as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_y + self.max_y) / 2.0,
            (self.min_x + self.max_x) / 2.0,
        )
    }
}

/// Map viewport for the preview: center point and zoom level. Computed fresh
/// per request, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// (latitude, longitude)
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Viewport {
    pub fn around(bbox: &BoundingBox) -> Self {
        Viewport {
            center: bbox.center(),
            zoom: PREVIEW_ZOOM,
        }
    }
}
