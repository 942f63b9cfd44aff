use geojson::{FeatureCollection, GeoJson};

use crate::geo_core::{BoundingBox, Viewport};

/// Preview description handed to a map-rendering collaborator: where to
/// center the map and what to draw on it. The renderer's output is never
/// inspected here.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPreview {
    /// None when there is nothing to show.
    pub viewport: Option<Viewport>,
    /// The whole aggregate collection, drawn as-is.
    pub overlay: FeatureCollection,
}

impl MapPreview {
    /// Build a preview from the aggregate collection.
    ///
    /// The viewport is centered on the bounding box of the FIRST feature
    /// only, so multi-row batches may leave later rows out of frame. The
    /// renderer still receives every feature in the overlay. An empty
    /// collection gives an empty preview, not an error.
    pub fn build(features: &FeatureCollection) -> Self {
        let viewport = features
            .features
            .first()
            .and_then(|feature| feature.geometry.as_ref())
            .and_then(BoundingBox::from_geometry)
            .map(|bbox| Viewport::around(&bbox));

        MapPreview {
            viewport,
            overlay: features.clone(),
        }
    }

    /// Overlay serialized as a GeoJSON document for the renderer.
    pub fn overlay_geojson(&self) -> String {
        GeoJson::from(self.overlay.clone()).to_string()
    }
}
