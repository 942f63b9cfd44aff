pub mod gpx;
pub mod kml;

pub use gpx::GpxExport;
pub use kml::KmlExport;

use geojson::FeatureCollection;

use crate::error::Result;

/// Output serialization chosen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Gpx,
    Kml,
}

impl ExportFormat {
    /// File extension for the serialized artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Gpx => ".gpx",
            ExportFormat::Kml => ".kml",
        }
    }
}

/// Serialized export plus the extension it should be stored under. Naming
/// and persistence belong to the caller.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Serialize the aggregate collection in the requested format. Pure with
/// respect to the collection: the same input always gives the same document.
pub fn export(features: &FeatureCollection, format: ExportFormat) -> Result<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Gpx => GpxExport::from_features(features).to_xml()?,
        ExportFormat::Kml => KmlExport::from_features(features).to_xml()?,
    };
    Ok(ExportArtifact {
        bytes,
        extension: format.extension(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_carries_the_matching_extension() {
        let empty = FeatureCollection {
            bbox: None,
            features: Vec::new(),
            foreign_members: None,
        };
        assert_eq!(export(&empty, ExportFormat::Gpx).unwrap().extension, ".gpx");
        assert_eq!(export(&empty, ExportFormat::Kml).unwrap().extension, ".kml");
    }
}
