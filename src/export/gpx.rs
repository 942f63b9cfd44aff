use geojson::{FeatureCollection, Value};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::Result;

const GPX_NS: &str = "http://www.topografix.com/GPX/1/1";
const GPX_CREATOR: &str = "eiendomsgrenser";

/// One point of a track, in GPX (latitude, longitude) axis order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One track segment: the exterior ring of one polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackSegment {
    pub points: Vec<TrackPoint>,
}

/// One track per polygon. Every track carries exactly one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub segments: Vec<TrackSegment>,
}

/// Track-based view of the aggregate collection, ready for GPX
/// serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GpxExport {
    pub tracks: Vec<Track>,
}

impl GpxExport {
    /// Build tracks from every polygonal feature, in input order.
    ///
    /// A polygon contributes one track from its exterior ring, a
    /// multipolygon one track per constituent polygon. Interior rings are
    /// dropped: the track export traces the outer boundary only. Features
    /// with any other geometry are skipped, not rejected, so mixed
    /// collections still export. Coordinates are carried over exactly, no
    /// resampling or reprojection.
    pub fn from_features(features: &FeatureCollection) -> Self {
        let mut tracks = Vec::new();
        for feature in &features.features {
            let Some(geometry) = &feature.geometry else {
                continue;
            };
            match &geometry.value {
                Value::Polygon(rings) => {
                    if let Some(track) = track_from_rings(rings) {
                        tracks.push(track);
                    }
                }
                Value::MultiPolygon(polygons) => {
                    for rings in polygons {
                        if let Some(track) = track_from_rings(rings) {
                            tracks.push(track);
                        }
                    }
                }
                // Points, lines and collections have no parcel boundary to
                // trace.
                _ => {}
            }
        }
        GpxExport { tracks }
    }

    /// Serialize as a GPX 1.1 document.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut gpx = BytesStart::new("gpx");
        gpx.push_attribute(("version", "1.1"));
        gpx.push_attribute(("creator", GPX_CREATOR));
        gpx.push_attribute(("xmlns", GPX_NS));
        writer.write_event(Event::Start(gpx))?;

        for track in &self.tracks {
            writer.write_event(Event::Start(BytesStart::new("trk")))?;
            for segment in &track.segments {
                writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
                for point in &segment.points {
                    let mut trkpt = BytesStart::new("trkpt");
                    trkpt.push_attribute(("lat", point.lat.to_string().as_str()));
                    trkpt.push_attribute(("lon", point.lon.to_string().as_str()));
                    writer.write_event(Event::Empty(trkpt))?;
                }
                writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("trk")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("gpx")))?;
        Ok(writer.into_inner())
    }
}

/// Exterior ring (the first ring) as one single-segment track. GeoJSON
/// positions are (lon, lat) and swap to (lat, lon) here.
fn track_from_rings(rings: &[Vec<Vec<f64>>]) -> Option<Track> {
    let exterior = rings.first()?;
    let points = exterior
        .iter()
        .filter_map(|position| match position.as_slice() {
            [lon, lat, ..] => Some(TrackPoint {
                lat: *lat,
                lon: *lon,
            }),
            _ => None,
        })
        .collect();
    Some(Track {
        segments: vec![TrackSegment { points }],
    })
}

#[cfg(test)]
mod tests {
    use geojson::{Feature, Geometry};

    use super::*;

    fn feature(value: Value) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(value)),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn square() -> Vec<Vec<f64>> {
        vec![
            vec![5.0, 60.0],
            vec![5.1, 60.0],
            vec![5.1, 60.1],
            vec![5.0, 60.0],
        ]
    }

    #[test]
    fn single_polygon_gives_one_track_with_one_segment() {
        let fc = collection(vec![feature(Value::Polygon(vec![square()]))]);
        let gpx = GpxExport::from_features(&fc);

        assert_eq!(gpx.tracks.len(), 1);
        assert_eq!(gpx.tracks[0].segments.len(), 1);
        let points = &gpx.tracks[0].segments[0].points;
        assert_eq!(points.len(), 4);
        // Axis order swapped from (lon, lat) to (lat, lon).
        assert_eq!(points[1], TrackPoint { lat: 60.0, lon: 5.1 });
    }

    #[test]
    fn multipolygon_gives_one_track_per_constituent_polygon() {
        let hole = vec![
            vec![5.02, 60.02],
            vec![5.04, 60.02],
            vec![5.04, 60.04],
            vec![5.02, 60.02],
        ];
        let shifted: Vec<Vec<f64>> = square()
            .into_iter()
            .map(|p| vec![p[0] + 1.0, p[1]])
            .collect();
        let fc = collection(vec![feature(Value::MultiPolygon(vec![
            vec![square(), hole],
            vec![shifted],
        ]))]);
        let gpx = GpxExport::from_features(&fc);

        assert_eq!(gpx.tracks.len(), 2);
        // The hole never shows up; each track is the exterior ring only.
        assert_eq!(gpx.tracks[0].segments[0].points.len(), 4);
        assert_eq!(gpx.tracks[1].segments[0].points[0].lon, 6.0);
    }

    #[test]
    fn non_polygonal_geometry_is_skipped_without_error() {
        let fc = collection(vec![
            feature(Value::Point(vec![5.0, 60.0])),
            feature(Value::Polygon(vec![square()])),
            feature(Value::LineString(vec![vec![5.0, 60.0], vec![5.1, 60.1]])),
        ]);
        let gpx = GpxExport::from_features(&fc);
        assert_eq!(gpx.tracks.len(), 1);
    }

    #[test]
    fn empty_collection_serializes_to_a_bare_document() {
        let gpx = GpxExport::from_features(&collection(Vec::new()));
        let xml = String::from_utf8(gpx.to_xml().unwrap()).unwrap();
        assert!(xml.contains("<gpx"));
        assert!(!xml.contains("<trk>"));
    }

    #[test]
    fn serialization_writes_points_as_trkpt_attributes() {
        let fc = collection(vec![feature(Value::Polygon(vec![square()]))]);
        let xml = String::from_utf8(GpxExport::from_features(&fc).to_xml().unwrap()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(r#"<gpx version="1.1" creator="eiendomsgrenser""#));
        assert!(xml.contains(r#"<trkpt lat="60" lon="5"/>"#));
        assert_eq!(xml.matches("<trkseg>").count(), 1);
    }

    #[test]
    fn conversion_is_deterministic() {
        let fc = collection(vec![feature(Value::Polygon(vec![square()]))]);
        let first = GpxExport::from_features(&fc).to_xml().unwrap();
        let second = GpxExport::from_features(&fc).to_xml().unwrap();
        assert_eq!(first, second);
    }
}
