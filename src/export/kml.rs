use geojson::{Feature, FeatureCollection, Value};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;

const KML_NS: &str = "http://www.opengis.net/kml/2.2";
const DOCUMENT_NAME: &str = "Eiendom";
const DOCUMENT_DESCRIPTION: &str = "Eiendomsgrenser";
const PLACEMARK_NAME: &str = "Eiendom";

/// One placemark: a constant label plus one feature's geometry, verbatim.
/// Labels are deliberately not derived from feature properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: &'static str,
    pub geometry: Option<Value>,
}

/// Placemark view of the aggregate collection, ready for KML serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KmlExport {
    pub placemarks: Vec<Placemark>,
}

impl KmlExport {
    /// One placemark per feature, in input order. Geometry is carried over
    /// untouched: ring structure, interior rings and (lon,lat) coordinate
    /// order all survive, unlike the track export.
    pub fn from_features(features: &FeatureCollection) -> Self {
        let placemarks = features.features.iter().map(placemark_for).collect();
        KmlExport { placemarks }
    }

    /// Serialize as a KML 2.2 document with one Placemark per feature.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut kml = BytesStart::new("kml");
        kml.push_attribute(("xmlns", KML_NS));
        writer.write_event(Event::Start(kml))?;
        writer.write_event(Event::Start(BytesStart::new("Document")))?;
        write_text_element(&mut writer, "name", DOCUMENT_NAME)?;
        write_text_element(&mut writer, "description", DOCUMENT_DESCRIPTION)?;

        for placemark in &self.placemarks {
            writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
            write_text_element(&mut writer, "name", placemark.name)?;
            write_text_element(&mut writer, "description", "")?;
            if let Some(geometry) = &placemark.geometry {
                write_geometry(&mut writer, geometry)?;
            }
            writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("Document")))?;
        writer.write_event(Event::End(BytesEnd::new("kml")))?;
        Ok(writer.into_inner())
    }
}

fn placemark_for(feature: &Feature) -> Placemark {
    Placemark {
        name: PLACEMARK_NAME,
        geometry: feature.geometry.as_ref().map(|g| g.value.clone()),
    }
}

fn write_geometry(writer: &mut Writer<Vec<u8>>, geometry: &Value) -> Result<()> {
    match geometry {
        Value::Polygon(rings) => write_polygon(writer, rings),
        Value::MultiPolygon(polygons) => {
            writer.write_event(Event::Start(BytesStart::new("MultiGeometry")))?;
            for rings in polygons {
                write_polygon(writer, rings)?;
            }
            writer.write_event(Event::End(BytesEnd::new("MultiGeometry")))?;
            Ok(())
        }
        // The boundary services only hand out polygonal geometry; anything
        // else yields a placemark without geometry rather than an invented
        // shape.
        _ => Ok(()),
    }
}

/// First ring is the exterior, later rings are holes. Coordinates stay in
/// KML's `lon,lat` tuple order, exactly as fetched.
fn write_polygon(writer: &mut Writer<Vec<u8>>, rings: &[Vec<Vec<f64>>]) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Polygon")))?;
    for (index, ring) in rings.iter().enumerate() {
        let boundary = if index == 0 {
            "outerBoundaryIs"
        } else {
            "innerBoundaryIs"
        };
        writer.write_event(Event::Start(BytesStart::new(boundary)))?;
        writer.write_event(Event::Start(BytesStart::new("LinearRing")))?;
        let coordinates = ring
            .iter()
            .filter_map(|position| match position.as_slice() {
                [lon, lat, ..] => Some(format!("{lon},{lat}")),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        write_text_element(writer, "coordinates", &coordinates)?;
        writer.write_event(Event::End(BytesEnd::new("LinearRing")))?;
        writer.write_event(Event::End(BytesEnd::new(boundary)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Polygon")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
