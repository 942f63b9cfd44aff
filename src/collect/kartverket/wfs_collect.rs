use geojson::{FeatureCollection, GeoJson};
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::collect::global_variables::{WFS_TYPENAME, WFS_URL};
use crate::collect::ParcelSource;
use crate::error::{Error, Result};
use crate::geometric::parcel::MatrikkelId;

/// Client for Kartverket's WFS eiendom service.
///
/// Issues WFS 2.0.0 GetFeature requests filtered down to one matrikkel unit
/// and hands back the parsed feature collection. No retry and no timeout is
/// applied here; callers own cancellation at this boundary.
pub struct WfsCollect {
    client: Client,
    url: String,
}

impl WfsCollect {
    pub fn new() -> Self {
        Self::with_url(WFS_URL)
    }

    /// Point the collector at a different endpoint (mirrors, test servers).
    pub fn with_url(url: impl Into<String>) -> Self {
        WfsCollect {
            client: Client::new(),
            url: url.into(),
        }
    }

    fn cql_filter(id: &MatrikkelId) -> String {
        format!(
            "kommunenummer='{}' AND gardsnummer='{}' AND bruksnummer='{}'",
            id.kommune, id.gnr, id.bnr
        )
    }

    /// A usable answer has a success status and a body that at least looks
    /// like a JSON document. Anything else is an upstream failure.
    fn validate_response(status: StatusCode, body: &str) -> Result<()> {
        if !status.is_success() || !body.trim_start().starts_with('{') {
            return Err(Error::Upstream {
                service: "Kartverket WFS",
                reason: format!("status {status} – sjekk gårds-/bruksnummer"),
            });
        }
        Ok(())
    }

    fn parse_collection(body: &str) -> Result<FeatureCollection> {
        let geojson: GeoJson = body.parse().map_err(|e: geojson::Error| Error::Upstream {
            service: "Kartverket WFS",
            reason: e.to_string(),
        })?;

        match geojson {
            GeoJson::FeatureCollection(fc) => Ok(fc),
            _ => Err(Error::Upstream {
                service: "Kartverket WFS",
                reason: "svaret var ikke en FeatureCollection".to_string(),
            }),
        }
    }
}

impl Default for WfsCollect {
    fn default() -> Self {
        Self::new()
    }
}

impl ParcelSource for WfsCollect {
    fn fetch_parcel(&self, id: &MatrikkelId) -> Result<FeatureCollection> {
        let cql = Self::cql_filter(id);
        debug!("WFS GetFeature {} ({})", WFS_TYPENAME, cql);

        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("service", "WFS"),
                ("version", "2.0.0"),
                ("request", "GetFeature"),
                ("typeName", WFS_TYPENAME),
                ("outputFormat", "application/json"),
                ("CQL_FILTER", cql.as_str()),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        Self::validate_response(status, &body)?;
        Self::parse_collection(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cql_filter_names_all_three_numbers() {
        let id = MatrikkelId::new("1103", "58", "444");
        assert_eq!(
            WfsCollect::cql_filter(&id),
            "kommunenummer='1103' AND gardsnummer='58' AND bruksnummer='444'"
        );
    }

    #[test]
    fn failure_status_is_an_upstream_error() {
        let err =
            WfsCollect::validate_response(StatusCode::INTERNAL_SERVER_ERROR, "{}").unwrap_err();
        assert!(matches!(err, Error::Upstream { service: "Kartverket WFS", .. }));
    }

    #[test]
    fn non_json_body_is_an_upstream_error() {
        let err = WfsCollect::validate_response(StatusCode::OK, "<ows:ExceptionReport/>")
            .unwrap_err();
        assert!(matches!(err, Error::Upstream { .. }));
    }

    #[test]
    fn json_looking_body_with_success_status_passes_validation() {
        let body = "  {\"type\": \"FeatureCollection\", \"features\": []}";
        assert!(WfsCollect::validate_response(StatusCode::OK, body).is_ok());
    }

    #[test]
    fn json_body_that_is_not_a_feature_collection_is_an_upstream_error() {
        let err =
            WfsCollect::parse_collection(r#"{"type":"Point","coordinates":[5.0,60.0]}"#)
                .unwrap_err();
        assert!(matches!(err, Error::Upstream { .. }));
    }

    #[test]
    fn feature_collection_body_parses() {
        let fc = WfsCollect::parse_collection(
            r#"{"type":"FeatureCollection","features":[]}"#,
        )
        .unwrap();
        assert!(fc.features.is_empty());
    }
}
