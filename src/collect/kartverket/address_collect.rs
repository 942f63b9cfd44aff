use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::collect::global_variables::{ADDRESS_HITS_PER_PAGE, ADDRESS_URL};
use crate::collect::AddressSource;
use crate::error::{Error, Result};
use crate::geometric::parcel::MatrikkelId;

/// Client for Geonorge's free-text address search.
///
/// Translates an address string into candidate matrikkel units. Candidates
/// keep the upstream ranking; no local re-ranking happens here.
pub struct AddressCollect {
    client: Client,
    url: String,
}

impl AddressCollect {
    pub fn new() -> Self {
        Self::with_url(ADDRESS_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        AddressCollect {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// A usable answer has a success status and a body that at least looks
    /// like a JSON document. Anything else is an upstream failure.
    fn validate_response(status: StatusCode, body: &str) -> Result<()> {
        if !status.is_success() || !body.trim_start().starts_with('{') {
            return Err(Error::Upstream {
                service: "adresseoppslag",
                reason: format!("status {status} – sjekk stavemåte"),
            });
        }
        Ok(())
    }
}

impl Default for AddressCollect {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    adresser: Vec<AddressHit>,
}

#[derive(Debug, Deserialize)]
struct AddressHit {
    adressekode: AddressCode,
    matrikkelnummer: Matrikkelnummer,
}

#[derive(Debug, Deserialize)]
struct AddressCode {
    kommunenummer: NumberOrString,
}

#[derive(Debug, Deserialize)]
struct Matrikkelnummer {
    gardsnummer: NumberOrString,
    bruksnummer: NumberOrString,
}

/// Number fields in the address payload come back as JSON numbers or strings
/// depending on the dataset, so both spellings are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    fn into_string(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s,
        }
    }
}

impl From<AddressHit> for MatrikkelId {
    fn from(hit: AddressHit) -> Self {
        MatrikkelId {
            kommune: hit.adressekode.kommunenummer.into_string(),
            gnr: hit.matrikkelnummer.gardsnummer.into_string(),
            bnr: hit.matrikkelnummer.bruksnummer.into_string(),
        }
    }
}

impl AddressSource for AddressCollect {
    fn search(&self, query: &str) -> Result<Vec<MatrikkelId>> {
        debug!("adressesøk: {query}");
        let per_page = ADDRESS_HITS_PER_PAGE.to_string();

        let response = self
            .client
            .get(&self.url)
            .query(&[("sok", query), ("treffPerSide", per_page.as_str())])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        AddressCollect::validate_response(status, &body)?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| Error::Upstream {
                service: "adresseoppslag",
                reason: e.to_string(),
            })?;

        Ok(parsed.adresser.into_iter().map(MatrikkelId::from).collect())
    }
}
