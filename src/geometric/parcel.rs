use geojson::FeatureCollection;
use log::debug;

use crate::collect::{AddressSource, ParcelSource};
use crate::error::{Error, Result};

/// One cadastral unit: kommunenummer, gårdsnummer, bruksnummer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrikkelId {
    pub kommune: String,
    pub gnr: String,
    pub bnr: String,
}

impl MatrikkelId {
    pub fn new(
        kommune: impl Into<String>,
        gnr: impl Into<String>,
        bnr: impl Into<String>,
    ) -> Self {
        MatrikkelId {
            kommune: kommune.into(),
            gnr: gnr.into(),
            bnr: bnr.into(),
        }
    }
}

/// What the caller wants resolved: a matrikkel unit directly, or a free-text
/// address that has to be looked up first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Direct(MatrikkelId),
    Address(String),
}

/// Resolves identifiers to boundary features via the lookup collaborators.
///
/// Both collaborators are taken as trait implementations so the resolver can
/// run against the real Kartverket/Geonorge clients or against stubs.
pub struct BoundaryResolver<P, A> {
    pub(crate) parcels: P,
    pub(crate) addresses: A,
}

impl<P: ParcelSource, A: AddressSource> BoundaryResolver<P, A> {
    pub fn new(parcels: P, addresses: A) -> Self {
        BoundaryResolver { parcels, addresses }
    }

    /// Resolve one identifier to its boundary features.
    ///
    /// Address resolution is two-phase: the address is translated to a
    /// matrikkel unit first, using only the top-ranked hit, then fetched like
    /// a direct identifier. Zero hits is [`Error::AddressNotFound`].
    pub fn resolve(&self, identifier: &Identifier) -> Result<FeatureCollection> {
        match identifier {
            Identifier::Direct(id) => self.parcels.fetch_parcel(id),
            Identifier::Address(query) => {
                let hits = self.addresses.search(query)?;
                let id = hits
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::AddressNotFound(query.clone()))?;
                debug!("adresse «{}» → {}/{}-{}", query, id.kommune, id.gnr, id.bnr);
                self.parcels.fetch_parcel(&id)
            }
        }
    }
}
