use std::io::Read;

use geojson::FeatureCollection;
use log::{debug, info};
use serde::Deserialize;

use crate::collect::{AddressSource, ParcelSource};
use crate::error::Result;
use crate::geometric::parcel::{BoundaryResolver, MatrikkelId};

/// One row of a batch file. Column order is free; headers must be `kommune`,
/// `gnr`, `bnr`. Cells are taken as strings whatever they hold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchRow {
    pub kommune: String,
    pub gnr: String,
    pub bnr: String,
}

impl From<BatchRow> for MatrikkelId {
    fn from(row: BatchRow) -> Self {
        MatrikkelId {
            kommune: row.kommune,
            gnr: row.gnr,
            bnr: row.bnr,
        }
    }
}

/// Read batch rows from CSV.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<BatchRow>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: BatchRow = record?;
        rows.push(row);
    }
    info!("batch: {} rader lest", rows.len());
    Ok(rows)
}

impl<P: ParcelSource, A: AddressSource> BoundaryResolver<P, A> {
    /// Resolve a whole batch into one aggregate collection.
    ///
    /// Features are appended in row order. The first row that fails aborts
    /// the batch: later rows are never fetched and no partial collection is
    /// handed out.
    pub fn resolve_batch<I>(&self, rows: I) -> Result<FeatureCollection>
    where
        I: IntoIterator<Item = BatchRow>,
    {
        let mut aggregate = FeatureCollection {
            bbox: None,
            features: Vec::new(),
            foreign_members: None,
        };
        for row in rows {
            let id = MatrikkelId::from(row);
            debug!("henter {}/{}-{}", id.kommune, id.gnr, id.bnr);
            let fetched = self.parcels.fetch_parcel(&id)?;
            aggregate.features.extend(fetched.features);
        }
        Ok(aggregate)
    }
}
