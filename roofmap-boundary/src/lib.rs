use serde::{Deserialize, Serialize};
use thiserror::Error;

mod conv;

/// A catalogue entry as it is authored in the JSON catalogue file.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id              : String,
    pub name            : String,
    pub address         : String,
    pub lat             : f64,
    pub lng             : f64,
    pub tile_type       : String,
    #[serde(default)]
    pub description     : String,
    #[serde(default)]
    pub images          : Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_url : Option<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed catalogue: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid record {id:?}: {source}")]
    Record {
        id: String,
        #[source]
        source: RecordError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Category(#[from] roofmap_entities::category::InvalidCategory),
    #[error("Invalid position ({lat}, {lng})")]
    Position { lat: f64, lng: f64 },
}

/// Parses a JSON catalogue into entities, keeping the authored order.
pub fn records_from_json(
    json: &str,
) -> Result<Vec<roofmap_entities::record::LocationRecord>, Error> {
    let records: Vec<LocationRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|r| {
            let id = r.id.clone();
            roofmap_entities::record::LocationRecord::try_from(r)
                .map_err(|source| Error::Record { id, source })
        })
        .collect()
}
