use roofmap_entities::id::Id;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Record #{0} has no id")]
    MissingId(usize),
    #[error("Duplicate record id: {0}")]
    DuplicateId(Id),
}
