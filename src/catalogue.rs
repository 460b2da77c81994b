use anyhow::{Context, Result};
use roofmap_core::store::RecordStore;
use std::{fs, path::Path};

pub fn load_store(file: &Path) -> Result<RecordStore> {
    log::debug!("Load catalogue from {}", file.display());
    let json = fs::read_to_string(file)
        .with_context(|| format!("Unable to read catalogue {}", file.display()))?;
    parse_store(&json).with_context(|| format!("Invalid catalogue {}", file.display()))
}

pub fn parse_store(json: &str) -> Result<RecordStore> {
    let records = roofmap_boundary::records_from_json(json)?;
    let store = RecordStore::try_new(records)?;
    Ok(store)
}
