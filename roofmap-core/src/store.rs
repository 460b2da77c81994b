use std::collections::HashSet;

use roofmap_entities::{category::Category, record::LocationRecord};

use crate::{filter::filter_records, Error, Result};

/// The immutable catalogue of all location records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<LocationRecord>,
}

impl RecordStore {
    /// Fails on missing or duplicate ids.
    pub fn try_new(records: Vec<LocationRecord>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            if !r.id.is_valid() {
                return Err(Error::MissingId(i));
            }
            if !ids.insert(&r.id) {
                return Err(Error::DuplicateId(r.id.clone()));
            }
        }
        log::debug!("Loaded {} location records", records.len());
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    pub fn filtered(&self, category: Option<Category>) -> Vec<&LocationRecord> {
        filter_records(&self.records, category)
    }

    /// Number of records per category, including empty ones.
    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        Category::all()
            .map(|c| (c, self.records.iter().filter(|r| r.category == c).count()))
            .collect()
    }
}
