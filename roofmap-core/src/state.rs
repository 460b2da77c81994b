use roofmap_entities::{category::Category, record::LocationRecord};

/// The coarse state of the filter and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoCategory,
    CategoryWithoutSelection,
    CategoryWithSelection,
}

/// Active category and active record of the map view.
///
/// Invariant: if a record is active its category is the active category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    category: Option<Category>,
    record: Option<LocationRecord>,
}

impl SelectionState {
    pub const fn new() -> Self {
        Self {
            category: None,
            record: None,
        }
    }

    pub const fn active_category(&self) -> Option<Category> {
        self.category
    }

    pub const fn active_record(&self) -> Option<&LocationRecord> {
        self.record.as_ref()
    }

    pub fn is_active(&self, record: &LocationRecord) -> bool {
        self.record.as_ref().is_some_and(|r| r.id == record.id)
    }

    pub const fn phase(&self) -> Phase {
        match (self.category, &self.record) {
            (None, _) => Phase::NoCategory,
            (Some(_), None) => Phase::CategoryWithoutSelection,
            (Some(_), Some(_)) => Phase::CategoryWithSelection,
        }
    }

    /// Replaces the active category.
    ///
    /// An active record of another category is dropped.
    pub fn set_category(&mut self, category: Option<Category>) {
        log::debug!("Set category: {category:?}");
        self.category = category;
        if self
            .record
            .as_ref()
            .is_some_and(|r| Some(r.category) != category)
        {
            log::debug!("Clear selection of another category");
            self.record = None;
        }
    }

    /// Like [`SelectionState::set_category`] but for raw input values.
    ///
    /// Unknown names are treated as "no category".
    pub fn set_category_name(&mut self, name: &str) {
        self.set_category(Category::parse_lossy(name));
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.category == Some(category) {
            self.set_category(None);
        } else {
            self.set_category(Some(category));
        }
    }

    /// Selects `record` and switches to its category if necessary.
    pub fn select_record(&mut self, record: &LocationRecord) {
        if self.category != Some(record.category) {
            self.set_category(Some(record.category));
        }
        log::debug!("Select record {}", record.id);
        self.record = Some(record.clone());
    }

    pub fn clear_selection(&mut self) {
        self.record = None;
    }
}
