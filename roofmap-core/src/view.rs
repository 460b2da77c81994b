//! Presentation models of the list panel and the detail panel.

use std::borrow::Cow;

use roofmap_entities::{category::Category, record::LocationRecord};

pub mod labels {
    pub const PANEL_TITLE: &str = "Mapa realizacji dachów";
    pub const PANEL_HINT: &str = "Wybierz rodzaj dachówki, aby zobaczyć realizacje w terenie.";
    pub const CHOOSE_CATEGORY_OPTION: &str = "Wybierz dachówkę";
    pub const CATEGORY: &str = "Dachówka:";
    pub const DETAILS: &str = "Szczegóły";
    pub const OPEN_MAP_LINK: &str = "Otwórz w Google Maps";
    pub const OPEN_MAP_LINK_SHORT: &str = "Google Maps";
}

/// Why the list is empty.
///
/// The two cases must never share a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    ChooseCategory,
    NoRecords,
}

impl EmptyState {
    pub fn of(category: Option<Category>, filtered_count: usize) -> Option<Self> {
        match (category, filtered_count) {
            (None, _) => Some(Self::ChooseCategory),
            (Some(_), 0) => Some(Self::NoRecords),
            (Some(_), _) => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::ChooseCategory => {
                "Wybierz rodzaj dachówki z listy powyżej, aby zobaczyć dostępne realizacje na mapie i liście po prawej stronie."
            }
            Self::NoRecords => {
                "Brak realizacji dla wybranej dachówki. Spróbuj wybrać inny typ dachówki."
            }
        }
    }
}

pub fn count_label(count: usize) -> String {
    format!("{count} realizacji")
}

/// Everything the detail panel shows about the active record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDetails<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub category: Category,
    pub description: Option<&'a str>,
    pub images: Option<&'a [String]>,
    pub map_link: Cow<'a, str>,
}

impl<'a> From<&'a LocationRecord> for RecordDetails<'a> {
    fn from(from: &'a LocationRecord) -> Self {
        Self {
            name: &from.name,
            address: &from.address,
            category: from.category,
            description: from.description(),
            images: from.images(),
            map_link: from.external_map_link(),
        }
    }
}
