use std::borrow::Cow;

use crate::{category::Category, geo::MapPoint, id::Id, links};

/// A single roof installation of the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub pos: MapPoint,
    pub category: Category,
    /// Empty if there is nothing to tell.
    pub description: String,
    /// Paths of image assets in display order.
    pub images: Vec<String>,
    pub map_link: Option<String>,
}

impl LocationRecord {
    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }

    pub fn images(&self) -> Option<&[String]> {
        Some(self.images.as_slice()).filter(|i| !i.is_empty())
    }

    /// The explicit map link or one derived from address and position.
    pub fn external_map_link(&self) -> Cow<'_, str> {
        match &self.map_link {
            Some(link) => Cow::Borrowed(link.as_str()),
            None => Cow::Owned(links::address_link(&self.address, self.pos)),
        }
    }
}
