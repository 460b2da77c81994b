use crate::{geo::MapPoint, links};

/// The fixed location of the organization itself.
///
/// It is always shown on the map but never filtered or selected.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub name: String,
    pub address: String,
    pub pos: MapPoint,
}

impl AnchorPoint {
    pub fn external_map_link(&self) -> String {
        links::position_link(self.pos)
    }
}
