use std::time::Duration;

use roofmap_entities::{anchor::AnchorPoint, geo::MapPoint};

pub const DEFAULT_POPUP_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_ZOOM: f64 = 14.0;
pub const DEFAULT_TILE_LAYER_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_MAP_ATTRIBUTION: &str = "&copy; OpenStreetMap";

pub const DEFAULT_ANCHOR_NAME: &str = "VIRTUS LUBIN DACHY";
pub const DEFAULT_ANCHOR_ADDRESS: &str = "Przemysłowa 14D, Lubin";
pub const DEFAULT_ANCHOR_POS: MapPoint =
    MapPoint::from_lat_lng_deg(51.390_890_700_828_58, 16.188_621_627_703_82);

#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center: MapPoint,
    pub zoom: f64,
    /// Time between panning to a record and opening its popup.
    pub popup_delay: Duration,
    pub tile_layer_url: String,
    pub attribution: String,
    pub anchor: AnchorPoint,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: DEFAULT_ANCHOR_POS,
            zoom: DEFAULT_ZOOM,
            popup_delay: DEFAULT_POPUP_DELAY,
            tile_layer_url: DEFAULT_TILE_LAYER_URL.to_owned(),
            attribution: DEFAULT_MAP_ATTRIBUTION.to_owned(),
            anchor: AnchorPoint {
                name: DEFAULT_ANCHOR_NAME.to_owned(),
                address: DEFAULT_ANCHOR_ADDRESS.to_owned(),
                pos: DEFAULT_ANCHOR_POS,
            },
        }
    }
}
