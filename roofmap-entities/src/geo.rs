use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A WGS84 position in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Creates a point without checking the coordinate ranges.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&self.lat)
            && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&self.lng)
    }
}

impl From<MapPoint> for (f64, f64) {
    fn from(from: MapPoint) -> Self {
        (from.lat, from.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
