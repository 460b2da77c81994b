//! Links into an external map service.

use crate::geo::MapPoint;

pub const MAP_SERVICE_URL: &str = "https://www.google.com/maps";

/// Zoom level of links that point to a location record.
pub const RECORD_LINK_ZOOM: u8 = 18;

/// Zoom level of the link that points to the anchor point.
pub const ANCHOR_LINK_ZOOM: u8 = 17;

/// Marks that `encodeURIComponent` leaves as they are
/// but [`urlencoding::encode`] escapes.
const UNRESERVED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Escapes `text` exactly like `encodeURIComponent` in the browser.
pub fn encode_uri_component(text: &str) -> String {
    UNRESERVED_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}

// Coordinates are printed in plain decimal notation, even for magnitudes
// below 1e-6 where JavaScript would switch to exponent notation.

/// Link that searches for `address` and centers the map at `pos`.
pub fn address_link(address: &str, pos: MapPoint) -> String {
    let query = encode_uri_component(address);
    format!(
        "{MAP_SERVICE_URL}?q={query}&ll={},{}&z={RECORD_LINK_ZOOM}",
        pos.lat(),
        pos.lng()
    )
}

/// Link that only points to a position.
pub fn position_link(pos: MapPoint) -> String {
    format!(
        "{MAP_SERVICE_URL}?q={},{}&z={ANCHOR_LINK_ZOOM}",
        pos.lat(),
        pos.lng()
    )
}
