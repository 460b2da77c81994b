use roofmap_entities::{geo::MapPoint, id::Id};

/// Imperative commands against the rendered map.
///
/// Marker handles are owned by the implementation and
/// looked up by the record id.
pub trait MapSurface {
    /// Moves the camera to `pos` with an animated transition.
    fn pan_to(&self, pos: MapPoint);
    /// Opens the popup of the marker that belongs to the record `id`.
    ///
    /// Unknown ids are ignored.
    fn open_popup(&self, id: &Id);
    fn close_all_popups(&self);
}
