use leptos::*;
use leptos_leaflet::{MapContainer, Position, TileLayer};

use roofmap_core::settings::MapSettings;
use roofmap_entities::record::LocationRecord;

use crate::surface::LeafletSurface;

#[component]
pub fn RoofMap(
    settings: MapSettings,
    map: RwSignal<Option<leaflet::Map>>,
    surface: LeafletSurface,
    records: Memo<Vec<LocationRecord>>,
    on_select: Callback<LocationRecord>,
    on_anchor_click: Callback<()>,
) -> impl IntoView {
    let MapSettings {
        center,
        zoom,
        tile_layer_url,
        attribution,
        anchor,
        ..
    } = settings;

    Effect::new(move |_| {
        if map.with(Option::is_some) {
            surface.show_anchor(&anchor, on_anchor_click);
        }
    });

    Effect::new(move |_| {
        let records = records.get();
        if map.with(Option::is_some) {
            surface.show_records(&records, on_select);
        }
    });

    let center = Position::new(center.lat(), center.lng());

    view! {
      <MapContainer
        class = "h-full w-full"
        center
        zoom
        map = map.write_only()
        set_view = true
      >
        <TileLayer url = tile_layer_url attribution />
      </MapContainer>
    }
}
