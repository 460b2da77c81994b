//! Popup contents of the map markers.

use leptos::{html::Div, *};

use roofmap_core::view::labels;
use roofmap_entities::{anchor::AnchorPoint, record::LocationRecord};

use super::CategoryBadge;
use crate::open_in_new_tab;

// Leaflet stops click propagation inside popups,
// so the handlers must not be delegated.

pub fn record_popup(record: &LocationRecord) -> HtmlElement<Div> {
    let link = record.external_map_link().into_owned();
    view! {
      <div class="space-y-1 text-sm">
        <div class="font-semibold leading-snug">{record.name.clone()}</div>
        <div class="text-xs text-slate-600">{record.address.clone()}</div>
        <CategoryBadge category = record.category />
        <button
          type="button"
          class="mt-1 text-xs font-medium text-blue-600 hover:text-blue-700 underline"
          on:click:undelegated = move |_| open_in_new_tab(&link)
        >
          {labels::OPEN_MAP_LINK}
        </button>
      </div>
    }
}

pub fn anchor_popup(anchor: &AnchorPoint) -> HtmlElement<Div> {
    let link = anchor.external_map_link();
    view! {
      <div class="space-y-1 text-sm">
        <div class="font-semibold leading-snug">{anchor.name.clone()}</div>
        <div class="text-xs text-slate-600">{anchor.address.clone()}</div>
        <button
          type="button"
          class="mt-1 text-xs font-medium text-blue-600 hover:text-blue-700 underline"
          on:click:undelegated = move |_| open_in_new_tab(&link)
        >
          {labels::OPEN_MAP_LINK}
        </button>
      </div>
    }
}
