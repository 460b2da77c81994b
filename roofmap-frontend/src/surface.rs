//! Leaflet backed implementations of the map gateways.

use std::{collections::HashMap, time::Duration};

use leaflet::{Icon, IconOptions, LatLng, Map, Marker, MarkerOptions, Point, Popup, PopupOptions};
use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use wasm_bindgen::{closure::Closure, JsValue};

use roofmap_core::gateways::{MapSurface, Scheduler, Task, TaskHandle};
use roofmap_entities::{anchor::AnchorPoint, geo::MapPoint, id::Id, record::LocationRecord};

use crate::components::popup::{anchor_popup, record_popup};

const RECORD_ICON_URL: &str = "/roof-icon3.png";
const ANCHOR_ICON_URL: &str = "/company-marker.png";

struct MarkerHandle {
    marker: Marker,
    _on_click: Closure<dyn Fn()>,
}

/// Owns the Leaflet map and one marker per visible record,
/// looked up by record ID.
#[derive(Clone, Copy)]
pub struct LeafletSurface {
    map: RwSignal<Option<Map>>,
    markers: StoredValue<HashMap<Id, MarkerHandle>>,
    anchor: StoredValue<Option<MarkerHandle>>,
}

impl LeafletSurface {
    pub fn new(map: RwSignal<Option<Map>>) -> Self {
        Self {
            map,
            markers: store_value(HashMap::new()),
            anchor: store_value(None),
        }
    }

    /// Replaces all record markers.
    pub fn show_records(&self, records: &[LocationRecord], on_select: Callback<LocationRecord>) {
        let Some(map) = self.map.get_untracked() else {
            log::warn!("Unable to show markers: map is not ready");
            return;
        };
        let icon = record_icon();
        let handles = records
            .iter()
            .map(|record| {
                let popup = popup_with_content(&record_popup(record));
                let clicked = record.clone();
                let handle = add_marker(&map, record.pos, &icon, &popup, move || {
                    on_select.call(clicked.clone());
                });
                (record.id.clone(), handle)
            })
            .collect::<HashMap<_, _>>();
        let replaced = self.markers.try_update_value(|markers| {
            for (_, old) in markers.drain() {
                old.marker.remove();
            }
            *markers = handles;
        });
        if replaced.is_none() {
            log::warn!("Unable to replace markers: map surface has been disposed");
            return;
        }
        log::debug!("Show {} record markers", records.len());
    }

    /// Adds the anchor marker unless it is already on the map.
    pub fn show_anchor(&self, anchor: &AnchorPoint, on_click: Callback<()>) {
        let Some(map) = self.map.get_untracked() else {
            log::warn!("Unable to show anchor: map is not ready");
            return;
        };
        if self.anchor.try_with_value(Option::is_some).unwrap_or(true) {
            return;
        }
        let popup = popup_with_content(&anchor_popup(anchor));
        let handle = add_marker(&map, anchor.pos, &anchor_icon(), &popup, move || {
            on_click.call(());
        });
        self.anchor.set_value(Some(handle));
    }

    fn with_marker(&self, id: &Id, f: impl FnOnce(&Marker)) {
        let found = self
            .markers
            .try_with_value(|markers| markers.get(id).map(|handle| f(&handle.marker)));
        if !matches!(found, Some(Some(()))) {
            log::debug!("No marker for record {id}");
        }
    }
}

impl MapSurface for LeafletSurface {
    fn pan_to(&self, pos: MapPoint) {
        let Some(map) = self.map.get_untracked() else {
            log::warn!("Unable to pan: map is not ready");
            return;
        };
        map.pan_to(&lat_lng(pos));
    }

    fn open_popup(&self, id: &Id) {
        self.with_marker(id, |marker| {
            marker.open_popup();
        });
    }

    fn close_all_popups(&self) {
        self.markers.try_with_value(|markers| {
            for handle in markers.values() {
                handle.marker.close_popup();
            }
        });
        self.anchor.try_with_value(|anchor| {
            if let Some(handle) = anchor {
                handle.marker.close_popup();
            }
        });
    }
}

/// Runs tasks with `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

pub struct Timeout(TimeoutHandle);

impl TaskHandle for Timeout {
    fn cancel(self) {
        self.0.clear();
    }
}

impl Scheduler for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle> {
        set_timeout_with_handle(task, delay)
            .map(Timeout)
            .map_err(|err| log::warn!("Unable to set timeout: {err:?}"))
            .ok()
    }
}

fn lat_lng(pos: MapPoint) -> LatLng {
    LatLng::new(pos.lat(), pos.lng())
}

fn record_icon() -> Icon {
    let options = IconOptions::new();
    options.set_icon_url(RECORD_ICON_URL.to_owned());
    options.set_icon_size(Point::new(25.0, 41.0));
    options.set_icon_anchor(Point::new(12.0, 41.0));
    options.set_popup_anchor(Point::new(1.0, -34.0));
    Icon::new(&options)
}

fn anchor_icon() -> Icon {
    let options = IconOptions::new();
    options.set_icon_url(ANCHOR_ICON_URL.to_owned());
    options.set_icon_size(Point::new(45.0, 45.0));
    options.set_icon_anchor(Point::new(22.0, 45.0));
    Icon::new(&options)
}

fn popup_with_content(content: &web_sys::HtmlElement) -> Popup {
    let options = PopupOptions::new();
    options.set_auto_pan(false);
    let popup = Popup::new(&options, None);
    popup.set_content(&JsValue::from(content.clone()));
    popup
}

fn add_marker(
    map: &Map,
    pos: MapPoint,
    icon: &Icon,
    popup: &Popup,
    on_click: impl Fn() + 'static,
) -> MarkerHandle {
    let options = MarkerOptions::new();
    options.set_icon(icon.clone());
    let marker = Marker::new_with_options(&lat_lng(pos), &options);
    marker.bind_popup(popup);
    marker.add_to(map);
    let on_click = Closure::<dyn Fn()>::new(on_click);
    marker.on("click", on_click.as_ref());
    MarkerHandle {
        marker,
        _on_click: on_click,
    }
}
