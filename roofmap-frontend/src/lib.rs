use leptos::*;

use roofmap_core::{
    controller::SelectionController, focus::MapFocus, settings::MapSettings,
    state::SelectionState, store::RecordStore,
};
use roofmap_entities::{category::Category, record::LocationRecord};

mod components;
use components::*;

mod surface;
use surface::{BrowserTimer, LeafletSurface};

const CATALOGUE: &str = include_str!("../../data/roofs.json");

type Controller = SelectionController<LeafletSurface, BrowserTimer>;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let settings = MapSettings::default();
    let anchor = settings.anchor.clone();
    let store = store_value(load_store());

    // -- map -- //

    let map = RwSignal::new(None::<leaflet::Map>);
    let surface = LeafletSurface::new(map);

    // -- signals -- //

    let controller = store_value(SelectionController::new(MapFocus::new(
        surface,
        BrowserTimer,
        settings.popup_delay,
    )));
    let selection = RwSignal::new(SelectionState::new());
    let category = Signal::derive(move || selection.with(SelectionState::active_category));
    let records = Memo::new(move |_| {
        let category = category.get();
        store.with_value(|store| {
            store
                .filtered(category)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let record_count = Signal::derive(move || records.with(Vec::len));

    // -- callbacks -- //

    let on_set_category = Callback::new(move |name: String| {
        dispatch(controller, selection, |c| c.set_category_name(&name));
    });
    let on_toggle_category = Callback::new(move |category: Category| {
        dispatch(controller, selection, |c| c.toggle_category(category));
    });
    let on_select = Callback::new(move |record: LocationRecord| {
        dispatch(controller, selection, |c| c.select_record(&record));
    });
    let on_anchor_click = Callback::new(move |()| {
        controller.with_value(|c| c.focus_anchor(&anchor));
    });

    view! {
      <div class="w-screen min-h-screen flex flex-col md:flex-row bg-slate-50 text-slate-900">
        <div class="w-full md:flex-1 h-[50vh] md:h-auto min-h-[320px]">
          <RoofMap settings map surface records on_select on_anchor_click />
        </div>
        <aside class="w-full md:w-[360px] lg:w-[400px] border-t md:border-t-0 md:border-l border-slate-200 flex flex-col bg-white/80 backdrop-blur">
          <CategoryFilter category record_count on_set_category on_toggle_category />
          <RecordList records selection on_select />
          <RecordDetailsPanel selection />
        </aside>
      </div>
    }
}

/// Applies a user action and publishes the resulting selection.
///
/// The signal is written after the controller has been released
/// because effects may run synchronously.
fn dispatch(
    controller: StoredValue<Controller>,
    selection: RwSignal<SelectionState>,
    action: impl FnOnce(&mut Controller),
) {
    let state = controller.try_update_value(|c| {
        action(c);
        c.state().clone()
    });
    match state {
        Some(state) => selection.set(state),
        None => log::warn!("Ignore user action: selection has been disposed"),
    }
}

fn load_store() -> RecordStore {
    let records = match roofmap_boundary::records_from_json(CATALOGUE) {
        Ok(records) => records,
        Err(err) => {
            log::error!("Unable to load catalogue: {err}");
            return RecordStore::default();
        }
    };
    match RecordStore::try_new(records) {
        Ok(store) => {
            log::debug!("Loaded {} records", store.len());
            store
        }
        Err(err) => {
            log::error!("Invalid catalogue: {err}");
            RecordStore::default()
        }
    }
}

pub(crate) fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("Unable to open {url}: {err:?}");
    }
}
