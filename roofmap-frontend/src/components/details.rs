use leptos::*;

use roofmap_core::{
    state::SelectionState,
    view::{labels, RecordDetails},
};
use roofmap_entities::record::LocationRecord;

use super::CategoryBadge;
use crate::open_in_new_tab;

/// Shows the active record, if any.
#[component]
pub fn RecordDetailsPanel(selection: RwSignal<SelectionState>) -> impl IntoView {
    let record = Memo::new(move |_| selection.with(|s| s.active_record().cloned()));
    move || record.get().map(|record| view! { <RecordDetailsView record /> })
}

#[component]
fn RecordDetailsView(record: LocationRecord) -> impl IntoView {
    let RecordDetails {
        name,
        address,
        category,
        description,
        images,
        map_link,
    } = RecordDetails::from(&record);
    let name = name.to_owned();
    let address = address.to_owned();
    let description = description.map(ToOwned::to_owned);
    let images = images.map(<[String]>::to_vec);
    let map_link = map_link.into_owned();

    view! {
      <div class="border-t border-slate-200 p-4 bg-white">
        <h3 class="text-sm font-semibold mb-1">{labels::DETAILS}</h3>
        <div class="text-sm font-medium">{name}</div>
        <div class="text-xs text-slate-500 mb-2">{address}</div>
        <CategoryBadge category />
        {description.map(|text| view! { <p class="mt-2 text-xs text-slate-600">{text}</p> })}
        {images.map(|images| view! {
          <div class="mt-3 flex gap-2 overflow-x-auto pb-1">
            {
              images
                .into_iter()
                .map(|src| view! {
                  <img src = src loading="lazy" alt="" class="h-20 w-28 flex-none rounded object-cover" />
                })
                .collect_view()
            }
          </div>
        })}
        <button
          type="button"
          class="mt-3 text-xs font-medium text-blue-600 hover:text-blue-700 underline"
          on:click = move |_| open_in_new_tab(&map_link)
        >
          {labels::OPEN_MAP_LINK_SHORT}
        </button>
      </div>
    }
}
