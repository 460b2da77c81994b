use leptos::*;

use roofmap_core::{state::SelectionState, view::EmptyState};
use roofmap_entities::record::LocationRecord;

use super::CategoryBadge;

#[component]
pub fn RecordList(
    records: Memo<Vec<LocationRecord>>,
    selection: RwSignal<SelectionState>,
    on_select: Callback<LocationRecord>,
) -> impl IntoView {
    let empty_state = move || {
        let category = selection.with(SelectionState::active_category);
        EmptyState::of(category, records.with(Vec::len))
    };
    view! {
      <div class="flex-1 overflow-y-auto">
        {move || {
            empty_state()
                .map(|empty| {
                    view! { <div class="px-4 py-6 text-xs text-slate-500">{empty.message()}</div> }
                })
        }}
        <For
          each = move || records.get()
          key = |record| record.id.clone()
          let:record
        >
          <RecordListItem record selection on_select />
        </For>
      </div>
    }
}

#[component]
fn RecordListItem(
    record: LocationRecord,
    selection: RwSignal<SelectionState>,
    on_select: Callback<LocationRecord>,
) -> impl IntoView {
    let LocationRecord {
        id,
        name,
        address,
        category,
        ..
    } = record.clone();
    let is_active = move || selection.with(|s| s.active_record().is_some_and(|r| r.id == id));
    view! {
      <button
        type="button"
        class = move || if is_active() {
            "w-full text-left px-4 py-3 border-b border-slate-100 hover:bg-slate-50 transition-colors bg-slate-100/80 border-l-4 border-l-blue-600"
        } else {
            "w-full text-left px-4 py-3 border-b border-slate-100 hover:bg-slate-50 transition-colors"
        }
        on:click = move |_| on_select.call(record.clone())
      >
        <div class="flex items-center justify-between gap-2">
          <div>
            <div class="text-sm font-medium">{name}</div>
            <div class="text-xs text-slate-500">{address}</div>
          </div>
          <CategoryBadge category />
        </div>
      </button>
    }
}
