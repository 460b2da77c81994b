use leptos::*;

use roofmap_core::view::{count_label, labels};
use roofmap_entities::category::Category;

use super::CategoryChip;

#[component]
pub fn CategoryFilter(
    #[prop(into)] category: Signal<Option<Category>>,
    #[prop(into)] record_count: Signal<usize>,
    on_set_category: Callback<String>,
    on_toggle_category: Callback<Category>,
) -> impl IntoView {
    view! {
      <div class="p-4 border-b border-slate-200">
        <div class="flex items-center justify-between gap-2 mb-3">
          <div>
            <h2 class="text-lg font-semibold">{labels::PANEL_TITLE}</h2>
            <p class="text-xs text-slate-500">{labels::PANEL_HINT}</p>
          </div>
          <Show when = move || category.get().is_some() fallback = || ()>
            <span class="text-xs text-slate-500 whitespace-nowrap">
              {move || count_label(record_count.get())}
            </span>
          </Show>
        </div>
        <select
          class="w-full rounded-md border border-slate-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-white"
          prop:value = move || category.get().map(Category::name).unwrap_or_default()
          on:change = move |ev| on_set_category.call(event_target_value(&ev))
        >
          <option value="">{labels::CHOOSE_CATEGORY_OPTION}</option>
          {
            Category::all()
              .map(|c| view! { <option value = c.name()>{c.name()}</option> })
              .collect_view()
          }
        </select>
        <div class="mt-3 flex gap-2 flex-wrap">
          {
            Category::all()
              .map(|c| {
                  let active = Signal::derive(move || category.get() == Some(c));
                  view! { <CategoryChip category = c active on_toggle = on_toggle_category /> }
              })
              .collect_view()
          }
        </div>
      </div>
    }
}
