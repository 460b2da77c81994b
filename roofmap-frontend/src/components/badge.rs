use leptos::*;

use roofmap_core::view::labels;
use roofmap_entities::category::Category;

#[component]
pub fn CategoryBadge(category: Category) -> impl IntoView {
    view! {
      <div class="text-[11px] text-slate-500">
        {labels::CATEGORY}" "
        <span class="inline-flex px-2 py-0.5 rounded-full bg-slate-100 text-slate-700 font-medium">
          {category.name()}
        </span>
      </div>
    }
}

#[component]
pub fn CategoryChip(
    category: Category,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<Category>,
) -> impl IntoView {
    view! {
      <button
        type="button"
        class = move || if active.get() {
            "px-3 py-1 rounded-full text-xs border bg-blue-600 text-white border-blue-600"
        } else {
            "px-3 py-1 rounded-full text-xs border bg-white text-slate-700 border-slate-300 hover:border-blue-400"
        }
        on:click = move |_| on_toggle.call(category)
      >
        {category.name()}
      </button>
    }
}
