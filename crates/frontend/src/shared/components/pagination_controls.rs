use contracts::query::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;
use thaw::*;

/// Previous / next pager for server-paginated lists (1-based pages).
#[component]
pub fn PaginationControls(
    /// Current page, starting at 1
    #[prop(into)]
    page: Signal<u32>,
    /// Total number of pages (at least 1)
    #[prop(into)]
    page_count: Signal<u32>,
    #[prop(into)]
    has_prev: Signal<bool>,
    #[prop(into)]
    has_next: Signal<bool>,
    on_page_change: Callback<u32>,
    /// Total result count; shown as `• N results` when known
    #[prop(optional, into)]
    total: MaybeProp<u64>,
) -> impl IntoView {
    let info = move || {
        let base = format!("Page {} of {}", page.get(), page_count.get().max(1));
        match total.get() {
            Some(n) => format!("{} • {} results", base, n),
            None => base,
        }
    };

    view! {
        <div class="pagination-controls">
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || !has_prev.get())
                on_click=move |_| on_page_change.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "← Previous"
            </Button>
            <span class="pagination-info">{info}</span>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || !has_next.get())
                on_click=move |_| on_page_change.run(page.get_untracked() + 1)
            >
                "Next →"
            </Button>
        </div>
    }
}

/// `Per page` select bound to the shared page size options.
#[component]
pub fn PageSizeSelect(
    #[prop(into)] value: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">"Per page"</span>
            <select
                class="page-size-select"
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|size| {
                        let size = *size;
                        view! {
                            <option value=size.to_string() selected=move || value.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
