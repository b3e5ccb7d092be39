use contracts::domain::a006_main_stock::MainStockProduct;
use contracts::query::MainStockProductFilters;
use contracts::shared::{EntityId, PaginatedResponse};
use contracts::workflow::QuantityDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::shared::components::{
    alert, confirm, EmptyState, ErrorBanner, ImagePreview, LoadingIndicator, PaginationControls,
};
use crate::shared::debounce::debounced;
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_cache, RequestSeq, Q_MAIN_STOCK, Q_MAIN_STOCK_PRODUCTS};

const SEARCH_DEBOUNCE_MS: u32 = 800;

/// "Save All (n)", or the progress label while saving.
fn save_all_label(changed: usize, saving: bool) -> String {
    if saving {
        "Saving All...".to_string()
    } else {
        format!("Save All ({})", changed)
    }
}

/// Products of one main stock with editable quantities.
#[component]
pub fn MainStockProducts(stock_id: EntityId) -> impl IntoView {
    let cache = use_query_cache();
    let stock_id = StoredValue::new(stock_id);

    let sku_input = RwSignal::new(String::new());
    let title_input = RwSignal::new(String::new());
    let sku = debounced(sku_input.into(), SEARCH_DEBOUNCE_MS);
    let title = debounced(title_input.into(), SEARCH_DEBOUNCE_MS);
    let page = RwSignal::new(1u32);

    let (response, set_response) = signal(None::<PaginatedResponse<MainStockProduct>>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let draft = RwSignal::new(QuantityDraft::default());
    let saving = RwSignal::new(None::<String>);
    let saving_all = RwSignal::new(false);
    let request_seq = RequestSeq::new();

    Effect::new(move |prev: Option<()>| {
        sku.track();
        title.track();
        if prev.is_some() {
            page.set(1);
        }
    });

    Effect::new(move |_| {
        let filters = MainStockProductFilters {
            page: page.get(),
            sku: sku.get().trim().to_string(),
            title: title.get().trim().to_string(),
            ..MainStockProductFilters::default()
        };
        let _ = cache.version(Q_MAIN_STOCK_PRODUCTS);
        let id = stock_id.get_value();
        let seq = request_seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = admin::get_products_by_main_stock(&id, &filters).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(r) => {
                    draft.set(QuantityDraft::seed(&r.data));
                    set_error.set(None);
                    set_response.set(Some(r));
                }
                Err(e) => {
                    log::error!("Failed to load main stock products: {}", e);
                    set_error.set(Some("Failed to load products".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let refresh = move || cache.invalidate_many(&[Q_MAIN_STOCK_PRODUCTS, Q_MAIN_STOCK]);

    let save_one = move |sku: String| {
        let assignment = draft.with_untracked(|d| d.assignment(&sku));
        saving.set(Some(sku));
        spawn_local(async move {
            if let Err(e) = admin::assign_product_quantity(&stock_id.get_value(), &assignment).await {
                alert(&format!("Error saving quantity: {}", e));
            } else {
                refresh();
            }
            saving.set(None);
        });
    };

    let delete_one = move |sku: String| {
        if !confirm("Are you sure you want to remove this SKU from stock?") {
            return;
        }
        spawn_local(async move {
            match admin::delete_product_quantity(&stock_id.get_value(), &sku).await {
                Ok(()) => refresh(),
                Err(e) => alert(&format!("Error removing SKU: {}", e)),
            }
        });
    };

    let save_all = move |_| {
        let assignments = draft.with_untracked(|d| d.bulk_assignments());
        if assignments.is_empty() {
            return;
        }
        saving_all.set(true);
        spawn_local(async move {
            let id = stock_id.get_value();
            let mut failed = Vec::new();
            for assignment in &assignments {
                if let Err(e) = admin::assign_product_quantity(&id, assignment).await {
                    log::warn!("Failed to save {}: {}", assignment.sku, e);
                    failed.push(assignment.sku.clone());
                }
            }
            if !failed.is_empty() {
                alert(&format!("Error saving quantities for: {}", failed.join(", ")));
            }
            refresh();
            saving_all.set(false);
        });
    };

    let products = move || response.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
    let changed_count = move || draft.with(|d| d.changed().len());
    let searching = move || sku.with(|s| !s.is_empty()) || title.with(|t| !t.is_empty());

    view! {
        <section class="details-section stock-products">
            <div class="details-section__header">
                <h3 class="details-section__title">"Products"</h3>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving_all.get() || changed_count() == 0)
                    on_click=save_all
                >
                    {move || save_all_label(changed_count(), saving_all.get())}
                </Button>
            </div>
            <div class="filter-row">
                <label class="filter-field">
                    <span class="filter-field__label">"SKU"</span>
                    <Input value=sku_input placeholder="Search by SKU" />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Title"</span>
                    <Input value=title_input placeholder="Search by title" />
                </label>
            </div>
            <ErrorBanner error=error />
            <Show
                when=move || !(loading.get() && response.with(|r| r.is_none()))
                fallback=move || {
                    let label = if searching() { "Searching..." } else { "Loading products..." };
                    view! { <LoadingIndicator label=label /> }
                }
            >
                <Show
                    when=move || !products().is_empty()
                    fallback=|| view! { <EmptyState message="No products found" /> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Image"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=products
                                key=|p| (p.sku.clone(), p.total_quantity)
                                children=move |product| {
                                    let sku_text = product.sku.clone();
                                    let alt = product.sku.clone();
                                    let title = product.product_name.clone().unwrap_or_else(|| "—".into());
                                    let img = product.product_img_url.clone();
                                    let sku = StoredValue::new(product.sku);
                                    let changed = move || draft.with(|d| sku.with_value(|s| d.is_changed(s)));
                                    let busy = move || sku.with_value(|s| saving.with(|v| v.as_deref() == Some(s.as_str())));
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <ImagePreview
                                                    src=img
                                                    alt=alt
                                                    size=40
                                                />
                                            </TableCell>
                                            <TableCell>{sku_text}</TableCell>
                                            <TableCell>{title}</TableCell>
                                            <TableCell>
                                                <input
                                                    type="number"
                                                    min="0"
                                                    class="quantity-input"
                                                    class:quantity-input--changed=changed
                                                    prop:value=move || draft.with(|d| sku.with_value(|s| d.value(s)).to_string())
                                                    on:input=move |ev| {
                                                        let raw = event_target_value(&ev);
                                                        draft.update(|d| sku.with_value(|s| d.set(s, &raw)));
                                                    }
                                                />
                                            </TableCell>
                                            <td class="table__actions">
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Primary
                                                    disabled=Signal::derive(move || !changed() || busy())
                                                    on_click=move |_| save_one(sku.get_value())
                                                >
                                                    {move || if busy() { "Saving..." } else { "Save" }}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_one(sku.get_value())
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </td>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
            <PaginationControls
                page=Signal::derive(move || page.get())
                page_count=Signal::derive(move || response.with(|r| r.as_ref().map_or(1, |r| r.page_count())))
                has_prev=Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_prev())))
                has_next=Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_next())))
                on_page_change=Callback::new(move |p| page.set(p))
                total=Signal::derive(move || response.with(|r| r.as_ref().map(|r| r.pagination.total)))
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_all_label() {
        assert_eq!(save_all_label(3, false), "Save All (3)");
        assert_eq!(save_all_label(3, true), "Saving All...");
    }
}
