use contracts::domain::a005_product::Product;
use contracts::query::ProductFilters;
use contracts::shared::PagedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::agents;
use crate::domain::a001_store::{use_stores, StoreOptions};
use crate::shared::components::{
    EmptyState, ErrorBanner, ImagePreview, LoadingIndicator, PageHeader, PaginationControls,
};
use crate::shared::debounce::debounced;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query_cache, RequestSeq, Q_PRODUCTS};

const PRODUCTS_PAGE_SIZE: u32 = 10;
const TYPE_FILTER_DEBOUNCE_MS: u32 = 500;

/// `""` / `"true"` / `"false"` from the POD select.
fn parse_pod_filter(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let cache = use_query_cache();
    let stores = use_stores();

    let store_id = RwSignal::new(String::new());
    let type_input = RwSignal::new(String::new());
    let product_type = debounced(type_input.into(), TYPE_FILTER_DEBOUNCE_MS);
    let pod = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);

    let (response, set_response) = signal(None::<PagedResponse<Product>>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let request_seq = RequestSeq::new();

    // Any filter change starts over from the first page
    Effect::new(move |prev: Option<()>| {
        store_id.track();
        product_type.track();
        pod.track();
        if prev.is_some() {
            page.set(1);
        }
    });

    Effect::new(move |_| {
        let filters = ProductFilters {
            page: page.get(),
            limit: PRODUCTS_PAGE_SIZE,
            store_id: store_id.get(),
            product_type: product_type.get().trim().to_string(),
            is_pod: parse_pod_filter(&pod.get()),
        };
        let _ = cache.version(Q_PRODUCTS);
        let seq = request_seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = agents::get_products(&filters).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(r) => {
                    set_error.set(None);
                    set_response.set(Some(r));
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some("Failed to load products".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let products = move || response.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
    let page_count = Signal::derive(move || response.with(|r| r.as_ref().map_or(1, |r| r.page_count())));
    let has_prev = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_prev())));
    let has_next = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_next())));

    view! {
        <PageFrame page_id="a005_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                on_refresh=Callback::new(move |_| cache.invalidate(Q_PRODUCTS))
            />
            <div class="filter-bar">
                <label class="filter-field">
                    <span class="filter-field__label">"Store"</span>
                    <select
                        prop:value=move || store_id.get()
                        on:change=move |ev| store_id.set(event_target_value(&ev))
                    >
                        <StoreOptions stores=stores all_label="All Stores" />
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Product Type"</span>
                    <Input value=type_input placeholder="e.g. Stickers" />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"POD"</span>
                    <select
                        prop:value=move || pod.get()
                        on:change=move |ev| pod.set(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="true">"POD"</option>
                        <option value="false">"Stock"</option>
                    </select>
                </label>
            </div>
            <ErrorBanner error=error />
            <div class="page__content">
                <Show
                    when=move || !(loading.get() && response.with(|r| r.is_none()))
                    fallback=|| view! { <LoadingIndicator label="Loading products..." /> }
                >
                    <Show
                        when=move || !products().is_empty()
                        fallback=|| view! { <EmptyState message="No products found" /> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Image"</TableHeaderCell>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"POD"</TableHeaderCell>
                                    <TableHeaderCell>"Store"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=products
                                    key=|product| product.id.clone()
                                    children=|product| {
                                        let store = product
                                            .store
                                            .as_ref()
                                            .map(|s| s.name.clone())
                                            .unwrap_or_else(|| "—".into());
                                        let alt = product.title.clone();
                                        let kind = product.product_type.unwrap_or_else(|| "—".into());
                                        let pod = if product.is_pod { "Yes" } else { "No" };
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <ImagePreview src=product.img_url alt=alt />
                                                </TableCell>
                                                <TableCell>{product.title}</TableCell>
                                                <TableCell>{kind}</TableCell>
                                                <TableCell>{pod}</TableCell>
                                                <TableCell>{store}</TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </Show>
                <PaginationControls
                    page=page
                    page_count=page_count
                    has_prev=has_prev
                    has_next=has_next
                    on_page_change=Callback::new(move |p| page.set(p))
                    total=Signal::derive(move || response.with(|r| r.as_ref().and_then(|r| r.total)))
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pod_filter() {
        assert_eq!(parse_pod_filter(""), None);
        assert_eq!(parse_pod_filter("true"), Some(true));
        assert_eq!(parse_pod_filter("false"), Some(false));
    }
}
