//! Returns register: pending filters are edited freely and only reach the
//! request on Apply.

use contracts::domain::a008_returned_item::ReturnedItem;
use contracts::query::ReturnFilters;
use contracts::shared::PaginatedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::domain::a001_store::{use_stores, StoreOptions};
use crate::shared::components::{
    EmptyState, ErrorBanner, ImagePreview, LoadingIndicator, PageHeader, PageSizeSelect,
    PaginationControls,
};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::RequestSeq;

#[component]
pub fn ReturnsList() -> impl IntoView {
    let stores = use_stores();
    let applied = RwSignal::new(ReturnFilters::default());
    let pending = RwSignal::new(ReturnFilters::default());

    let (response, set_response) = signal(None::<PaginatedResponse<ReturnedItem>>);
    let (fetching, set_fetching) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let current = applied.get();
        let seq = request_seq.begin();
        set_fetching.set(true);
        spawn_local(async move {
            let result = admin::get_returned_items(&current).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(r) => {
                    set_error.set(None);
                    set_response.set(Some(r));
                }
                Err(e) => {
                    log::error!("Error loading returns: {}", e);
                    set_error.set(Some(format!("Error loading returns: {}", e)));
                }
            }
            set_fetching.set(false);
        });
    });

    let apply = move |_| {
        let next = pending.get_untracked();
        applied.update(|a| a.apply(&next));
    };
    let reset = move |_| {
        pending.update(|p| p.reset());
        applied.update(|a| a.reset());
    };

    let items = move || response.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
    let total = move || response.with(|r| r.as_ref().map_or(0, |r| r.pagination.total));
    let page = Signal::derive(move || applied.with(|a| a.page));
    let page_count = Signal::derive(move || response.with(|r| r.as_ref().map_or(1, |r| r.page_count())));
    let has_prev = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_prev())));
    let has_next = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_next())));

    view! {
        <PageFrame page_id="p900_returns--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Returns"
                subtitle=Signal::derive(move || {
                    if fetching.get() && response.with(|r| r.is_some()) {
                        Some("(refreshing...)".to_string())
                    } else {
                        None
                    }
                })
            >
                <span class="page__counter">{move || format!("Total returns: {}", total())}</span>
            </PageHeader>
            <div class="filter-bar filter-bar--boxed">
                <label class="filter-field">
                    <span class="filter-field__label">"Store"</span>
                    <select
                        prop:value=move || pending.with(|p| p.store_id.clone())
                        on:change=move |ev| pending.update(|p| p.store_id = event_target_value(&ev))
                    >
                        <StoreOptions stores=stores all_label="All stores" />
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Product type"</span>
                    <input
                        type="text"
                        placeholder="e.g. ACRYLIC KEYCHAINS"
                        prop:value=move || pending.with(|p| p.product_type.clone())
                        on:input=move |ev| pending.update(|p| p.product_type = event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Start date"</span>
                    <input
                        type="date"
                        prop:value=move || pending.with(|p| p.start_date.clone())
                        on:change=move |ev| pending.update(|p| p.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"End date"</span>
                    <input
                        type="date"
                        prop:value=move || pending.with(|p| p.end_date.clone())
                        on:change=move |ev| pending.update(|p| p.end_date = event_target_value(&ev))
                    />
                </label>
                <PageSizeSelect
                    value=Signal::derive(move || pending.with(|p| p.limit))
                    on_change=Callback::new(move |limit| pending.update(|p| p.limit = limit))
                />
                <div class="filter-bar__actions">
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Primary on_click=apply>
                        "Apply"
                    </Button>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=reset>
                        "Reset"
                    </Button>
                </div>
            </div>
            <ErrorBanner error=error />
            <div class="page__content">
                <Show
                    when=move || !(fetching.get() && response.with(|r| r.is_none()))
                    fallback=|| view! { <LoadingIndicator label="Loading returns..." /> }
                >
                    <Show
                        when=move || !items().is_empty()
                        fallback=|| view! { <EmptyState message="No returned items found." /> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Item"</TableHeaderCell>
                                    <TableHeaderCell>"Store"</TableHeaderCell>
                                    <TableHeaderCell>"Order #"</TableHeaderCell>
                                    <TableHeaderCell>"Variant"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=items
                                    key=|item| item.id.clone()
                                    children=|item| view! { <ReturnRow item=item /> }
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
                    on_page_change=Callback::new(move |p| applied.update(|a| a.go_to_page(p)))
                    total=Signal::derive(move || response.with(|r| r.as_ref().map(|r| r.pagination.total)))
                />
            </div>
        </PageFrame>
    }
}

#[component]
fn ReturnRow(item: ReturnedItem) -> impl IntoView {
    let title = item.product.as_ref().map(|p| p.title.clone()).unwrap_or_default();
    let product_type = item
        .product
        .as_ref()
        .and_then(|p| p.product_type.clone())
        .unwrap_or_default();
    let variant_title = item
        .variant
        .as_ref()
        .and_then(|v| v.title.clone())
        .unwrap_or_else(|| "—".into());
    let sku = item.variant.as_ref().and_then(|v| v.sku.clone());
    let image = item.image().map(str::to_string);
    let store = item.store_name().to_string();
    let order = item.order_label();
    let quantity = item.quantity;
    let created = format_optional_datetime(item.created_at.as_deref());

    view! {
        <TableRow>
            <TableCell>
                <div class="return-item">
                    <ImagePreview src=image alt=title.clone() size=40 />
                    <div class="return-item__text">
                        <span class="return-item__title">{title}</span>
                        <span class="return-item__type">{product_type}</span>
                    </div>
                </div>
            </TableCell>
            <TableCell>{store}</TableCell>
            <TableCell>{order}</TableCell>
            <TableCell>
                <div class="return-item__variant">
                    <span>{variant_title}</span>
                    {sku.map(|sku| view! { <span class="return-item__sku">{format!("SKU: {}", sku)}</span> })}
                </div>
            </TableCell>
            <TableCell>{quantity}</TableCell>
            <TableCell>{created}</TableCell>
        </TableRow>
    }
}
