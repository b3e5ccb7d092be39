use contracts::domain::a004_order::Order;
use contracts::enums::ProductionStatus;
use contracts::query::OrderFilters;
use contracts::shared::PagedResponse;
use contracts::system::navigation::order_detail_key;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::agents;
use crate::domain::a001_store::{use_stores, StoreOptions};
use crate::layout::global_context::use_app_context;
use crate::shared::components::{
    DeliveryPill, EmptyState, ErrorBanner, LoadingIndicator, PageHeader, PageSizeSelect,
    PaginationControls, StatusPill,
};
use crate::shared::date_utils::{format_optional_datetime, format_price};
use crate::shared::debounce::debounced;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query_cache, RequestSeq, Q_ORDERS};
use crate::system::auth::use_role;

const ORDERS_FORM_KEY: &str = "a004_order";
const SEARCH_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn OrderList() -> impl IntoView {
    let ctx = use_app_context();
    let cache = use_query_cache();
    let role = use_role();
    let stores = use_stores();

    // Filters survive tab switches through the shared form state
    let saved = ctx
        .get_form_state(ORDERS_FORM_KEY)
        .and_then(|v| serde_json::from_value::<OrderFilters>(v).ok())
        .unwrap_or_default();
    let search_input = RwSignal::new(saved.search.clone());
    let search = debounced(search_input.into(), SEARCH_DEBOUNCE_MS);
    let filters = RwSignal::new(saved);

    Effect::new(move |prev: Option<()>| {
        let term = search.get();
        if prev.is_some() {
            filters.update(|f| {
                f.search = term;
                f.page = 1;
            });
        }
    });

    let (response, set_response) = signal(None::<PagedResponse<Order>>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let current = filters.get();
        let _ = cache.version(Q_ORDERS);
        if let Ok(value) = serde_json::to_value(&current) {
            ctx.set_form_state(ORDERS_FORM_KEY.to_string(), value);
        }
        let seq = request_seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = agents::get_orders(&current).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(r) => {
                    set_error.set(None);
                    set_response.set(Some(r));
                }
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    set_error.set(Some("Failed to load orders".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let set_filter = move |apply: fn(&mut OrderFilters, String), value: String| {
        filters.update(|f| {
            apply(f, value);
            f.page = 1;
        });
    };

    let open_order = move |order: &Order| {
        ctx.open_tab(&order_detail_key(&order.id.to_string()), &order.number_label());
    };

    let orders = move || response.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
    let page = Signal::derive(move || filters.with(|f| f.page));
    let page_count = Signal::derive(move || response.with(|r| r.as_ref().map_or(1, |r| r.page_count())));
    let has_prev = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_prev())));
    let has_next = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_next())));

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Orders"
                on_refresh=Callback::new(move |_| cache.invalidate(Q_ORDERS))
            />
            <div class="filter-bar">
                <Show when=move || role.get().sees_store_filter()>
                    <label class="filter-field">
                        <span class="filter-field__label">"Store"</span>
                        <select
                            prop:value=move || filters.with(|f| f.store_id.clone())
                            on:change=move |ev| set_filter(|f, v| f.store_id = v, event_target_value(&ev))
                        >
                            <StoreOptions stores=stores all_label="All Stores" />
                        </select>
                    </label>
                </Show>
                <label class="filter-field">
                    <span class="filter-field__label">"Status"</span>
                    <select
                        prop:value=move || filters.with(|f| f.status.clone())
                        on:change=move |ev| set_filter(|f, v| f.status = v, event_target_value(&ev))
                    >
                        <option value="">"All Statuses"</option>
                        {ProductionStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.code().to_string()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"From"</span>
                    <input
                        type="date"
                        prop:value=move || filters.with(|f| f.start_date.clone())
                        on:change=move |ev| set_filter(|f, v| f.start_date = v, event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"To"</span>
                    <input
                        type="date"
                        prop:value=move || filters.with(|f| f.end_date.clone())
                        on:change=move |ev| set_filter(|f, v| f.end_date = v, event_target_value(&ev))
                    />
                </label>
                <label class="filter-field filter-field--grow">
                    <span class="filter-field__label">"Search"</span>
                    <Input value=search_input placeholder="Order number or customer" />
                </label>
                <PageSizeSelect
                    value=Signal::derive(move || filters.with(|f| f.limit))
                    on_change=Callback::new(move |limit| filters.update(|f| {
                        f.limit = limit;
                        f.page = 1;
                    }))
                />
            </div>
            <ErrorBanner error=error />
            <div class="page__content">
                <Show
                    when=move || !(loading.get() && response.with(|r| r.is_none()))
                    fallback=|| view! { <LoadingIndicator label="Loading orders..." /> }
                >
                    <Show
                        when=move || !orders().is_empty()
                        fallback=|| view! { <EmptyState message="No orders found" /> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Order Number"</TableHeaderCell>
                                    <TableHeaderCell>"Store"</TableHeaderCell>
                                    <TableHeaderCell>"Customer"</TableHeaderCell>
                                    <TableHeaderCell>"Total Price"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Delivery"</TableHeaderCell>
                                    <TableHeaderCell>"Created At"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=orders
                                    key=|order| order.id.clone()
                                    children=move |order| {
                                        let number = order.number_label();
                                        let store = order.store_name().to_string();
                                        let customer = order.customer_name.clone().unwrap_or_else(|| "-".into());
                                        let price = format_price(order.total_price);
                                        let status = order.status.clone();
                                        let delivery = order.delivery_status.clone();
                                        let created = format_optional_datetime(order.created_at.as_deref());
                                        view! {
                                            <tr class="table__row--clickable" on:click=move |_| open_order(&order)>
                                                <TableCell>{number}</TableCell>
                                                <TableCell>{store}</TableCell>
                                                <TableCell>{customer}</TableCell>
                                                <TableCell>{price}</TableCell>
                                                <TableCell><StatusPill status=status /></TableCell>
                                                <TableCell><DeliveryPill status=delivery /></TableCell>
                                                <TableCell>{created}</TableCell>
                                            </tr>
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
                    on_page_change=Callback::new(move |p| filters.update(|f| f.page = p))
                    total=Signal::derive(move || response.with(|r| r.as_ref().and_then(|r| r.total)))
                />
            </div>
        </PageFrame>
    }
}
