use contracts::domain::a004_order::{Order, OrderItem, OrderUnit};
use contracts::enums::ProductionStatus;
use contracts::shared::EntityId;
use contracts::workflow::allowed_item_transitions;
use leptos::prelude::*;
use thaw::*;

use super::view_model::OrderDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{DeliveryPill, ErrorBanner, ImagePreview, LoadingIndicator, StatusPill};
use crate::shared::date_utils::{format_optional_datetime, format_price};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::use_role;

#[component]
pub fn OrderDetails(id: EntityId, on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsViewModel::new(id, use_query_cache());
    vm.load(use_app_context());

    view! {
        <PageFrame page_id="a004_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">
                    {move || vm.order.with(|o| o.as_ref().map(|o| format!("Order {}", o.number_label())))}
                </h1>
                <div class="page__header-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                </div>
            </div>
            <ErrorBanner error=vm.error />
            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        return view! { <LoadingIndicator label="Loading..." /> }.into_any();
                    }
                    match vm.order.get() {
                        Some(order) => view! {
                            <OrderSummary order=order.clone() vm=vm />
                            <section class="details-section">
                                <h2 class="details-section__title">"Order Items"</h2>
                                <div class="order-items">
                                    {order
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <OrderItemCard item=item vm=vm /> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                        .into_any(),
                        None => ().into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OrderSummary(order: Order, vm: OrderDetailsViewModel) -> impl IntoView {
    let role = use_role();
    let bulk_status = RwSignal::new(String::new());

    let apply_bulk = move |_| {
        let code = bulk_status.get_untracked();
        if code.is_empty() {
            return;
        }
        vm.change_all_items_status(ProductionStatus::parse(&code));
        bulk_status.set(String::new());
    };

    view! {
        <section class="details-section card">
            <dl class="details-grid">
                <dt>"Store"</dt>
                <dd>{order.store_name().to_string()}</dd>
                <dt>"Customer"</dt>
                <dd>{order.customer_name.clone().unwrap_or_else(|| "-".into())}</dd>
                <dt>"Email"</dt>
                <dd>{order.customer_email.clone().unwrap_or_else(|| "-".into())}</dd>
                <dt>"Total"</dt>
                <dd>{format_price(order.total_price)}</dd>
                <dt>"Status"</dt>
                <dd><StatusPill status=order.status.clone() /></dd>
                <dt>"Delivery"</dt>
                <dd><DeliveryPill status=order.delivery_status.clone() /></dd>
                <dt>"Created"</dt>
                <dd>{format_optional_datetime(order.created_at.as_deref())}</dd>
            </dl>
            <Show when=move || role.get().can_bulk_update_orders()>
                <div class="order-bulk">
                    <span class="order-bulk__label">"Set all items to"</span>
                    <select
                        prop:value=move || bulk_status.get()
                        on:change=move |ev| bulk_status.set(event_target_value(&ev))
                    >
                        <option value="">"Select status"</option>
                        {ProductionStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.code().to_string()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        size=ButtonSize::Small
                        disabled=Signal::derive(move || bulk_status.get().is_empty() || vm.busy.get().is_some())
                        on_click=apply_bulk
                    >
                        "Apply"
                    </Button>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn OrderItemCard(item: OrderItem, vm: OrderDetailsViewModel) -> impl IntoView {
    let role = use_role();
    let item_id = StoredValue::new(item.id.clone());
    let current = item.status.clone();
    let product_type = item
        .product
        .as_ref()
        .and_then(|p| p.product_type.clone())
        .unwrap_or_else(|| "-".into());
    let handling = if item.is_pod() { "POD" } else { "Stock" };
    let handling_class = if item.is_pod() {
        "order-item__handling order-item__handling--pod"
    } else {
        "order-item__handling"
    };

    let status_select = move || {
        let options = allowed_item_transitions(&role.get(), &current);
        if options.is_empty() {
            return ().into_any();
        }
        view! {
            <select
                class="order-item__status-select"
                disabled=move || vm.is_busy(&item_id.get_value())
                on:change=move |ev| {
                    let code = event_target_value(&ev);
                    if !code.is_empty() {
                        vm.change_item_status(item_id.get_value(), ProductionStatus::parse(&code));
                    }
                }
            >
                <option value="">"Change status..."</option>
                {options
                    .into_iter()
                    .map(|s| view! { <option value=s.code().to_string()>{s.label()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    };

    view! {
        <div class="order-item card">
            <div class="order-item__main">
                <ImagePreview
                    src=item.product.as_ref().and_then(|p| p.img_url.clone())
                    alt=item.title().to_string()
                    size=64
                />
                <div class="order-item__info">
                    <p class="order-item__title">{item.title().to_string()}</p>
                    <p class="order-item__sku">{item.sku().to_string()}</p>
                    <p class="order-item__type">{format!("Type: {}", product_type)}</p>
                    <p class=handling_class>{handling}</p>
                </div>
            </div>
            <div class="order-item__side">
                <p class="order-item__qty">{format!("Qty: {}", item.quantity)}</p>
                <p>{format_price(item.price)}</p>
                <StatusPill status=item.status.clone() />
                {status_select}
            </div>
            {(!item.units.is_empty()).then(|| view! {
                <div class="unit-grid">
                    {item
                        .units
                        .into_iter()
                        .map(|unit| view! { <UnitCard unit=unit vm=vm /> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

#[component]
fn UnitCard(unit: OrderUnit, vm: OrderDetailsViewModel) -> impl IntoView {
    let role = use_role();
    let unit_id = StoredValue::new(unit.id.clone());
    let reason = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let qr_src = unit.qr_code_url.clone().unwrap_or_default();
    let has_qr = !qr_src.is_empty();

    let submit = move |_| {
        if vm.replace_unit(unit_id.get_value(), &reason.get_untracked()) {
            reason.set(String::new());
            editing.set(false);
        }
    };

    view! {
        <div class="unit-card">
            <div class="unit-card__head">
                <span class="unit-card__id">{format!("Unit {}", unit.id)}</span>
                <StatusPill status=unit.status.clone() />
            </div>
            <Show when=move || has_qr && role.get().can_view_unit_qr()>
                <img class="unit-card__qr" src=qr_src.clone() alt="Unit QR" />
            </Show>
            {unit.replacement_reason.clone().map(|r| view! {
                <p class="unit-card__reason">{format!("Replaced: {}", r)}</p>
            })}
            <Show when=move || role.get().can_replace_units()>
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(true)>
                            "Request replacement"
                        </Button>
                    }
                >
                    <div class="unit-card__replace">
                        <Input value=reason placeholder="Replacement reason" />
                        <Button
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || vm.is_busy(&unit_id.get_value()))
                            on_click=submit
                        >
                            "Submit"
                        </Button>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(false)>
                            "Cancel"
                        </Button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
