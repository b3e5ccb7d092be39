use contracts::domain::a003_batch::{Batch, BatchItem, BatchUnit};
use contracts::shared::EntityId;
use contracts::workflow::{can_export, qr_file_name, scanner_shortcut};
use leptos::prelude::*;
use thaw::*;

use super::files::BatchFilesSection;
use super::view_model::BatchDetailsViewModel;
use crate::domain::a003_batch::ui::actions::export_batch_excel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{alert, CapacityBar, ErrorBanner, LoadingIndicator, StatusPill};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::export::download_url;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::use_role;

fn save_qr(url: &str, name: &str) {
    if let Err(e) = download_url(url, &qr_file_name(name)) {
        log::error!("QR download failed: {}", e);
        alert(&e);
    }
}

#[component]
pub fn BatchDetails(id: EntityId, on_close: Callback<()>) -> impl IntoView {
    let vm = BatchDetailsViewModel::new(id, use_query_cache());
    vm.load(use_app_context());

    view! {
        <PageFrame page_id="a003_batch--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">
                    {move || vm.batch.with(|b| b.as_ref().map(|b| b.display_name()))}
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
                        return view! { <LoadingIndicator label="Loading batch..." /> }.into_any();
                    }
                    match vm.batch.get() {
                        Some(batch) => view! {
                            <BatchInfo batch=batch.clone() />
                            <BatchQrSection batch=batch.clone() />
                            <BatchFilesSection vm=vm />
                            <BatchItemsSection items=batch.items />
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
fn BatchInfo(batch: Batch) -> impl IntoView {
    let role = use_role();
    let cache = use_query_cache();
    let exportable = can_export(&batch);
    let for_export = StoredValue::new(batch.clone());

    view! {
        <section class="details-section card">
            <dl class="details-grid">
                <dt>"Capacity"</dt>
                <dd><CapacityBar capacity=batch.capacity max_capacity=batch.max_capacity /></dd>
                <dt>"Created"</dt>
                <dd>{format_optional_datetime(batch.created_at.as_deref())}</dd>
                <dt>"Status"</dt>
                <dd><StatusPill status=batch.status.clone() /></dd>
                <dt>"Units"</dt>
                <dd>{batch.total_units()}</dd>
            </dl>
            <Button
                size=ButtonSize::Small
                disabled=!exportable
                on_click=move |_| for_export.with_value(|b| export_batch_excel(b, &role.get_untracked(), cache))
            >
                "Download Excel"
            </Button>
        </section>
    }
}

#[component]
fn BatchQrSection(batch: Batch) -> impl IntoView {
    let role = use_role();
    let ctx = use_app_context();
    let qr = batch.qr_code_url.clone().unwrap_or_default();
    let name = batch.display_name();
    let status = batch.status.clone();
    let has_qr = batch.has_qr();

    let shortcut = move || {
        scanner_shortcut(&role.get(), &status, has_qr).map(|station| view! {
            <div class="batch-qr__shortcut">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_tab(station.tab_key(), station.title())
                >
                    {icon("scan")}
                    {format!("Open {}", station.title())}
                </Button>
            </div>
        })
    };

    view! {
        <Show when=move || has_qr && role.get().can_view_batch_qr()>
            <section class="details-section card batch-qr">
                <h2 class="details-section__title">{icon("scan")} "Batch QR Codes"</h2>
                <div class="batch-qr__card">
                    <h3>"Whole Batch QR Code"</h3>
                    <img class="batch-qr__image" src=qr.clone() alt="Batch QR" />
                    <p class="batch-qr__name">{name.clone()}</p>
                    <Button
                        size=ButtonSize::Small
                        on_click={
                            let qr = qr.clone();
                            let name = name.clone();
                            move |_| save_qr(&qr, &name)
                        }
                    >
                        "Download Batch QR"
                    </Button>
                </div>
            </section>
        </Show>
        {shortcut}
    }
}

#[component]
fn BatchItemsSection(items: Vec<BatchItem>) -> impl IntoView {
    view! {
        <section class="details-section card">
            <h2 class="details-section__title">"Batch Items & Units"</h2>
            {if items.is_empty() {
                view! { <p class="empty-state">"No items in this batch."</p> }.into_any()
            } else {
                items
                    .into_iter()
                    .map(|item| view! { <BatchItemCard item=item /> })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn BatchItemCard(item: BatchItem) -> impl IntoView {
    view! {
        <div class="batch-item">
            <div class="batch-item__head">
                <div>
                    <p class="batch-item__title">{item.product_title()}</p>
                    <p class="batch-item__meta">{format!("Store: {}", item.store_label())}</p>
                </div>
                <div class="batch-item__side">
                    <p>{format!("Order: #{}", item.order_label())}</p>
                    <p>{format!("Units: {}", item.unit_count())}</p>
                </div>
            </div>
            {if item.units.is_empty() {
                view! { <p class="empty-state">"No units found for this item."</p> }.into_any()
            } else {
                view! {
                    <div class="unit-grid">
                        {item
                            .units
                            .into_iter()
                            .map(|unit| view! { <BatchUnitCard unit=unit /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn BatchUnitCard(unit: BatchUnit) -> impl IntoView {
    let role = use_role();
    let title = unit.product_title.clone().unwrap_or_default();
    let qr = unit.qr_code_url.clone();
    let qr_for_preview = qr.clone();

    view! {
        <div class="unit-card">
            <Show when=move || role.get().can_view_unit_qr()>
                <div class="unit-card__qr-box">
                    {match qr_for_preview.clone() {
                        Some(src) => view! { <img class="unit-card__qr" src=src alt="QR" /> }.into_any(),
                        None => view! { <p class="unit-card__no-qr">"No QR"</p> }.into_any(),
                    }}
                </div>
            </Show>
            <p class="unit-card__title">{title.clone()}</p>
            <p class="unit-card__sku">{unit.sku.clone().unwrap_or_default()}</p>
            <StatusPill status=unit.status.clone() />
            {qr.map(|src| {
                let name = title.clone();
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| save_qr(&src, &name)
                    >
                        "Download"
                    </Button>
                }
            })}
        </div>
    }
}
