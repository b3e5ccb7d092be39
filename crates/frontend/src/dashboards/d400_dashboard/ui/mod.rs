//! Dashboard: sales counters for everyone, catalog setup for staff.

mod cards;
mod forms;
mod tables;

use cards::{OrdersCard, ProductTypesSoldCards};
use contracts::query::DashboardFilters;
use forms::{CreateBatchForm, CreateMainStockForm, CreateRuleForm, CreateStoreForm};
use leptos::prelude::*;
use tables::{RulesTable, StoreTable};
use thaw::*;

use crate::domain::a001_store::{use_stores, StoreOptions};
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalStackService, ModalWidth};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_role;

#[component]
#[allow(non_snake_case)]
pub fn DashboardPage() -> impl IntoView {
    let role = use_role();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let stores = use_stores();

    let filters = RwSignal::new(DashboardFilters::default());
    let filter_error = Signal::derive(move || filters.with(|f| f.validate().err()));
    // Cards only see filters that passed validation
    let applied = Memo::new(move |prev: Option<&DashboardFilters>| {
        let current = filters.get();
        match (current.validate(), prev) {
            (Ok(()), _) | (Err(_), None) => current,
            (Err(_), Some(prev)) => prev.clone(),
        }
    });
    let applied: Signal<DashboardFilters> = applied.into();

    let open_store = move |_| {
        modal_stack.open("Create Store", ModalWidth::Narrow, |handle| {
            view! { <CreateStoreForm handle=handle /> }.into_any()
        });
    };
    let open_rule = move |_| {
        modal_stack.open("Create Rule", ModalWidth::Narrow, |handle| {
            view! { <CreateRuleForm handle=handle /> }.into_any()
        });
    };
    let open_batch = move |_| {
        modal_stack.open("Create Batch", ModalWidth::Wide, |handle| {
            view! { <CreateBatchForm handle=handle /> }.into_any()
        });
    };
    let open_main_stock = move |_| {
        modal_stack.open("Create Main Stock", ModalWidth::Wide, |handle| {
            view! { <CreateMainStockForm handle=handle /> }.into_any()
        });
    };

    view! {
        <PageFrame page_id="d400_dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>

            <div class="filter-bar">
                <Show when=move || role.get().sees_store_filter()>
                    <select
                        class="filter-bar__select"
                        prop:value=move || filters.with(|f| f.store_id.clone())
                        on:change=move |ev| filters.update(|f| f.store_id = event_target_value(&ev))
                    >
                        <StoreOptions stores=stores all_label="All Stores" />
                    </select>
                </Show>
                <input
                    type="date"
                    class="filter-bar__date"
                    prop:value=move || filters.with(|f| f.start_date.clone())
                    on:input=move |ev| filters.update(|f| f.start_date = event_target_value(&ev))
                />
                <input
                    type="date"
                    class="filter-bar__date"
                    prop:value=move || filters.with(|f| f.end_date.clone())
                    on:input=move |ev| filters.update(|f| f.end_date = event_target_value(&ev))
                />
            </div>
            {move || filter_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="dashboard__cards">
                <ProductTypesSoldCards filters=applied />
                <OrdersCard filters=applied />
            </div>

            <Show when=move || role.get().can_manage_catalog()>
                <div class="dashboard__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=open_store>
                        {icon("plus")} "Create Store"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_rule>
                        {icon("plus")} "Create Rule"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_batch>
                        {icon("plus")} "Create Batch"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_main_stock>
                        {icon("plus")} "Create Main Stock"
                    </Button>
                </div>
                <StoreTable stores=stores />
                <RulesTable />
            </Show>
        </PageFrame>
    }
}
