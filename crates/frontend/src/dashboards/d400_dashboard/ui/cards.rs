use contracts::domain::d400_dashboard::{ProductTypesSold, TotalOrders};
use contracts::query::DashboardFilters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::shared::components::LoadingIndicator;
use crate::shared::query_cache::{use_query_cache, RequestSeq, Q_DASHBOARD, Q_ORDERS};

#[component]
pub fn ProductTypesSoldCards(#[prop(into)] filters: Signal<DashboardFilters>) -> impl IntoView {
    let cache = use_query_cache();
    let (data, set_data) = signal(None::<ProductTypesSold>);
    let (loading, set_loading) = signal(true);
    // Responses of superseded filter values are dropped
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let current = filters.get();
        let _ = cache.version(Q_DASHBOARD);
        let seq = request_seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = admin::get_total_product_types_sold(&current).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(sold) => set_data.set(Some(sold)),
                Err(e) => {
                    log::warn!("Failed to load product types sold: {}", e);
                    set_data.set(None);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="dashboard__types">
            {move || {
                if loading.get() {
                    return view! { <LoadingIndicator label="Loading..." /> }.into_any();
                }
                let Some(sold) = data.get() else {
                    return view! { <div class="empty-state">"No data"</div> }.into_any();
                };
                view! {
                    <div class="card stat-card">
                        <h2 class="stat-card__title">"Totals"</h2>
                        <p>"Total Quantity Sold: " <b class="stat-card__value">{sold.total_quantity_sold}</b></p>
                        <p>"Distinct Types: " <b class="stat-card__value">{sold.distinct_product_types_sold}</b></p>
                    </div>
                    <div class="dashboard__type-grid">
                        {sold
                            .ranked()
                            .into_iter()
                            .map(|(product_type, count)| view! {
                                <div class="card stat-card stat-card--small">
                                    <h3 class="stat-card__title">{product_type}</h3>
                                    <p>"Sold: " <b class="stat-card__value">{count}</b></p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn OrdersCard(#[prop(into)] filters: Signal<DashboardFilters>) -> impl IntoView {
    let cache = use_query_cache();
    let (total, set_total) = signal(None::<TotalOrders>);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let current = filters.get();
        let _ = cache.version(Q_DASHBOARD);
        let _ = cache.version(Q_ORDERS);
        let seq = request_seq.begin();
        set_total.set(None);
        spawn_local(async move {
            let result = admin::get_total_orders(&current).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(t) => set_total.set(Some(t)),
                Err(e) => log::warn!("Failed to load total orders: {}", e),
            }
        });
    });

    view! {
        <div class="card stat-card stat-card--orders">
            <span class="stat-card__title">"Total Fulfilled Orders"</span>
            <span class="stat-card__caption">"Fulfilled Orders:"</span>
            {move || match total.get() {
                Some(t) => view! { <span class="stat-card__big">{t.total_orders}</span> }.into_any(),
                None => view! { <Spinner size=SpinnerSize::Small /> }.into_any(),
            }}
        </div>
    }
}
