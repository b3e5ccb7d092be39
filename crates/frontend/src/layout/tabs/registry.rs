//! Tab content registry: единственный источник правды для маппинга tab.key → View.

use crate::dashboards::d400_dashboard::DashboardPage;
use crate::domain::a003_batch::ui::details::BatchDetails;
use crate::domain::a003_batch::ui::list::BatchList;
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_product::ui::list::ProductList;
use crate::domain::a006_main_stock::ui::MainStockPage;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_returns::ui::list::ReturnsList;
use crate::system::auth::RequireRole;
use crate::system::pages::profile::ProfilePage;
use crate::usecases::scan_station::ScanStationPage;
use contracts::shared::EntityId;
use contracts::system::navigation::*;
use contracts::system::roles::{Role, Station};
use leptos::logging::log;
use leptos::prelude::*;

/// Id part of a detail key, `None` when the key is malformed.
fn detail_id(key: &str, prefix: &str) -> Option<EntityId> {
    key.strip_prefix(prefix).and_then(EntityId::parse)
}

fn bad_key(key: &str) -> AnyView {
    log!("Bad detail tab key: {}", key);
    view! { <div class="placeholder">{"Bad tab key"}</div> }.into_any()
}

/// Рендерит контент таба по ключу.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d4xx)
        // ═══════════════════════════════════════════════════════════════════
        TAB_DASHBOARD => view! {
            <RequireRole roles=vec![Role::Admin, Role::User] denied_message="Access Denied">
                <DashboardPage />
            </RequireRole>
        }
        .into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Aggregates
        // ═══════════════════════════════════════════════════════════════════
        TAB_PRODUCTS => view! {
            <RequireRole roles=vec![Role::Admin, Role::User] denied_message="Access Denied">
                <ProductList />
            </RequireRole>
        }
        .into_any(),
        TAB_ORDERS => view! { <OrderList /> }.into_any(),
        k if k.starts_with(TAB_ORDER_DETAIL_PREFIX) => {
            match detail_id(k, TAB_ORDER_DETAIL_PREFIX) {
                Some(id) => view! { <OrderDetails id=id on_close=on_close /> }.into_any(),
                None => bad_key(k),
            }
        }
        TAB_BATCHES => view! { <BatchList /> }.into_any(),
        k if k.starts_with(TAB_BATCH_DETAIL_PREFIX) => {
            match detail_id(k, TAB_BATCH_DETAIL_PREFIX) {
                Some(id) => view! { <BatchDetails id=id on_close=on_close /> }.into_any(),
                None => bad_key(k),
            }
        }
        TAB_STOCK => view! {
            <RequireRole roles=vec![Role::Admin, Role::User] denied_message="Access Denied">
                <MainStockPage focus=None />
            </RequireRole>
        }
        .into_any(),
        k if k.starts_with(TAB_STOCK_DETAIL_PREFIX) => {
            match detail_id(k, TAB_STOCK_DETAIL_PREFIX) {
                Some(id) => view! {
                    <RequireRole roles=vec![Role::Admin, Role::User] denied_message="Access Denied">
                        <MainStockPage focus=Some(id.clone()) />
                    </RequireRole>
                }
                .into_any(),
                None => bad_key(k),
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // Registers (p9xx)
        // ═══════════════════════════════════════════════════════════════════
        TAB_RETURNS => view! {
            <RequireRole roles=vec![Role::Admin, Role::User] denied_message="Access Denied">
                <ReturnsList />
            </RequireRole>
        }
        .into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Stations (u5xx)
        // ═══════════════════════════════════════════════════════════════════
        k if Station::from_tab_key(k).is_some() => match Station::from_tab_key(k) {
            Some(station) => view! {
                <RequireRole
                    roles=vec![Role::Admin, station.role()]
                    denied_message=station.denied_message()
                >
                    <ScanStationPage station=station />
                </RequireRole>
            }
            .into_any(),
            None => bad_key(k),
        },

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        TAB_PROFILE => view! { <ProfilePage /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_id() {
        assert_eq!(
            detail_id("a003_batch_detail_42", TAB_BATCH_DETAIL_PREFIX),
            Some(EntityId::from(42))
        );
        assert_eq!(detail_id("a003_batch_detail_", TAB_BATCH_DETAIL_PREFIX), None);
    }
}
