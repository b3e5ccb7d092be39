mod cards;
mod products;
mod stock_items;

use contracts::domain::a006_main_stock::MainStock;
use contracts::shared::EntityId;
use contracts::system::navigation::stock_detail_key;
use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{PAGE_CAT_DASHBOARD, PAGE_CAT_DETAIL};
use crate::system::auth::use_role;
use cards::MainStockCards;
use products::MainStockProducts;
use stock_items::StockItemsList;

/// Stock tab: main stock cards, products of the selected stock, and the
/// stock items editor for roles that maintain inventory.
///
/// With `focus` the page is a detail tab opened on one stock.
#[component]
pub fn MainStockPage(focus: Option<EntityId>) -> impl IntoView {
    let tabs = use_app_context();
    let role = use_role();
    let is_detail = focus.is_some();
    let selected = RwSignal::new(focus.clone());

    let on_loaded = Callback::new(move |stocks: Vec<MainStock>| {
        let Some(id) = focus.as_ref() else {
            return;
        };
        if let Some(stock) = stocks.iter().find(|s| &s.id == id) {
            let id_str = id.to_string();
            tabs.update_tab_title(
                &stock_detail_key(&id_str),
                &detail_tab_label("Stock", pick_identifier(Some(&stock.name), None, &id_str)),
            );
        }
    });

    let (page_id, category) = if is_detail {
        ("a006_main_stock--detail", PAGE_CAT_DETAIL)
    } else {
        ("a006_main_stock--dashboard", PAGE_CAT_DASHBOARD)
    };

    view! {
        <PageFrame page_id=page_id category=category>
            <div class="page__header">
                <h1 class="page__title">"Stock"</h1>
            </div>
            <div class="page__content stock-page">
                <MainStockCards selected=selected on_loaded=on_loaded />
                {move || {
                    selected
                        .get()
                        .map(|id| view! { <MainStockProducts stock_id=id /> })
                }}
                <Show when=move || role.get().can_edit_stock_items()>
                    <StockItemsList />
                </Show>
            </div>
        </PageFrame>
    }
}
