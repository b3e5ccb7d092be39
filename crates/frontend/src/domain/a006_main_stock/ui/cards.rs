use contracts::domain::a006_main_stock::MainStock;
use contracts::shared::EntityId;
use contracts::system::navigation::stock_detail_key;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{alert, confirm, EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_cache, Q_MAIN_STOCK, Q_MAIN_STOCK_PRODUCTS};
use crate::system::auth::use_role;

/// Grid of main stock cards; clicking a card selects it.
#[component]
pub fn MainStockCards(
    selected: RwSignal<Option<EntityId>>,
    /// Called with every successful load
    on_loaded: Callback<Vec<MainStock>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let cache = use_query_cache();
    let role = use_role();

    let (stocks, set_stocks) = signal(Vec::<MainStock>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let _ = cache.version(Q_MAIN_STOCK);
        set_loading.set(true);
        spawn_local(async move {
            match admin::list_main_stock().await {
                Ok(v) => {
                    set_error.set(None);
                    on_loaded.run(v.clone());
                    set_stocks.set(v);
                }
                Err(e) => {
                    log::error!("Failed to load main stock: {}", e);
                    set_error.set(Some("Failed to load main stock".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let delete_stock = move |stock: &MainStock| {
        if !confirm(&format!("Delete main stock \"{}\"?", stock.name)) {
            return;
        }
        let id = stock.id.clone();
        spawn_local(async move {
            match admin::delete_main_stock(&id).await {
                Ok(()) => {
                    if selected.get_untracked().as_ref() == Some(&id) {
                        selected.set(None);
                    }
                    cache.invalidate_many(&[Q_MAIN_STOCK, Q_MAIN_STOCK_PRODUCTS]);
                }
                Err(e) => alert(&format!("Error deleting main stock: {}", e)),
            }
        });
    };

    view! {
        <section class="stock-cards">
            <ErrorBanner error=error />
            <Show
                when=move || !(loading.get() && stocks.with(|s| s.is_empty()))
                fallback=|| view! { <LoadingIndicator label="Loading main stock..." /> }
            >
                <Show
                    when=move || !stocks.with(|s| s.is_empty())
                    fallback=|| view! { <EmptyState message="No main stock available" /> }
                >
                    <div class="card-grid">
                        <div class="card card--summary">
                            <div class="card__icon">{icon("inventory")}</div>
                            <div class="card__label">"Main stocks"</div>
                            <div class="card__value">{move || stocks.with(|s| s.len())}</div>
                        </div>
                        <For
                            each=move || stocks.get()
                            key=|stock| (stock.id.clone(), stock.quantity, stock.rules.len())
                            children=move |stock| {
                                let stock = StoredValue::new(stock);
                                let id = stock.with_value(|s| s.id.clone());
                                let is_selected = {
                                    let id = id.clone();
                                    move || selected.with(|s| s.as_ref() == Some(&id))
                                };
                                view! {
                                    <div
                                        class="card card--clickable"
                                        class:card--selected=is_selected
                                        on:click=move |_| selected.set(Some(id.clone()))
                                    >
                                        <div class="card__header">
                                            <h3 class="card__title">{stock.with_value(|s| s.name.clone())}</h3>
                                            <span on:click=|ev| ev.stop_propagation()>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Transparent
                                                    on_click=move |_| stock.with_value(|s| {
                                                        ctx.open_tab(&stock_detail_key(&s.id.to_string()), "Stock")
                                                    })
                                                >
                                                    "Open"
                                                </Button>
                                            </span>
                                            <Show when=move || role.get().can_manage_catalog()>
                                                <span on:click=|ev| ev.stop_propagation()>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Transparent
                                                        on_click=move |_| stock.with_value(|s| delete_stock(s))
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </span>
                                            </Show>
                                        </div>
                                        <div class="card__value">
                                            {stock.with_value(|s| s.quantity)}
                                            <span class="card__unit">" in stock"</span>
                                        </div>
                                        <Show when=move || role.get().sees_stock_rules()>
                                            <ul class="card__rules">
                                                {stock.with_value(|s| {
                                                    s.rules
                                                        .iter()
                                                        .map(|rule| view! {
                                                            <li>
                                                                {format!("• {}", rule.label())}
                                                                <span class="card__muted">
                                                                    {format!(" ({})", rule.store_name())}
                                                                </span>
                                                            </li>
                                                        })
                                                        .collect_view()
                                                })}
                                            </ul>
                                        </Show>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
