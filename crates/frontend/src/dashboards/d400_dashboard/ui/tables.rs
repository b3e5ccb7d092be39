use contracts::domain::a001_store::Store;
use contracts::domain::a002_rule::Rule;
use contracts::query::RuleFilters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::shared::components::{alert, confirm, LoadingIndicator};
use crate::shared::query_cache::{use_query_cache, Q_RULES};

#[component]
pub fn StoreTable(stores: ReadSignal<Vec<Store>>) -> impl IntoView {
    view! {
        <section class="details-section">
            <h2 class="details-section__title">"Stores"</h2>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Domain"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || stores.get()
                        key=|store| store.id.clone()
                        children=|store| view! {
                            <TableRow>
                                <TableCell>{store.name}</TableCell>
                                <TableCell>{store.shop_domain.unwrap_or_default()}</TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </section>
    }
}

#[component]
pub fn RulesTable() -> impl IntoView {
    let cache = use_query_cache();
    let (rules, set_rules) = signal(Vec::<Rule>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = cache.version(Q_RULES);
        spawn_local(async move {
            match admin::list_rules(&RuleFilters::default()).await {
                Ok(v) => set_rules.set(v),
                Err(e) => log::warn!("Failed to load rules: {}", e),
            }
            set_loading.set(false);
        });
    });

    let handle_delete = move |rule: Rule| {
        if !confirm("Are you sure you want to delete this rule?") {
            return;
        }
        spawn_local(async move {
            match admin::delete_rule(&rule.id).await {
                Ok(()) => cache.invalidate(Q_RULES),
                Err(e) => alert(&e.to_string()),
            }
        });
    };

    view! {
        <section class="details-section">
            <h2 class="details-section__title">"Rules"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingIndicator label="Loading..." /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Rule Name"</TableHeaderCell>
                            <TableHeaderCell>"Store Name"</TableHeaderCell>
                            <TableHeaderCell>"Rule Type"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rules.get()
                            key=|rule| rule.id.clone()
                            children=move |rule| {
                                let name = rule.display_name();
                                let store = rule.store_name().to_string();
                                let kind = if rule.is_pod { "POD" } else { "Stock" };
                                view! {
                                    <TableRow>
                                        <TableCell>{name}</TableCell>
                                        <TableCell>{store}</TableCell>
                                        <TableCell>{kind}</TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| handle_delete(rule.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </section>
    }
}
