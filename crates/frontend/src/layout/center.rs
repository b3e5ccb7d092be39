use crate::layout::global_context::use_app_context;
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Tab strip plus the stacked tab pages.
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_app_context();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key = tab.key.clone();
                        let key_for_active = key.clone();
                        let key_for_close = key.clone();
                        let title_key = key.clone();
                        let title = move || {
                            tabs_store.opened.with(|tabs| {
                                tabs.iter()
                                    .find(|t| t.key == title_key)
                                    .map(|t| t.title.clone())
                                    .unwrap_or_default()
                            })
                        };
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=move || {
                                    tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str()))
                                }
                                on:click=move |_| tabs_store.activate_tab(&key)
                            >
                                <span class="tabs__title">{title}</span>
                                <button
                                    class="tabs__close"
                                    title="Close"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        tabs_store.close_tab(&key_for_close);
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
