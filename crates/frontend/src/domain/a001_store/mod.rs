use contracts::domain::a001_store::Store;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::agents;
use crate::shared::query_cache::{use_query_cache, Q_STORES};

/// Store list for filter selects; refetched when stores are invalidated.
pub fn use_stores() -> ReadSignal<Vec<Store>> {
    let cache = use_query_cache();
    let (stores, set_stores) = signal(Vec::<Store>::new());
    Effect::new(move |_| {
        let _ = cache.version(Q_STORES);
        spawn_local(async move {
            match agents::get_stores().await {
                Ok(v) => set_stores.set(v),
                Err(e) => log::warn!("Failed to load stores: {}", e),
            }
        });
    });
    stores
}

/// `<option>`s for a store select keyed by store id, after an "All stores" entry.
#[component]
pub fn StoreOptions(
    stores: ReadSignal<Vec<Store>>,
    #[prop(into)] all_label: String,
) -> impl IntoView {
    view! {
        <option value="">{all_label}</option>
        <For
            each=move || stores.get()
            key=|store| store.id.clone()
            children=|store| view! { <option value=store.id.to_string()>{store.name}</option> }
        />
    }
}
