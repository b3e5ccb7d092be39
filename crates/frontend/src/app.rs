use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::query_cache::QueryCache;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(QueryCache::new());
    provide_context(ModalStackService::new());

    view! {
        <AuthProvider>
            <AppShell />
            <ModalHost />
        </AuthProvider>
    }
}
