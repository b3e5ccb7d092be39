//! Application Shell: корневые компоненты приложения
//!
//! - `AppShell` - auth gate (загрузка, LoginPage или MainLayout)
//! - `MainLayout` - Shell + Sidebar + Tabs

use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Opens the tab from `?active=` or the role's landing page.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();
    let (auth_state, _) = use_auth();

    let landing = auth_state.with_untracked(|s| s.role().landing_page());
    tabs_store.init_router_integration(landing);

    view! {
        <Shell left=|| view! { <Sidebar /> }.into_any() />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.with(|s| s.is_loading)
            fallback=|| view! { <div class="app-loading">"Loading auth..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.user.is_some())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
