use contracts::system::auth::SessionUser;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::http::{set_unauthorized_hook, ApiResult};

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }
}

/// Auth context provider component
///
/// Asks `/auth/me` once on mount; the cookie is the only session store.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Любой 401 сбрасывает сессию
    set_unauthorized_hook(move || {
        if auth_state.get_untracked().user.is_some() {
            log::warn!("session expired, signing out");
        }
        set_auth_state.set(AuthState::signed_out());
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_me().await {
                Ok(user) => {
                    log::info!("session restored for {} ({})", user.name, user.role);
                    set_auth_state.set(AuthState {
                        user: Some(user),
                        is_loading: false,
                    });
                }
                Err(e) => {
                    log::debug!("no active session: {}", e);
                    set_auth_state.set(AuthState::signed_out());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive role of the signed-in user (`Unknown` when signed out).
pub fn use_role() -> Signal<Role> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.role()))
}

/// Log in and load the user; the response body does not always carry it.
pub async fn do_login(
    name: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> ApiResult<SessionUser> {
    let response = api::login(name, password).await?;
    let user = match response.user {
        Some(user) => user,
        None => api::get_me().await?,
    };
    set_auth_state.set(AuthState {
        user: Some(user.clone()),
        is_loading: false,
    });
    Ok(user)
}

/// Server logout errors are ignored; local state is cleared regardless.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {}", e);
    }
    set_auth_state.set(AuthState::signed_out());
}
