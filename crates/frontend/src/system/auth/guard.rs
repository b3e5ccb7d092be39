use contracts::system::roles::Role;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for the listed roles.
///
/// UI gating only; the backend re-checks every request.
#[component]
pub fn RequireRole(
    roles: Vec<Role>,
    /// Fallback text, e.g. "Access Denied - Printers Only"
    #[prop(into)]
    denied_message: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let allowed = move || auth_state.with(|s| roles.contains(&s.role()));

    view! {
        <Show
            when=allowed
            fallback=move || view! { <div class="access-denied">{denied_message.clone()}</div> }
        >
            {children()}
        </Show>
    }
}
