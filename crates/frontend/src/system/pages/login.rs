use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http::ApiError;
use crate::system::auth::context::{do_login, use_auth};

/// Server text when there is one, otherwise a generic failure.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized(message) | ApiError::Status { message, .. }
            if !message.starts_with("HTTP ") =>
        {
            message.clone()
        }
        ApiError::Network(_) | ApiError::Timeout => err.to_string(),
        _ => "Login failed".to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Успешный вход сам переключит AppShell на MainLayout
            if let Err(e) = do_login(name_val, password_val, set_auth_state).await {
                set_error_message.set(Some(login_error_message(&e)));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Opify"</h1>
                <h2>"Login"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="login-name">"Name"</label>
                        <input
                            type="text"
                            id="login-name"
                            autocomplete="username"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            type="password"
                            id="login-password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_prefers_server_text() {
        let err = ApiError::Unauthorized("Invalid credentials".into());
        assert_eq!(login_error_message(&err), "Invalid credentials");
        let bare = ApiError::Status {
            status: 500,
            message: "HTTP 500".into(),
        };
        assert_eq!(login_error_message(&bare), "Login failed");
    }
}
