use leptos::prelude::*;
use thaw::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::use_auth;

/// Signed-in user card.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <PageFrame page_id="sys_profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"My account"</h1>
            </div>
            <div class="page__content">
                {move || match auth_state.get().user {
                    None => view! { <p>"Not logged in"</p> }.into_any(),
                    Some(user) => view! {
                        <Card>
                            <h3 class="details-section__title">"Logged in as:"</h3>
                            <dl class="details-grid">
                                <dt>"ID"</dt>
                                <dd>{user.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into())}</dd>
                                <dt>"Name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone().unwrap_or_else(|| "-".into())}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role.to_string()}</dd>
                            </dl>
                        </Card>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
