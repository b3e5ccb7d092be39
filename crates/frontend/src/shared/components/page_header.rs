use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Header row of a tab page: title, optional subtitle, actions on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Adds a refresh button before the actions
    #[prop(optional)]
    on_refresh: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <div class="page__subtitle">{s}</div> })}
            </div>
            <div class="page__header-actions">
                {on_refresh.map(|refresh| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| refresh.run(())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                })}
                {children.map(|c| c())}
            </div>
        </div>
    }
}
