use leptos::prelude::*;

/// Product thumbnail; hovering shows the full-size image next to it.
#[component]
pub fn ImagePreview(
    src: Option<String>,
    #[prop(optional, into)] alt: String,
    #[prop(optional)] size: Option<u32>,
) -> impl IntoView {
    let size = size.unwrap_or(48);
    let hovered = RwSignal::new(false);

    match src.filter(|s| !s.trim().is_empty()) {
        None => view! {
            <div class="thumb thumb--empty" style=format!("width: {size}px; height: {size}px;")>
                "—"
            </div>
        }
        .into_any(),
        Some(src) => {
            let preview_src = src.clone();
            let preview_alt = alt.clone();
            view! {
                <div
                    class="thumb"
                    on:mouseenter=move |_| hovered.set(true)
                    on:mouseleave=move |_| hovered.set(false)
                >
                    <img
                        src=src
                        alt=alt
                        loading="lazy"
                        style=format!("width: {size}px; height: {size}px; object-fit: cover;")
                    />
                    <Show when=move || hovered.get()>
                        <div class="thumb__preview">
                            <img src=preview_src.clone() alt=preview_alt.clone() />
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}
