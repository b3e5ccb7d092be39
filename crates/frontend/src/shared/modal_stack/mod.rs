use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    width: ModalWidth,
    builder: ModalBuilder,
}

/// Surface width of a modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalWidth {
    /// Confirmations and small forms.
    #[default]
    Narrow,
    /// Forms with tables (batch rules, create batch).
    Wide,
}

impl ModalWidth {
    fn class(&self) -> &'static str {
        match self {
            ModalWidth::Narrow => "modal--narrow",
            ModalWidth::Wide => "modal--wide",
        }
    }
}

/// Passed to the modal body so it can close itself after a save.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals; Escape closes only the topmost one.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Push a modal with a titled frame.
    pub fn open<F>(&self, title: impl Into<String>, width: ModalWidth, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let entry = ModalEntry {
            id,
            title: title.into(),
            width,
            builder: Arc::new(builder),
        };
        self.stack.update(|s| s.push(entry));
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    // Removing a modal inside its own click dispatch drops the handler
    // that is still running; wait one tick.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    pub fn pop_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.stack.update(|s| {
                s.pop();
            });
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack; mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if key_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                svc.pop_deferred();
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    // Lives as long as the app.
    on_keydown.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(depth, entry)| {
                    let id = entry.id;
                    let handle = ModalHandle { id, svc };
                    let body = (entry.builder)(handle);
                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            z_index=1000 + depth as i32
                            modal_class=entry.width.class()
                            on_close=Callback::new(move |_| svc.close_deferred(id))
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
