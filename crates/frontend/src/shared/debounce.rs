use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Follows `source` after it has been quiet for `delay_ms`.
pub fn debounced(source: Signal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (settled, set_settled) = signal(source.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let value = source.get();
        // Dropping the previous Timeout cancels it
        pending.set_value(Some(Timeout::new(delay_ms, move || {
            if settled.get_untracked() != value {
                set_settled.set(value);
            }
        })));
    });
    on_cleanup(move || pending.set_value(None));

    settled
}
