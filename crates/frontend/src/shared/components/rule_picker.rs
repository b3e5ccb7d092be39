use contracts::workflow::RuleSelection;
use leptos::prelude::*;

/// Checkbox list over a [`RuleSelection`].
#[component]
pub fn RulePicker(
    selection: RwSignal<RuleSelection>,
    /// Adds the variant and store lines under each rule
    #[prop(optional)]
    detailed: bool,
) -> impl IntoView {
    move || {
        selection.with(|sel| {
            if sel.is_empty() {
                return view! { <p class="form-hint">"No rules available."</p> }.into_any();
            }
            sel.choices()
                .iter()
                .map(|choice| {
                    let id = choice.rule.id.clone();
                    let id_for_toggle = id.clone();
                    let rule = choice.rule.clone();
                    view! {
                        <label class="rule-picker__item">
                            <input
                                type="checkbox"
                                prop:checked=move || selection.with(|s| s.is_selected(&id))
                                on:change=move |_| selection.update(|s| s.toggle(&id_for_toggle))
                            />
                            <span class="rule-picker__text">
                                <span class="rule-picker__name">{rule.name.clone()}</span>
                                " "
                                <span class="rule-picker__kind">{format!("({})", rule.handling_label())}</span>
                                {detailed.then(|| view! {
                                    {rule.variant_title.clone().map(|v| view! {
                                        <div class="rule-picker__meta">{format!("Variant: {}", v)}</div>
                                    })}
                                    <div class="rule-picker__meta">
                                        {format!("Store: {}", rule.store.as_ref().map(|s| s.name.as_str()).unwrap_or("Unknown"))}
                                    </div>
                                })}
                            </span>
                        </label>
                    }
                })
                .collect_view()
                .into_any()
        })
    }
}
