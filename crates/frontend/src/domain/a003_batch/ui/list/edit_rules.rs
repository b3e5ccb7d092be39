use contracts::query::RuleFilters;
use contracts::shared::EntityId;
use contracts::workflow::{EditPlan, RuleSelection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{admin, agents};
use crate::shared::components::{alert, LoadingIndicator, RulePicker};
use crate::shared::modal_stack::ModalHandle;
use crate::shared::query_cache::{use_query_cache, Q_BATCH, Q_BATCHES};

/// Rule and max capacity editor of one batch.
#[component]
pub fn EditBatchRulesForm(batch_id: EntityId, handle: ModalHandle) -> impl IntoView {
    let cache = use_query_cache();
    let selection = RwSignal::new(RuleSelection::default());
    let max_capacity = RwSignal::new(String::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let batch_id = StoredValue::new(batch_id);

    spawn_local(async move {
        let id = batch_id.get_value();
        let rules = agents::get_batch_rule_options(&RuleFilters::pod_only()).await;
        let attached = admin::get_batch_rules(&id).await;
        match (rules, attached) {
            (Ok(rules), Ok(attached)) => {
                let seeded = RuleSelection::for_batch(&rules, &attached);
                max_capacity.set(seeded.max_capacity_input());
                selection.set(seeded);
            }
            (Err(e), _) | (_, Err(e)) => {
                log::error!("Failed to load rules of batch {}: {}", id, e);
                alert(&e.to_string());
            }
        }
        set_loading.set(false);
    });

    let handle_for_save = handle.clone();
    let save = move |_| {
        let plan = selection.with_untracked(|s| s.plan(&max_capacity.get_untracked()));
        let update = match plan {
            Err(msg) => return alert(&msg),
            Ok(EditPlan::Close) => return handle_for_save.close(),
            Ok(EditPlan::Save(update)) => update,
        };
        set_saving.set(true);
        let handle = handle_for_save.clone();
        spawn_local(async move {
            match admin::update_batch_rules(&batch_id.get_value(), &update).await {
                Ok(_) => {
                    cache.invalidate_many(&[Q_BATCHES, Q_BATCH]);
                    handle.close();
                }
                Err(e) => {
                    log::error!("Failed to update batch rules: {}", e);
                    alert(&format!("Error updating rules: {}", e));
                }
            }
            set_saving.set(false);
        });
    };

    let handle_for_cancel = handle.clone();
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingIndicator label="Loading rules..." /> }
        >
            <p class="form-hint">
                "Edit the max capacity and select the rules that should apply to this batch."
            </p>
            <label class="form-field form-field--inline">
                <span class="form-field__label">"Max capacity"</span>
                <Input value=max_capacity input_type=InputType::Number />
            </label>
            <div class="rule-picker rule-picker--scroll">
                <RulePicker selection=selection />
            </div>
        </Show>
        <div class="form-actions">
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=saving
                on_click={
                    let handle = handle_for_cancel.clone();
                    move |_| handle.close()
                }
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || saving.get() || loading.get())
                on_click=save
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </Button>
        </div>
    }
}
