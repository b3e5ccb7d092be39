//! Create dialogs opened from the dashboard.

use contracts::domain::a001_store::NewStore;
use contracts::domain::a002_rule::{NewRule, RuleForm};
use contracts::domain::a003_batch::NewBatch;
use contracts::domain::a006_main_stock::NewMainStock;
use contracts::query::RuleFilters;
use contracts::workflow::RuleSelection;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::admin;
use crate::domain::a001_store::use_stores;
use crate::shared::components::{alert, LoadingIndicator, RulePicker};
use crate::shared::modal_stack::ModalHandle;
use crate::shared::query_cache::{use_query_cache, Q_BATCHES, Q_MAIN_STOCK, Q_RULES, Q_STORES};

#[component]
fn FormActions(
    handle: ModalHandle,
    #[prop(into)] pending: Signal<bool>,
    submit_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                "Cancel"
            </Button>
            <button type="submit" class="button button--primary" disabled=move || pending.get()>
                {move || if pending.get() { "Creating..." } else { submit_label }}
            </button>
        </div>
    }
}

// ============================================================================
// Store
// ============================================================================

#[component]
pub fn CreateStoreForm(handle: ModalHandle) -> impl IntoView {
    let cache = use_query_cache();
    let shop_domain = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let access_token = RwSignal::new(String::new());
    let api_secret = RwSignal::new(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let handle_for_submit = handle.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let store = NewStore {
            shop_domain: shop_domain.get_untracked(),
            name: name.get_untracked(),
            access_token: access_token.get_untracked(),
            api_secret: api_secret.get_untracked(),
        };
        if let Err(msg) = store.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_pending.set(true);
        set_error.set(None);
        let handle = handle_for_submit.clone();
        spawn_local(async move {
            match admin::create_store(&store).await {
                Ok(_) => {
                    cache.invalidate(Q_STORES);
                    handle.close();
                }
                Err(e) => {
                    log::error!("Error creating store: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <label class="form-field">
                <span class="form-field__label">"Shop Domain"</span>
                <Input value=shop_domain placeholder="example.myshopify.com" />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Store Name"</span>
                <Input value=name placeholder="My Store" />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Access Token"</span>
                <Input value=access_token input_type=InputType::Password placeholder="Enter access token" />
            </label>
            <label class="form-field">
                <span class="form-field__label">"API Secret"</span>
                <Input value=api_secret input_type=InputType::Password placeholder="Enter API secret" />
            </label>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <FormActions handle=handle pending=pending submit_label="Create" />
        </form>
    }
}

// ============================================================================
// Rule
// ============================================================================

#[component]
pub fn CreateRuleForm(handle: ModalHandle) -> impl IntoView {
    let cache = use_query_cache();
    let stores = use_stores();
    let selected_store = RwSignal::new(String::new());
    let selected_type = RwSignal::new(String::new());
    let selected_variant = RwSignal::new(String::new());
    let is_pod = RwSignal::new(true);
    let requires_stock = RwSignal::new(false);
    let (product_types, set_product_types) = signal(Vec::<String>::new());
    let (variant_titles, set_variant_titles) = signal(Vec::<String>::new());
    let (variants_loading, set_variants_loading) = signal(false);
    let (pending, set_pending) = signal(false);

    Effect::new(move |_| {
        let store = selected_store.get();
        set_product_types.set(Vec::new());
        selected_type.set(String::new());
        if store.is_empty() {
            return;
        }
        spawn_local(async move {
            match admin::list_product_types_by_store(&store).await {
                Ok(types) => set_product_types.set(types),
                Err(e) => log::error!("Failed to fetch product types: {}", e),
            }
        });
    });

    Effect::new(move |_| {
        let store = selected_store.get();
        let product_type = selected_type.get();
        selected_variant.set(String::new());
        set_variant_titles.set(Vec::new());
        if store.is_empty() || product_type.is_empty() {
            return;
        }
        set_variants_loading.set(true);
        spawn_local(async move {
            match admin::list_variant_titles_by_product_type(&store, &product_type).await {
                Ok(titles) => set_variant_titles.set(titles),
                Err(e) => log::error!("Failed to fetch variant titles: {}", e),
            }
            set_variants_loading.set(false);
        });
    });

    let handle_for_submit = handle.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RuleForm {
            store_name: selected_store.get_untracked(),
            product_type: selected_type.get_untracked(),
            variant_title: selected_variant.get_untracked(),
            is_pod: is_pod.get_untracked(),
            requires_stock: requires_stock.get_untracked(),
        };
        let rule = match NewRule::from_form(&form) {
            Ok(rule) => rule,
            Err(msg) => return alert(&msg),
        };
        set_pending.set(true);
        let handle = handle_for_submit.clone();
        spawn_local(async move {
            match admin::create_rule(&rule).await {
                Ok(_) => {
                    cache.invalidate(Q_RULES);
                    handle.close();
                }
                Err(e) => {
                    log::error!("Error creating rule: {}", e);
                    alert(&e.to_string());
                }
            }
            set_pending.set(false);
        });
    };

    let batch_name_preview = move || {
        let variant = selected_variant.get();
        format!(
            "Batch names: \"{} - {}\"",
            selected_type.get(),
            if variant.is_empty() { "All Variants".to_string() } else { variant }
        )
    };

    view! {
        <form class="form" on:submit=on_submit>
            <label class="form-field">
                <span class="form-field__label">"Store"</span>
                <select
                    prop:value=move || selected_store.get()
                    on:change=move |ev| selected_store.set(event_target_value(&ev))
                >
                    <option value="">"-- Select a store --"</option>
                    {move || stores
                        .get()
                        .into_iter()
                        .map(|s| view! { <option value=s.name.clone()>{s.name.clone()}</option> })
                        .collect_view()}
                </select>
            </label>

            <Show when=move || !selected_store.get().is_empty()>
                <label class="form-field">
                    <span class="form-field__label">"Select Product Type"</span>
                    <select
                        prop:value=move || selected_type.get()
                        on:change=move |ev| selected_type.set(event_target_value(&ev))
                        disabled=move || product_types.with(|t| t.is_empty())
                    >
                        <option value="">"-- Select a product type --"</option>
                        {move || product_types
                            .get()
                            .into_iter()
                            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </Show>

            <Show when=move || !selected_type.get().is_empty() && variants_loading.get()>
                <div class="form-hint">"Loading variant titles..."</div>
            </Show>

            <Show when=move || !selected_type.get().is_empty() && !variant_titles.with(|v| v.is_empty())>
                <label class="form-field">
                    <span class="form-field__label">
                        {move || format!("Select Variant Title ({} unique)", variant_titles.with(|v| v.len()))}
                    </span>
                    <select
                        prop:value=move || selected_variant.get()
                        on:change=move |ev| selected_variant.set(event_target_value(&ev))
                    >
                        <option value="">{move || format!("-- All variants for {} --", selected_type.get())}</option>
                        {move || variant_titles
                            .get()
                            .into_iter()
                            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                            .collect_view()}
                    </select>
                    <p class="form-hint">{batch_name_preview}</p>
                </label>
            </Show>

            <div class="form-field">
                <span class="form-field__label">"Type"</span>
                <label class="form-radio">
                    <input type="radio" name="rule-type" prop:checked=move || is_pod.get() on:change=move |_| is_pod.set(true) />
                    "POD"
                </label>
                <label class="form-radio">
                    <input type="radio" name="rule-type" prop:checked=move || !is_pod.get() on:change=move |_| is_pod.set(false) />
                    "Stock"
                </label>
            </div>

            <div class="form-field">
                <span class="form-field__label">"Requires Stock"</span>
                <label class="form-radio">
                    <input type="radio" name="requires-stock" prop:checked=move || requires_stock.get() on:change=move |_| requires_stock.set(true) />
                    "Yes"
                </label>
                <label class="form-radio">
                    <input type="radio" name="requires-stock" prop:checked=move || !requires_stock.get() on:change=move |_| requires_stock.set(false) />
                    "No"
                </label>
            </div>

            <FormActions handle=handle pending=pending submit_label="Create" />
        </form>
    }
}

// ============================================================================
// Batch
// ============================================================================

#[component]
pub fn CreateBatchForm(handle: ModalHandle) -> impl IntoView {
    let cache = use_query_cache();
    let batch_name = RwSignal::new(String::new());
    let max_capacity = RwSignal::new(String::new());
    let selection = RwSignal::new(RuleSelection::default());
    let (loading, set_loading) = signal(true);
    let (pending, set_pending) = signal(false);

    Effect::new(move |_| {
        let _ = cache.version(Q_RULES);
        spawn_local(async move {
            match admin::list_rules(&RuleFilters::default()).await {
                Ok(rules) => selection.set(RuleSelection::fresh(&rules)),
                Err(e) => log::error!("Failed to load rules: {}", e),
            }
            set_loading.set(false);
        });
    });

    let handle_for_submit = handle.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let rule_ids = selection.with_untracked(|s| s.selected_ids());
        let batch = match NewBatch::validate(
            &batch_name.get_untracked(),
            &max_capacity.get_untracked(),
            &rule_ids,
        ) {
            Ok(batch) => batch,
            Err(msg) => return alert(&msg),
        };
        set_pending.set(true);
        let handle = handle_for_submit.clone();
        spawn_local(async move {
            match admin::create_batch(&batch).await {
                Ok(_) => {
                    cache.invalidate(Q_BATCHES);
                    handle.close();
                }
                Err(e) => {
                    log::error!("Error creating batch: {}", e);
                    alert(&e.to_string());
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <label class="form-field">
                <span class="form-field__label">"Batch Name"</span>
                <Input value=batch_name placeholder="Enter batch name (optional)" />
            </label>
            <label class="form-field">
                <span class="form-field__label">"Max Capacity"</span>
                <Input value=max_capacity input_type=InputType::Number placeholder="Enter max items per batch" />
            </label>
            <div class="form-field">
                <span class="form-field__label">"Select Product Type Rules"</span>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingIndicator label="Loading rules..." /> }
                >
                    <div class="rule-picker">
                        <RulePicker selection=selection />
                    </div>
                </Show>
            </div>
            <FormActions handle=handle pending=pending submit_label="Create Batch" />
        </form>
    }
}

// ============================================================================
// Main stock
// ============================================================================

#[component]
pub fn CreateMainStockForm(handle: ModalHandle) -> impl IntoView {
    let cache = use_query_cache();
    let name = RwSignal::new(String::new());
    let selection = RwSignal::new(RuleSelection::default());
    let (loading, set_loading) = signal(true);
    let (pending, set_pending) = signal(false);

    Effect::new(move |_| {
        let _ = cache.version(Q_RULES);
        spawn_local(async move {
            match admin::list_rules(&RuleFilters::stock_candidates()).await {
                Ok(rules) => selection.set(RuleSelection::fresh(&rules)),
                Err(e) => log::error!("Failed to load rules: {}", e),
            }
            set_loading.set(false);
        });
    });

    let handle_for_submit = handle.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let rule_ids = selection.with_untracked(|s| s.selected_ids());
        let stock = match NewMainStock::validate(&name.get_untracked(), &rule_ids) {
            Ok(stock) => stock,
            Err(msg) => return alert(&msg),
        };
        set_pending.set(true);
        let handle = handle_for_submit.clone();
        spawn_local(async move {
            match admin::create_main_stock(&stock).await {
                Ok(_) => {
                    cache.invalidate(Q_MAIN_STOCK);
                    handle.close();
                }
                Err(e) => {
                    log::error!("Error creating main stock: {}", e);
                    let message = match e.status() {
                        Some(_) => e.to_string(),
                        None => "Failed to create main stock".to_string(),
                    };
                    alert(&message);
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <label class="form-field">
                <span class="form-field__label">"Main Stock Name"</span>
                <Input value=name placeholder="Enter main stock name" />
            </label>
            <div class="form-field">
                <span class="form-field__label">"Select Product Type Rules"</span>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingIndicator label="Loading rules..." /> }
                >
                    <div class="rule-picker">
                        <RulePicker selection=selection detailed=true />
                    </div>
                </Show>
            </div>
            <FormActions handle=handle pending=pending submit_label="Create Main Stock" />
        </form>
    }
}
