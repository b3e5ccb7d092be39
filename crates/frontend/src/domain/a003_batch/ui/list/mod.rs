mod edit_rules;

use contracts::domain::a002_rule::Rule;
use contracts::domain::a003_batch::Batch;
use contracts::query::{BatchFilters, RuleFilters};
use contracts::shared::PagedResponse;
use contracts::system::navigation::batch_detail_key;
use contracts::workflow::can_export;
use edit_rules::EditBatchRulesForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::actions::export_batch_excel;
use crate::api::agents;
use crate::layout::global_context::use_app_context;
use crate::shared::components::{
    CapacityBar, EmptyState, ErrorBanner, LoadingIndicator, PageHeader, PaginationControls,
    StatusPill,
};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::modal_stack::{ModalStackService, ModalWidth};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query_cache, RequestSeq, Q_BATCHES, Q_RULES};
use crate::system::auth::use_role;

const BATCHES_PAGE_SIZE: u32 = 10;

#[component]
pub fn BatchList() -> impl IntoView {
    let ctx = use_app_context();
    let cache = use_query_cache();
    let role = use_role();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let filters = RwSignal::new(BatchFilters {
        limit: BATCHES_PAGE_SIZE,
        ..BatchFilters::default()
    });
    let (rules, set_rules) = signal(Vec::<Rule>::new());
    let (rules_loading, set_rules_loading) = signal(true);
    let (response, set_response) = signal(None::<PagedResponse<Batch>>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let request_seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = cache.version(Q_RULES);
        spawn_local(async move {
            match agents::get_batch_rule_options(&RuleFilters::pod_only()).await {
                Ok(v) => set_rules.set(v),
                Err(e) => log::warn!("Failed to load rules: {}", e),
            }
            set_rules_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let current = filters.get();
        let _ = cache.version(Q_BATCHES);
        let seq = request_seq.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = agents::get_batches(&current).await;
            if !request_seq.is_current(seq) {
                return;
            }
            match result {
                Ok(r) => {
                    set_error.set(None);
                    set_response.set(Some(r));
                }
                Err(e) => {
                    log::error!("Failed to load batches: {}", e);
                    set_error.set(Some("Failed to load batches".into()));
                }
            }
            set_loading.set(false);
        });
    });

    let open_batch = move |batch: &Batch| {
        ctx.open_tab(&batch_detail_key(&batch.id.to_string()), &batch.display_name());
    };

    let edit_rules = move |batch: &Batch| {
        let batch_id = batch.id.clone();
        modal_stack.open(
            format!("Edit rules for {}", batch.display_name()),
            ModalWidth::Narrow,
            move |handle| {
                view! { <EditBatchRulesForm batch_id=batch_id.clone() handle=handle /> }.into_any()
            },
        );
    };

    let batches = move || response.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default());
    let page = Signal::derive(move || filters.with(|f| f.page));
    let page_count = Signal::derive(move || response.with(|r| r.as_ref().map_or(1, |r| r.page_count())));
    let has_prev = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_prev())));
    let has_next = Signal::derive(move || response.with(|r| r.as_ref().is_some_and(|r| r.has_next())));

    view! {
        <PageFrame page_id="a003_batch--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Batches"
                on_refresh=Callback::new(move |_| cache.invalidate(Q_BATCHES))
            >
                <label class="filter-field">
                    <span class="filter-field__label">"Filter by Rule"</span>
                    <select
                        disabled=move || rules_loading.get()
                        prop:value=move || filters.with(|f| f.rule_name.clone())
                        on:change=move |ev| {
                            let rule_name = event_target_value(&ev);
                            filters.update(|f| {
                                f.rule_name = rule_name;
                                f.page = 1;
                            });
                        }
                    >
                        <option value="">"All Rules"</option>
                        <For
                            each=move || rules.get()
                            key=|rule| rule.id.clone()
                            children=|rule| view! { <option value=rule.name.clone()>{rule.name.clone()}</option> }
                        />
                    </select>
                </label>
            </PageHeader>
            <ErrorBanner error=error />
            <div class="page__content">
                <Show
                    when=move || !(loading.get() && response.with(|r| r.is_none()))
                    fallback=|| view! { <LoadingIndicator label="Loading batches..." /> }
                >
                    <Show
                        when=move || !batches().is_empty()
                        fallback=|| view! { <EmptyState message="No batches found" /> }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Capacity"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Created At"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=batches
                                    key=|batch| (batch.id.clone(), batch.capacity, batch.status.clone())
                                    children=move |batch| {
                                        let batch = StoredValue::new(batch);
                                        let exportable = batch.with_value(can_export);
                                        view! {
                                            <tr
                                                class="table__row--clickable"
                                                on:click=move |_| batch.with_value(|b| open_batch(b))
                                            >
                                                <TableCell>{batch.with_value(|b| b.display_name())}</TableCell>
                                                <TableCell>
                                                    <CapacityBar
                                                        capacity=batch.with_value(|b| b.capacity)
                                                        max_capacity=batch.with_value(|b| b.max_capacity)
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <StatusPill status=batch.with_value(|b| b.status.clone()) />
                                                </TableCell>
                                                <TableCell>
                                                    {batch.with_value(|b| format_optional_datetime(b.created_at.as_deref()))}
                                                </TableCell>
                                                <td
                                                    class="table__actions"
                                                    on:click=|ev| ev.stop_propagation()
                                                >
                                                    <Show when=move || role.get().can_edit_batch_rules()>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Secondary
                                                            on_click=move |_| batch.with_value(|b| edit_rules(b))
                                                        >
                                                            "Edit rules"
                                                        </Button>
                                                    </Show>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        disabled=!exportable
                                                        on_click=move |_| batch.with_value(|b| {
                                                            export_batch_excel(b, &role.get_untracked(), cache)
                                                        })
                                                    >
                                                        "Download Excel"
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </Show>
                </Show>
                <PaginationControls
                    page=page
                    page_count=page_count
                    has_prev=has_prev
                    has_next=has_next
                    on_page_change=Callback::new(move |p| filters.update(|f| f.page = p))
                    total=Signal::derive(move || response.with(|r| r.as_ref().and_then(|r| r.total)))
                />
            </div>
        </PageFrame>
    }
}
