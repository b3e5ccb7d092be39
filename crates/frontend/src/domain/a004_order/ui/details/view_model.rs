use contracts::domain::a004_order::{Order, ReplacementRequest, StatusUpdate};
use contracts::enums::ProductionStatus;
use contracts::shared::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::agents;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::components::alert;
use crate::shared::query_cache::{QueryCache, RequestSeq, Q_BATCH, Q_BATCHES, Q_ORDER, Q_ORDERS};
use contracts::system::navigation::order_detail_key;

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: StoredValue<EntityId>,
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Item or unit id with a request in flight
    pub busy: RwSignal<Option<EntityId>>,
    request_seq: RequestSeq,
    cache: QueryCache,
}

impl OrderDetailsViewModel {
    pub fn new(id: EntityId, cache: QueryCache) -> Self {
        Self {
            id: StoredValue::new(id),
            order: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            busy: RwSignal::new(None),
            request_seq: RequestSeq::new(),
            cache,
        }
    }

    /// Loads the order now and again whenever orders are invalidated.
    pub fn load(&self, tabs: AppGlobalContext) {
        let this = *self;
        Effect::new(move |_| {
            let _ = this.cache.version(Q_ORDER);
            let _ = this.cache.version(Q_ORDERS);
            let id = this.id.get_value();
            let seq = this.request_seq.begin();
            spawn_local(async move {
                let result = agents::get_order_by_id(&id).await;
                if !this.request_seq.is_current(seq) {
                    return;
                }
                match result {
                    Ok(order) => {
                        let key = order_detail_key(&id.to_string());
                        let id_text = id.to_string();
                        let label = pick_identifier(None, order.order_number.as_deref(), &id_text);
                        tabs.update_tab_title(&key, &detail_tab_label("Order", label));
                        this.error.set(None);
                        this.order.set(Some(order));
                    }
                    Err(e) => {
                        log::error!("Error loading order {}: {}", id, e);
                        this.error.set(Some("Error loading order".into()));
                    }
                }
                this.loading.set(false);
            });
        });
    }

    fn refresh(&self) {
        self.cache
            .invalidate_many(&[Q_ORDER, Q_ORDERS, Q_BATCH, Q_BATCHES]);
    }

    pub fn change_item_status(&self, item_id: EntityId, status: ProductionStatus) {
        let this = *self;
        this.busy.set(Some(item_id.clone()));
        spawn_local(async move {
            match agents::item_status_update(&item_id, &StatusUpdate::new(status)).await {
                Ok(_) => this.refresh(),
                Err(e) => {
                    log::error!("Failed to update item {}: {}", item_id, e);
                    alert(&e.to_string());
                }
            }
            this.busy.set(None);
        });
    }

    pub fn change_all_items_status(&self, status: ProductionStatus) {
        let this = *self;
        let order_id = this.id.get_value();
        this.busy.set(Some(order_id.clone()));
        spawn_local(async move {
            match agents::bulk_update_order_items_status(&order_id, &status).await {
                Ok(_) => this.refresh(),
                Err(e) => {
                    log::error!("Bulk status update failed for order {}: {}", order_id, e);
                    alert(&e.to_string());
                }
            }
            this.busy.set(None);
        });
    }

    /// Sends a replacement request; `false` when the reason was rejected locally.
    pub fn replace_unit(&self, unit_id: EntityId, reason: &str) -> bool {
        let request = match ReplacementRequest::new(reason) {
            Ok(request) => request,
            Err(msg) => {
                alert(&msg);
                return false;
            }
        };
        let this = *self;
        this.busy.set(Some(unit_id.clone()));
        spawn_local(async move {
            match agents::replacement(&unit_id, &request).await {
                Ok(_) => this.refresh(),
                Err(e) => {
                    log::error!("Replacement failed for unit {}: {}", unit_id, e);
                    alert(&e.to_string());
                }
            }
            this.busy.set(None);
        });
        true
    }

    pub fn is_busy(&self, id: &EntityId) -> bool {
        self.busy.with(|busy| busy.as_ref() == Some(id))
    }
}
