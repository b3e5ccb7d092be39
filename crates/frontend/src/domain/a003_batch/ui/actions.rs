//! Batch actions shared by the list and the detail page.

use contracts::domain::a003_batch::Batch;
use contracts::enums::ProductionStatus;
use contracts::system::roles::Role;
use contracts::workflow::export::EXPORT_SHEET_NAME;
use contracts::workflow::{batch_rows, can_export, on_excel_exported, xlsx_file_name};
use leptos::task::spawn_local;

use crate::api::agents;
use crate::shared::components::alert;
use crate::shared::export::export_rows_to_xlsx;
use crate::shared::query_cache::{QueryCache, Q_BATCH, Q_BATCHES};

/// Moves the batch to `status` and refreshes batch views.
pub fn advance_batch(batch: &Batch, status: ProductionStatus, cache: QueryCache) {
    let id = batch.id.clone();
    spawn_local(async move {
        match agents::update_batch_status(&id, &status).await {
            Ok(_) => {
                log::info!("Batch {} moved to {}", id, status);
                cache.invalidate_many(&[Q_BATCHES, Q_BATCH]);
            }
            Err(e) => log::error!("Failed to update batch status: {}", e),
        }
    });
}

/// Writes the unit sheet of a full batch; a designer exporting a fresh
/// batch starts designing it.
pub fn export_batch_excel(batch: &Batch, role: &Role, cache: QueryCache) {
    if !can_export(batch) {
        return;
    }
    if let Some(next) = on_excel_exported(role, &batch.status) {
        advance_batch(batch, next, cache);
    }
    if let Err(e) = export_rows_to_xlsx(&batch_rows(batch), EXPORT_SHEET_NAME, &xlsx_file_name(batch)) {
        log::error!("Excel export failed: {}", e);
        alert(&e);
    }
}
