use contracts::domain::a003_batch::Batch;
use contracts::domain::a009_batch_file::UploadedFile;
use contracts::shared::EntityId;
use contracts::system::navigation::batch_detail_key;
use contracts::system::roles::Role;
use contracts::workflow::{on_files_downloaded, zip_file_name};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::super::actions::advance_batch;
use crate::api::agents;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::components::alert;
use crate::shared::export::download_blob;
use crate::shared::query_cache::{QueryCache, RequestSeq, Q_BATCH, Q_BATCHES, Q_BATCH_FILES};

#[derive(Clone, Copy)]
pub struct BatchDetailsViewModel {
    pub id: StoredValue<EntityId>,
    pub batch: RwSignal<Option<Batch>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub files: RwSignal<Vec<UploadedFile>>,
    pub files_loading: RwSignal<bool>,
    pub files_error: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
    pub zipping: RwSignal<bool>,
    batch_seq: RequestSeq,
    files_seq: RequestSeq,
    cache: QueryCache,
}

impl BatchDetailsViewModel {
    pub fn new(id: EntityId, cache: QueryCache) -> Self {
        Self {
            id: StoredValue::new(id),
            batch: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            files: RwSignal::new(Vec::new()),
            files_loading: RwSignal::new(true),
            files_error: RwSignal::new(false),
            uploading: RwSignal::new(false),
            zipping: RwSignal::new(false),
            batch_seq: RequestSeq::new(),
            files_seq: RequestSeq::new(),
            cache,
        }
    }

    pub fn load(&self, tabs: AppGlobalContext) {
        let this = *self;
        Effect::new(move |_| {
            let _ = this.cache.version(Q_BATCH);
            let _ = this.cache.version(Q_BATCHES);
            let id = this.id.get_value();
            let seq = this.batch_seq.begin();
            spawn_local(async move {
                let result = agents::get_batch_by_id(&id).await;
                if !this.batch_seq.is_current(seq) {
                    return;
                }
                match result {
                    Ok(batch) => {
                        let id_text = id.to_string();
                        let label = pick_identifier(batch.name.as_deref(), None, &id_text);
                        tabs.update_tab_title(
                            &batch_detail_key(&id_text),
                            &detail_tab_label("Batch", label),
                        );
                        this.error.set(None);
                        this.batch.set(Some(batch));
                    }
                    Err(e) => {
                        log::error!("Error loading batch {}: {}", id, e);
                        this.error.set(Some(format!("Error loading batch: {}", e)));
                    }
                }
                this.loading.set(false);
            });
        });

        Effect::new(move |_| {
            let _ = this.cache.version(Q_BATCH_FILES);
            let id = this.id.get_value();
            let seq = this.files_seq.begin();
            spawn_local(async move {
                let result = agents::get_uploaded_files(&id).await;
                if !this.files_seq.is_current(seq) {
                    return;
                }
                match result {
                    Ok(files) => {
                        this.files_error.set(false);
                        this.files.set(files);
                    }
                    Err(e) => {
                        log::warn!("Error loading files of batch {}: {}", id, e);
                        this.files_error.set(true);
                    }
                }
                this.files_loading.set(false);
            });
        });
    }

    pub fn upload(&self, files: Vec<File>, role: &Role, on_done: impl FnOnce() + 'static) {
        if files.is_empty() || self.uploading.get_untracked() {
            return;
        }
        if !role.can_upload_batch_files() {
            alert("You don't have permission to upload files.");
            return;
        }
        let this = *self;
        this.uploading.set(true);
        spawn_local(async move {
            match agents::upload_files(&files, &this.id.get_value()).await {
                Ok(response) => {
                    log::info!("Uploaded {} file(s)", response.uploaded_count());
                    this.cache.invalidate(Q_BATCH_FILES);
                    on_done();
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    alert(&format!("Upload failed: {}", e));
                }
            }
            this.uploading.set(false);
        });
    }

    /// Saves one file; a printer pulling files of a designed batch starts printing it.
    pub fn download(&self, file: UploadedFile, role: Role) {
        let this = *self;
        spawn_local(async move {
            let blob = match agents::download_file(&file.id).await {
                Ok(blob) => blob,
                Err(e) => {
                    log::error!("Download failed: {}", e);
                    alert(&format!("Download failed: {}", e));
                    return;
                }
            };
            if let Err(e) = download_blob(&blob, &file.download_name()) {
                log::error!("Download failed: {}", e);
                return;
            }
            if let Some(batch) = this.batch.get_untracked() {
                if let Some(next) = on_files_downloaded(&role, &batch.status) {
                    advance_batch(&batch, next, this.cache);
                }
            }
        });
    }

    pub fn download_zip(&self) {
        if self.zipping.get_untracked() {
            return;
        }
        let this = *self;
        let id = this.id.get_value();
        let name = this.batch.with_untracked(|b| b.as_ref().and_then(|b| b.name.clone()));
        this.zipping.set(true);
        spawn_local(async move {
            match agents::download_batch_files(&id).await {
                Ok(blob) => {
                    if let Err(e) = download_blob(&blob, &zip_file_name(name.as_deref(), &id)) {
                        log::error!("Zip download failed: {}", e);
                    }
                }
                Err(e) => {
                    log::error!("Zip download failed: {}", e);
                    alert(&format!("Download failed: {}", e));
                }
            }
            this.zipping.set(false);
        });
    }
}
