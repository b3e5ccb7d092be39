//! Client-side orchestration of the production workflow.
//!
//! The backend validates every transition. These rules only decide which
//! affordances the console offers and which endpoint a scan hits.

pub mod export;
pub mod quantities;
pub mod rule_selection;
pub mod scan;
pub mod transitions;

pub use export::{batch_rows, can_export, qr_file_name, xlsx_file_name, zip_file_name, BatchExportRow};
pub use quantities::QuantityDraft;
pub use rule_selection::{EditPlan, RuleChoice, RuleSelection};
pub use scan::{resolve_action, CodeKind, ScanAction, ScanError, ScanOutcome, ScanResult, ScanSession, ScannedCode};
pub use transitions::{
    allowed_item_transitions, on_excel_exported, on_files_downloaded, scanner_shortcut,
};
