use crate::enums::ProductionStatus;
use crate::system::roles::{Role, Station};

pub use crate::domain::a004_order::{ReplacementRequest, StatusUpdate};

use ProductionStatus::*;

type Step = (ProductionStatus, ProductionStatus);

const DESIGNER_STEPS: &[Step] = &[(Batched, Designing), (Designing, Designed)];
const PRINTER_STEPS: &[Step] = &[(Designed, Printing), (Printing, Printed)];
const CUTTER_STEPS: &[Step] = &[(Printed, Cutting), (Cutting, Cut)];
const FULFILLMENT_STEPS: &[Step] = &[(Cut, Fulfillment), (Fulfillment, Packed)];

/// Stage steps each production role may take on an order item.
fn role_steps(role: &Role) -> &'static [Step] {
    match role {
        Role::Designer => DESIGNER_STEPS,
        Role::Printer => PRINTER_STEPS,
        Role::Cutter => CUTTER_STEPS,
        Role::Fulfillment => FULFILLMENT_STEPS,
        _ => &[],
    }
}

/// Statuses offered in the per-item status select of the order page.
pub fn allowed_item_transitions(role: &Role, current: &ProductionStatus) -> Vec<ProductionStatus> {
    if role.is_admin() {
        return ProductionStatus::ALL
            .iter()
            .filter(|s| *s != current)
            .cloned()
            .collect();
    }
    role_steps(role)
        .iter()
        .filter(|(from, _)| from == current)
        .map(|(_, to)| to.clone())
        .collect()
}

/// A printer pulling the print files of a designed batch starts printing it.
pub fn on_files_downloaded(role: &Role, batch_status: &ProductionStatus) -> Option<ProductionStatus> {
    (*role == Role::Printer && *batch_status == Designed).then_some(Printing)
}

/// A designer exporting the sheet of a fresh batch starts designing it.
pub fn on_excel_exported(role: &Role, batch_status: &ProductionStatus) -> Option<ProductionStatus> {
    (*role == Role::Designer && *batch_status == Batched).then_some(Designing)
}

/// Scanner offered on the batch page, only for batches that carry a QR.
pub fn scanner_shortcut(role: &Role, batch_status: &ProductionStatus, has_qr: bool) -> Option<Station> {
    if !has_qr {
        return None;
    }
    match role {
        Role::Printer => Some(Station::Printer),
        Role::Cutter if *batch_status == Printed => Some(Station::Cutter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gets_every_other_status() {
        let options = allowed_item_transitions(&Role::Admin, &Printing);
        assert_eq!(options.len(), ProductionStatus::ALL.len() - 1);
        assert!(!options.contains(&Printing));
    }

    #[test]
    fn test_stage_roles_step_forward() {
        assert_eq!(allowed_item_transitions(&Role::Designer, &Batched), vec![Designing]);
        assert_eq!(allowed_item_transitions(&Role::Designer, &Designing), vec![Designed]);
        assert_eq!(allowed_item_transitions(&Role::Printer, &Printing), vec![Printed]);
        assert_eq!(allowed_item_transitions(&Role::Cutter, &Printed), vec![Cutting]);
        assert_eq!(allowed_item_transitions(&Role::Fulfillment, &Fulfillment), vec![Packed]);
        assert!(allowed_item_transitions(&Role::Printer, &Batched).is_empty());
        assert!(allowed_item_transitions(&Role::User, &Pending).is_empty());
    }

    #[test]
    fn test_side_effect_transitions() {
        assert_eq!(on_files_downloaded(&Role::Printer, &Designed), Some(Printing));
        assert_eq!(on_files_downloaded(&Role::Printer, &Printing), None);
        assert_eq!(on_files_downloaded(&Role::Admin, &Designed), None);
        assert_eq!(on_excel_exported(&Role::Designer, &Batched), Some(Designing));
        assert_eq!(on_excel_exported(&Role::Designer, &Designing), None);
    }

    #[test]
    fn test_scanner_shortcut() {
        assert_eq!(scanner_shortcut(&Role::Printer, &Designed, true), Some(Station::Printer));
        assert_eq!(scanner_shortcut(&Role::Printer, &Designed, false), None);
        assert_eq!(scanner_shortcut(&Role::Cutter, &Printing, true), None);
        assert_eq!(scanner_shortcut(&Role::Cutter, &Printed, true), Some(Station::Cutter));
        assert_eq!(scanner_shortcut(&Role::Admin, &Printed, true), None);
    }
}
