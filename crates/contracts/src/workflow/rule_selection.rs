use std::collections::HashSet;

use crate::domain::a002_rule::Rule;
use crate::domain::a003_batch::{BatchRules, BatchRulesUpdate};
use crate::shared::EntityId;

/// One checkbox of a rule picker.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleChoice {
    pub rule: Rule,
    pub selected: bool,
    pub selected_before: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditPlan {
    /// Nothing changed, just close the dialog.
    Close,
    Save(BatchRulesUpdate),
}

/// Rule picker state for batch creation and batch rule editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSelection {
    choices: Vec<RuleChoice>,
    original_max_capacity: Option<u32>,
}

impl RuleSelection {
    /// Nothing pre-selected.
    pub fn fresh(rules: &[Rule]) -> Self {
        Self {
            choices: rules
                .iter()
                .map(|rule| RuleChoice {
                    rule: rule.clone(),
                    selected: false,
                    selected_before: false,
                })
                .collect(),
            original_max_capacity: None,
        }
    }

    /// Seeded from the batch's attached rules.
    pub fn for_batch(rules: &[Rule], attached: &BatchRules) -> Self {
        let ids: HashSet<EntityId> = attached.attached_ids().into_iter().collect();
        Self {
            choices: rules
                .iter()
                .map(|rule| {
                    let on = ids.contains(&rule.id);
                    RuleChoice {
                        rule: rule.clone(),
                        selected: on,
                        selected_before: on,
                    }
                })
                .collect(),
            original_max_capacity: attached.batch.max_capacity,
        }
    }

    pub fn choices(&self) -> &[RuleChoice] {
        &self.choices
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn original_max_capacity(&self) -> Option<u32> {
        self.original_max_capacity
    }

    /// Initial text of the max capacity input.
    pub fn max_capacity_input(&self) -> String {
        self.original_max_capacity
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.choices.iter().any(|c| c.selected && c.rule.id == *id)
    }

    pub fn toggle(&mut self, id: &EntityId) {
        if let Some(choice) = self.choices.iter_mut().find(|c| c.rule.id == *id) {
            choice.selected = !choice.selected;
        }
    }

    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.choices
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.rule.id.clone())
            .collect()
    }

    /// Turns the dialog state into a save request.
    ///
    /// Empty capacity input keeps the current capacity.
    pub fn plan(&self, max_capacity_input: &str) -> Result<EditPlan, String> {
        let raw = max_capacity_input.trim();
        let max_capacity = if raw.is_empty() {
            None
        } else {
            match raw.parse::<i64>() {
                Ok(v) if v > 0 && v <= u32::MAX as i64 => Some(v as u32),
                _ => return Err("Max capacity must be a positive integer".into()),
            }
        };

        let rule_ids_to_add: Vec<EntityId> = self
            .choices
            .iter()
            .filter(|c| c.selected && !c.selected_before)
            .map(|c| c.rule.id.clone())
            .collect();
        let rule_ids_to_remove: Vec<EntityId> = self
            .choices
            .iter()
            .filter(|c| !c.selected && c.selected_before)
            .map(|c| c.rule.id.clone())
            .collect();

        let capacity_unchanged = match max_capacity {
            None => true,
            Some(v) => self.original_max_capacity == Some(v),
        };
        if rule_ids_to_add.is_empty() && rule_ids_to_remove.is_empty() && capacity_unchanged {
            return Ok(EditPlan::Close);
        }

        Ok(EditPlan::Save(BatchRulesUpdate {
            rule_ids_to_add,
            rule_ids_to_remove,
            max_capacity,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: i64, name: &str) -> Rule {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name, "isPod": true }))
            .unwrap()
    }

    fn selection() -> RuleSelection {
        let rules = vec![rule(1, "Mug"), rule(2, "Tee"), rule(3, "Cap")];
        let attached: BatchRules = serde_json::from_str(
            r#"{"batch":{"name":"B1","maxCapacity":20},"rules":[{"id":1},{"id":3}]}"#,
        )
        .unwrap();
        RuleSelection::for_batch(&rules, &attached)
    }

    #[test]
    fn test_seeded_from_batch() {
        let sel = selection();
        assert_eq!(sel.selected_ids(), vec![EntityId::from(1), EntityId::from(3)]);
        assert_eq!(sel.max_capacity_input(), "20");
    }

    #[test]
    fn test_no_change_closes() {
        let sel = selection();
        assert_eq!(sel.plan(""), Ok(EditPlan::Close));
        assert_eq!(sel.plan("20"), Ok(EditPlan::Close));
    }

    #[test]
    fn test_plan_diff() {
        let mut sel = selection();
        sel.toggle(&EntityId::from(2));
        sel.toggle(&EntityId::from(3));
        let plan = sel.plan("").unwrap();
        assert_eq!(
            plan,
            EditPlan::Save(BatchRulesUpdate {
                rule_ids_to_add: vec![EntityId::from(2)],
                rule_ids_to_remove: vec![EntityId::from(3)],
                max_capacity: None,
            })
        );
    }

    #[test]
    fn test_capacity_only_change() {
        let sel = selection();
        match sel.plan("25").unwrap() {
            EditPlan::Save(update) => {
                assert!(update.rule_ids_to_add.is_empty());
                assert_eq!(update.max_capacity, Some(25));
            }
            EditPlan::Close => panic!("expected save"),
        }
    }

    #[test]
    fn test_invalid_capacity() {
        let sel = selection();
        let err = Err("Max capacity must be a positive integer".to_string());
        assert_eq!(sel.plan("0"), err);
        assert_eq!(sel.plan("-4"), err);
        assert_eq!(sel.plan("abc"), err);
    }

    #[test]
    fn test_fresh_selection() {
        let mut sel = RuleSelection::fresh(&[rule(1, "Mug")]);
        assert!(sel.selected_ids().is_empty());
        sel.toggle(&EntityId::from(1));
        assert!(sel.is_selected(&EntityId::from(1)));
    }
}
