use serde::{Deserialize, Serialize};

use crate::domain::a001_store::StoreRef;
use crate::shared::EntityId;

// ============================================================================
// Rule
// ============================================================================

/// Store / product type / variant routing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_pod: bool,
    #[serde(default)]
    pub requires_stock: bool,
    #[serde(default)]
    pub variant_title: Option<String>,
    #[serde(default)]
    pub store_id: Option<EntityId>,
    #[serde(default)]
    pub store: Option<StoreRef>,
}

impl Rule {
    pub fn store_name(&self) -> &str {
        self.store.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }

    /// `Name / Variant` label used by rule pickers.
    pub fn display_name(&self) -> String {
        match self.variant_title.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => format!("{} / {}", self.name, v),
            _ => self.name.clone(),
        }
    }

    pub fn handling_label(&self) -> &'static str {
        match (self.is_pod, self.requires_stock) {
            (true, _) => "POD",
            (false, true) => "Stock",
            (false, false) => "-",
        }
    }
}

// ============================================================================
// Creation
// ============================================================================

/// Raw values of the "create rule" form.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleForm {
    pub store_name: String,
    pub product_type: String,
    pub variant_title: String,
    pub is_pod: bool,
    pub requires_stock: bool,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            store_name: String::new(),
            product_type: String::new(),
            variant_title: String::new(),
            is_pod: true,
            requires_stock: false,
        }
    }
}

/// Body of `POST /admin/rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRule {
    pub name: String,
    pub is_pod: bool,
    pub requires_stock: bool,
    pub variant_title: Option<String>,
    pub store_name: String,
}

impl NewRule {
    /// The rule is named after its product type; an empty variant means "any variant".
    pub fn from_form(form: &RuleForm) -> Result<Self, String> {
        let store_name = form.store_name.trim();
        if store_name.is_empty() {
            return Err("Please select a store".into());
        }
        let product_type = form.product_type.trim();
        if product_type.is_empty() {
            return Err("Please select a product type".into());
        }
        let variant = form.variant_title.trim();
        Ok(Self {
            name: product_type.to_string(),
            is_pod: form.is_pod,
            requires_stock: form.requires_stock,
            variant_title: (!variant.is_empty()).then(|| variant.to_string()),
            store_name: store_name.to_string(),
        })
    }
}

/// `GET /admin/rules/store/:store` answers a bare array or a wrapped one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductTypesResponse {
    Bare(Vec<String>),
    Named {
        #[serde(rename = "productTypes")]
        product_types: Vec<String>,
    },
    Wrapped { data: Vec<String> },
}

impl ProductTypesResponse {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ProductTypesResponse::Bare(v) => v,
            ProductTypesResponse::Named { product_types } => product_types,
            ProductTypesResponse::Wrapped { data } => data,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantTitlesResponse {
    #[serde(default)]
    pub variant_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RuleForm {
        RuleForm {
            store_name: "Acme".into(),
            product_type: " T-Shirt ".into(),
            variant_title: "  ".into(),
            ..RuleForm::default()
        }
    }

    #[test]
    fn test_new_rule_from_form() {
        let rule = NewRule::from_form(&form()).unwrap();
        assert_eq!(rule.name, "T-Shirt");
        assert_eq!(rule.variant_title, None);
        assert!(rule.is_pod);
        assert!(!rule.requires_stock);

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["variantTitle"], serde_json::Value::Null);
        assert_eq!(json["storeName"], "Acme");
    }

    #[test]
    fn test_new_rule_requires_store_and_type() {
        let mut f = form();
        f.product_type.clear();
        assert_eq!(
            NewRule::from_form(&f),
            Err("Please select a product type".to_string())
        );
        f.store_name.clear();
        assert_eq!(NewRule::from_form(&f), Err("Please select a store".to_string()));
    }

    #[test]
    fn test_rule_display_name() {
        let rule: Rule = serde_json::from_str(
            r#"{"id":3,"name":"Hoodie","isPod":false,"requiresStock":true,"variantTitle":"XL","store":{"name":"Acme"}}"#,
        )
        .unwrap();
        assert_eq!(rule.display_name(), "Hoodie / XL");
        assert_eq!(rule.store_name(), "Acme");
        assert_eq!(rule.handling_label(), "Stock");
    }

    #[test]
    fn test_product_types_shapes() {
        let bare: ProductTypesResponse = serde_json::from_str(r#"["Mug","Hoodie"]"#).unwrap();
        let named: ProductTypesResponse =
            serde_json::from_str(r#"{"productTypes":["Mug"]}"#).unwrap();
        assert_eq!(bare.into_vec().len(), 2);
        assert_eq!(named.into_vec(), vec!["Mug".to_string()]);
    }
}
