use serde::{Deserialize, Serialize};

use crate::shared::EntityId;

/// Shopify store connected to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub shop_domain: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Nested `{ name }` the backend embeds into orders, rules and products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /admin/stores`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    pub shop_domain: String,
    pub name: String,
    pub access_token: String,
    pub api_secret: String,
}

impl NewStore {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Store name is required".into());
        }
        if self.shop_domain.trim().is_empty() {
            return Err("Shop domain is required".into());
        }
        if self.access_token.trim().is_empty() {
            return Err("Access token is required".into());
        }
        if self.api_secret.trim().is_empty() {
            return Err("API secret is required".into());
        }
        Ok(())
    }

    /// Trimmed copy ready to send.
    pub fn normalized(&self) -> Self {
        Self {
            shop_domain: self.shop_domain.trim().to_string(),
            name: self.name.trim().to_string(),
            access_token: self.access_token.trim().to_string(),
            api_secret: self.api_secret.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_validation() {
        let mut store = NewStore {
            shop_domain: " acme.myshopify.com ".into(),
            name: "Acme".into(),
            access_token: "shpat".into(),
            api_secret: String::new(),
        };
        assert_eq!(store.validate(), Err("API secret is required".to_string()));
        store.api_secret = "s".into();
        assert!(store.validate().is_ok());
        assert_eq!(store.normalized().shop_domain, "acme.myshopify.com");
        assert!(serde_json::to_string(&store).unwrap().contains("\"shopDomain\""));
    }
}
