use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `GET /admin/dashboard/totalOrders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalOrders {
    #[serde(default)]
    pub total_orders: u64,
}

/// `GET /admin/dashboard/totalProductTypesSold`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypesSold {
    #[serde(default)]
    pub totals_by_product_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_quantity_sold: u64,
    #[serde(default)]
    pub distinct_product_types_sold: u64,
}

impl ProductTypesSold {
    /// Product types ordered by quantity, largest first.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .totals_by_product_type
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_product_types() {
        let sold: ProductTypesSold = serde_json::from_str(
            r#"{"totalsByProductType":{"Mug":4,"Hoodie":9,"Cap":4},"totalQuantitySold":17,"distinctProductTypesSold":3}"#,
        )
        .unwrap();
        let ranked = sold.ranked();
        assert_eq!(ranked[0], ("Hoodie".to_string(), 9));
        assert_eq!(ranked[1].0, "Cap");
        assert_eq!(sold.total_quantity_sold, 17);
    }
}
