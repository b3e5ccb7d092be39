use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pipeline status shared by orders, order items, units and batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProductionStatus {
    #[default]
    Pending,
    WaitingBatch,
    Batched,
    Designing,
    Designed,
    Printing,
    Printed,
    Cutting,
    Cut,
    Fulfillment,
    Packed,
    Completed,
    Cancelled,
    Returned,
    Replaced,
    /// Anything the backend adds later.
    Other(String),
}

impl ProductionStatus {
    /// Known statuses in pipeline order.
    pub const ALL: [ProductionStatus; 15] = [
        ProductionStatus::Pending,
        ProductionStatus::WaitingBatch,
        ProductionStatus::Batched,
        ProductionStatus::Designing,
        ProductionStatus::Designed,
        ProductionStatus::Printing,
        ProductionStatus::Printed,
        ProductionStatus::Cutting,
        ProductionStatus::Cut,
        ProductionStatus::Fulfillment,
        ProductionStatus::Packed,
        ProductionStatus::Completed,
        ProductionStatus::Cancelled,
        ProductionStatus::Returned,
        ProductionStatus::Replaced,
    ];

    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|s| s.code() == code)
            .cloned()
            .unwrap_or(ProductionStatus::Other(code))
    }

    pub fn code(&self) -> &str {
        match self {
            ProductionStatus::Pending => "PENDING",
            ProductionStatus::WaitingBatch => "WAITING_BATCH",
            ProductionStatus::Batched => "BATCHED",
            ProductionStatus::Designing => "DESIGNING",
            ProductionStatus::Designed => "DESIGNED",
            ProductionStatus::Printing => "PRINTING",
            ProductionStatus::Printed => "PRINTED",
            ProductionStatus::Cutting => "CUTTING",
            ProductionStatus::Cut => "CUT",
            ProductionStatus::Fulfillment => "FULFILLMENT",
            ProductionStatus::Packed => "PACKED",
            ProductionStatus::Completed => "COMPLETED",
            ProductionStatus::Cancelled => "CANCELLED",
            ProductionStatus::Returned => "RETURNED",
            ProductionStatus::Replaced => "REPLACED",
            ProductionStatus::Other(code) => code,
        }
    }

    /// `WAITING_BATCH` -> `WAITING BATCH`
    pub fn label(&self) -> String {
        self.code().replace('_', " ")
    }

    /// CSS modifier for the status pill.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProductionStatus::Pending => "status-pill status-pill--pending",
            ProductionStatus::WaitingBatch => "status-pill status-pill--waiting",
            ProductionStatus::Batched => "status-pill status-pill--batched",
            ProductionStatus::Designing => "status-pill status-pill--designing",
            ProductionStatus::Designed => "status-pill status-pill--designed",
            ProductionStatus::Printing => "status-pill status-pill--printing",
            ProductionStatus::Printed => "status-pill status-pill--printed",
            ProductionStatus::Cutting => "status-pill status-pill--cutting",
            ProductionStatus::Cut => "status-pill status-pill--cut",
            ProductionStatus::Fulfillment => "status-pill status-pill--fulfillment",
            ProductionStatus::Packed => "status-pill status-pill--packed",
            ProductionStatus::Completed => "status-pill status-pill--completed",
            ProductionStatus::Cancelled => "status-pill status-pill--cancelled",
            ProductionStatus::Returned | ProductionStatus::Replaced | ProductionStatus::Other(_) => {
                "status-pill"
            }
        }
    }
}

impl fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ProductionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ProductionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProductionStatus::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(ProductionStatus::parse("waiting_batch"), ProductionStatus::WaitingBatch);
        assert_eq!(
            ProductionStatus::parse("ON_HOLD"),
            ProductionStatus::Other("ON_HOLD".into())
        );
        let s: ProductionStatus = serde_json::from_str("\"PRINTED\"").unwrap();
        assert_eq!(s, ProductionStatus::Printed);
        assert_eq!(serde_json::to_string(&ProductionStatus::Cut).unwrap(), "\"CUT\"");
    }

    #[test]
    fn test_label_and_class() {
        assert_eq!(ProductionStatus::WaitingBatch.label(), "WAITING BATCH");
        assert_eq!(
            ProductionStatus::Packed.badge_class(),
            "status-pill status-pill--packed"
        );
        assert_eq!(ProductionStatus::Other("X".into()).badge_class(), "status-pill");
    }
}
