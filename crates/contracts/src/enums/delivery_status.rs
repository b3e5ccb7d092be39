/// Display data for a shipment status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatusMeta {
    pub label: String,
    pub class: &'static str,
}

const KNOWN: [(&str, &str, &str); 8] = [
    ("DELIVERY_CREATED", "Delivery created", "delivery-pill delivery-pill--created"),
    ("IN_TRANSIT", "In transit", "delivery-pill delivery-pill--transit"),
    ("OUT_FOR_DELIVERY", "Out for delivery", "delivery-pill delivery-pill--out"),
    ("DELIVERED", "Delivered", "delivery-pill delivery-pill--delivered"),
    ("FAILED", "Failed", "delivery-pill delivery-pill--failed"),
    ("RETURNED", "Returned", "delivery-pill delivery-pill--returned"),
    ("EXCEPTION", "Exception", "delivery-pill delivery-pill--exception"),
    ("CANCELLED", "Cancelled", "delivery-pill delivery-pill--cancelled"),
];

/// Label and CSS class for a delivery status; unknown codes are title-cased.
pub fn delivery_status_meta(status: Option<&str>) -> DeliveryStatusMeta {
    let Some(code) = status.map(str::trim).filter(|s| !s.is_empty()) else {
        return DeliveryStatusMeta {
            label: "-".to_string(),
            class: "delivery-pill delivery-pill--empty",
        };
    };

    if let Some((_, label, class)) = KNOWN.iter().find(|(c, _, _)| *c == code) {
        return DeliveryStatusMeta {
            label: label.to_string(),
            class: *class,
        };
    }

    DeliveryStatusMeta {
        label: title_case(code),
        class: "delivery-pill",
    }
}

fn title_case(code: &str) -> String {
    code.to_lowercase()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status() {
        let meta = delivery_status_meta(Some("OUT_FOR_DELIVERY"));
        assert_eq!(meta.label, "Out for delivery");
        assert_eq!(meta.class, "delivery-pill delivery-pill--out");
    }

    #[test]
    fn test_missing_status() {
        assert_eq!(delivery_status_meta(None).label, "-");
        assert_eq!(delivery_status_meta(Some("")).label, "-");
    }

    #[test]
    fn test_unknown_status_is_title_cased() {
        let meta = delivery_status_meta(Some("AWAITING_PICKUP_SLOT"));
        assert_eq!(meta.label, "Awaiting Pickup Slot");
        assert_eq!(meta.class, "delivery-pill");
    }
}
