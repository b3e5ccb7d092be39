use contracts::domain::a003_batch::NEARLY_FULL_RATIO;
use contracts::enums::{delivery_status_meta, ProductionStatus};
use leptos::prelude::*;

#[component]
pub fn StatusPill(status: ProductionStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}

#[component]
pub fn DeliveryPill(status: Option<String>) -> impl IntoView {
    let meta = delivery_status_meta(status.as_deref());
    view! { <span class=meta.class>{meta.label}</span> }
}

/// `capacity / max` with a fill bar; red once the batch is nearly full.
#[component]
pub fn CapacityBar(capacity: u32, max_capacity: u32) -> impl IntoView {
    let ratio = fill_ratio(capacity, max_capacity);
    let fill_class = if ratio > NEARLY_FULL_RATIO {
        "capacity-bar__fill capacity-bar__fill--danger"
    } else {
        "capacity-bar__fill"
    };
    view! {
        <div class="capacity">
            <div class="capacity-bar">
                <div class=fill_class style=format!("width: {:.0}%;", ratio * 100.0)></div>
            </div>
            <span class="capacity__label">{format!("{} / {}", capacity, max_capacity)}</span>
        </div>
    }
}

fn fill_ratio(capacity: u32, max_capacity: u32) -> f64 {
    if max_capacity == 0 {
        return 0.0;
    }
    (capacity as f64 / max_capacity as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_ratio_bounds() {
        assert_eq!(fill_ratio(0, 0), 0.0);
        assert_eq!(fill_ratio(5, 10), 0.5);
        assert_eq!(fill_ratio(12, 10), 1.0);
    }
}
