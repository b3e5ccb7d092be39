use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::navigation::*;

/// Operator role. Only drives what the UI offers; the backend re-checks everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Designer,
    Printer,
    Cutter,
    Fulfillment,
    User,
    #[default]
    Unknown,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "DESIGNER" => Role::Designer,
            "PRINTER" => Role::Printer,
            "CUTTER" => Role::Cutter,
            "FULFILLMENT" => Role::Fulfillment,
            "USER" => Role::User,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Designer => "DESIGNER",
            Role::Printer => "PRINTER",
            Role::Cutter => "CUTTER",
            Role::Fulfillment => "FULFILLMENT",
            Role::User => "USER",
            Role::Unknown => "UNKNOWN",
        }
    }

    /// Tab opened right after login.
    pub fn landing_page(&self) -> &'static str {
        match self {
            Role::Admin | Role::User => TAB_DASHBOARD,
            Role::Designer | Role::Printer | Role::Cutter => TAB_BATCHES,
            Role::Fulfillment => TAB_SCAN_FULFILLMENT,
            Role::Unknown => TAB_PROFILE,
        }
    }

    /// Sidebar entries in display order.
    pub fn menu(&self) -> Vec<MenuEntry> {
        let dashboard = MenuEntry::new(TAB_DASHBOARD, "Dashboard", "bar-chart");
        let stock = MenuEntry::new(TAB_STOCK, "Stock", "inventory");
        let returns = MenuEntry::new(TAB_RETURNS, "Returns", "package-x");
        let products = MenuEntry::new(TAB_PRODUCTS, "Products", "products");
        let orders = MenuEntry::new(TAB_ORDERS, "Orders", "orders");
        let batches = MenuEntry::new(TAB_BATCHES, "Batches", "layers");
        let profile = MenuEntry::new(TAB_PROFILE, "My account", "users");

        let mut entries = match self {
            Role::Admin => vec![dashboard, stock, returns, products, orders, batches],
            Role::Designer | Role::Printer | Role::Cutter | Role::Fulfillment => {
                vec![batches, orders]
            }
            Role::User => vec![dashboard, stock, returns, orders, products],
            Role::Unknown => vec![],
        };
        entries.extend(
            Station::ALL
                .iter()
                .filter(|station| self.can_use_station(**station))
                .map(|station| station.menu_entry()),
        );
        entries.push(profile);
        entries
    }

    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }

    /// Stores, rules, batches and main stock creation.
    pub fn can_manage_catalog(&self) -> bool {
        self.is_admin()
    }

    pub fn can_upload_batch_files(&self) -> bool {
        matches!(self, Role::Admin | Role::Designer)
    }

    pub fn can_view_batch_qr(&self) -> bool {
        matches!(self, Role::Admin | Role::Designer)
    }

    pub fn can_view_unit_qr(&self) -> bool {
        *self == Role::Designer
    }

    pub fn can_edit_batch_rules(&self) -> bool {
        self.is_admin()
    }

    /// Store filter and the catalog tables on the dashboard.
    pub fn sees_store_filter(&self) -> bool {
        *self != Role::User
    }

    pub fn sees_stock_rules(&self) -> bool {
        *self != Role::User
    }

    pub fn can_edit_stock_items(&self) -> bool {
        *self != Role::User
    }

    pub fn can_replace_units(&self) -> bool {
        self.is_admin()
    }

    pub fn can_bulk_update_orders(&self) -> bool {
        self.is_admin()
    }

    pub fn can_use_station(&self, station: Station) -> bool {
        self.is_admin() || station.role() == *self
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

/// Scanner page bound to one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Printer,
    Cutter,
    Fulfillment,
}

impl Station {
    pub const ALL: [Station; 3] = [Station::Printer, Station::Cutter, Station::Fulfillment];

    pub fn role(&self) -> Role {
        match self {
            Station::Printer => Role::Printer,
            Station::Cutter => Role::Cutter,
            Station::Fulfillment => Role::Fulfillment,
        }
    }

    pub fn tab_key(&self) -> &'static str {
        match self {
            Station::Printer => TAB_SCAN_PRINTER,
            Station::Cutter => TAB_SCAN_CUTTER,
            Station::Fulfillment => TAB_SCAN_FULFILLMENT,
        }
    }

    pub fn from_tab_key(key: &str) -> Option<Self> {
        Station::ALL.into_iter().find(|s| s.tab_key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Station::Printer => "Printer Scanner",
            Station::Cutter => "Cutter Scanner",
            Station::Fulfillment => "Fulfillment Scanner",
        }
    }

    pub fn denied_message(&self) -> &'static str {
        match self {
            Station::Printer => "Access Denied - Printers Only",
            Station::Cutter => "Access Denied - Cutters Only",
            Station::Fulfillment => "Access Denied - Fulfillment Only",
        }
    }

    fn menu_entry(&self) -> MenuEntry {
        MenuEntry::new(self.tab_key(), self.title(), "scan")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Role) -> Vec<&'static str> {
        role.menu().into_iter().map(|e| e.key).collect()
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse(" Fulfillment "), Role::Fulfillment);
        assert_eq!(Role::parse("fullfillment"), Role::Unknown);
        assert_eq!(serde_json::to_string(&Role::Cutter).unwrap(), "\"CUTTER\"");
    }

    #[test]
    fn test_landing_pages() {
        assert_eq!(Role::Admin.landing_page(), TAB_DASHBOARD);
        assert_eq!(Role::Designer.landing_page(), TAB_BATCHES);
        assert_eq!(Role::Printer.landing_page(), TAB_BATCHES);
        assert_eq!(Role::Cutter.landing_page(), TAB_BATCHES);
        assert_eq!(Role::Fulfillment.landing_page(), TAB_SCAN_FULFILLMENT);
        assert_eq!(Role::Unknown.landing_page(), TAB_PROFILE);
    }

    #[test]
    fn test_menu_per_role() {
        assert_eq!(
            keys(Role::Designer),
            vec![TAB_BATCHES, TAB_ORDERS, TAB_PROFILE]
        );
        assert_eq!(
            keys(Role::Fulfillment),
            vec![TAB_BATCHES, TAB_ORDERS, TAB_SCAN_FULFILLMENT, TAB_PROFILE]
        );
        assert_eq!(
            keys(Role::User),
            vec![TAB_DASHBOARD, TAB_STOCK, TAB_RETURNS, TAB_ORDERS, TAB_PRODUCTS, TAB_PROFILE]
        );
        let admin = keys(Role::Admin);
        assert!(admin.contains(&TAB_SCAN_PRINTER));
        assert!(admin.contains(&TAB_SCAN_CUTTER));
        assert!(admin.contains(&TAB_SCAN_FULFILLMENT));
        assert_eq!(keys(Role::Unknown), vec![TAB_PROFILE]);
    }

    #[test]
    fn test_station_access() {
        assert!(Role::Printer.can_use_station(Station::Printer));
        assert!(!Role::Printer.can_use_station(Station::Cutter));
        assert!(Role::Admin.can_use_station(Station::Fulfillment));
        assert!(!Role::User.can_use_station(Station::Fulfillment));
        assert_eq!(Station::from_tab_key(TAB_SCAN_CUTTER), Some(Station::Cutter));
    }

    #[test]
    fn test_capabilities() {
        assert!(Role::Designer.can_upload_batch_files());
        assert!(!Role::Printer.can_upload_batch_files());
        assert!(Role::Designer.can_view_unit_qr());
        assert!(!Role::Admin.can_view_unit_qr());
        assert!(!Role::User.sees_store_filter());
        assert!(Role::Cutter.sees_store_filter());
    }
}
