use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Server-issued identifier.
///
/// The backend hands out both numeric and string keys depending on the
/// table, so the id is echoed back in the shape it arrived in. Comparison
/// ignores the shape: `Text("42")` equals `Number(42)`, which is what an id
/// looks like after a trip through a tab key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Parse an id taken from a tab key or a form value.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match canonical_number(raw) {
            Some(n) => EntityId::Number(n),
            None => EntityId::Text(raw.to_string()),
        })
    }

    fn key(&self) -> IdKey<'_> {
        match self {
            EntityId::Number(n) => IdKey::Number(*n),
            EntityId::Text(s) => match canonical_number(s) {
                Some(n) => IdKey::Number(n),
                None => IdKey::Text(s),
            },
        }
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord)]
enum IdKey<'a> {
    Number(i64),
    Text(&'a str),
}

/// Number whose decimal form is exactly `raw`; "042" and "+7" stay text.
fn canonical_number(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|n| n.to_string() == raw)
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for EntityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Text(String::new())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_shape() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "ck9x", "42"]"#).unwrap();
        assert_eq!(ids[0], EntityId::Number(7));
        assert_eq!(ids[1], EntityId::Text("ck9x".into()));
        assert!(matches!(&ids[2], EntityId::Text(s) if s == "42"));
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[7,"ck9x","42"]"#);
    }

    #[test]
    fn test_parse_from_tab_key() {
        assert_eq!(EntityId::parse("15"), Some(EntityId::Number(15)));
        assert_eq!(EntityId::parse("abc"), Some(EntityId::Text("abc".into())));
        assert_eq!(EntityId::parse("  "), None);
        assert_eq!(EntityId::parse("15").unwrap().to_string(), "15");
        assert!(matches!(EntityId::parse("042"), Some(EntityId::Text(s)) if s == "042"));
    }

    #[test]
    fn test_server_id_survives_tab_key() {
        use std::collections::HashSet;

        for server in [EntityId::Text("42".into()), EntityId::Number(42), EntityId::Text("007".into())] {
            let from_key = EntityId::parse(&server.to_string()).unwrap();
            assert_eq!(from_key, server, "{server:?}");
            let set: HashSet<_> = [server.clone()].into_iter().collect();
            assert!(set.contains(&from_key));
        }
        assert_ne!(EntityId::Text("007".into()), EntityId::Number(7));
        assert_ne!(EntityId::Text("ck9x".into()), EntityId::Number(0));
    }
}
