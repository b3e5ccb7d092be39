use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::ProductionStatus;
use crate::system::roles::{Role, Station};

/// Repeated decodes of the same code inside this window are ignored.
pub const DEFAULT_SCAN_COOLDOWN_MS: u64 = 2500;

// ============================================================================
// Parsing
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Batch,
    Item,
}

impl CodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            CodeKind::Batch => "batch",
            CodeKind::Item => "item",
        }
    }
}

/// A decoded QR payload reduced to its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedCode {
    pub kind: CodeKind,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Scanned code is empty")]
    Empty,
    #[error("No token found in scanned code")]
    MissingToken,
    #[error("{0}")]
    StationDenied(&'static str),
    #[error("Expected a {} QR code, scanned a {} QR code", .expected.label(), .found.label())]
    WrongCodeKind { expected: CodeKind, found: CodeKind },
}

impl ScannedCode {
    /// Accepts `https://host/scan/batch/<token>`, `/scan/item-fulfillment/<token>`
    /// or a bare token. A `batch` path segment before the token marks a batch code.
    pub fn parse(raw: &str) -> Result<Self, ScanError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ScanError::Empty);
        }

        let without_scheme = match raw.find("://") {
            Some(pos) => {
                let rest = &raw[pos + 3..];
                match rest.find('/') {
                    Some(slash) => &rest[slash..],
                    None => "",
                }
            }
            None => raw,
        };
        let path = without_scheme
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((token, prefix)) = segments.split_last() else {
            return Err(ScanError::MissingToken);
        };

        let kind = if prefix.iter().any(|s| s.eq_ignore_ascii_case("batch")) {
            CodeKind::Batch
        } else {
            CodeKind::Item
        };

        Ok(Self {
            kind,
            token: (*token).to_string(),
        })
    }
}

// ============================================================================
// Dispatch
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanAction {
    ScanBatch(String),
    ScanUnitFulfillment(String),
}

impl ScanAction {
    pub fn endpoint(&self) -> String {
        match self {
            ScanAction::ScanBatch(token) => format!("/scan/batch/{}", token),
            ScanAction::ScanUnitFulfillment(token) => format!("/scan/item-fulfillment/{}", token),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            ScanAction::ScanBatch(token) | ScanAction::ScanUnitFulfillment(token) => token,
        }
    }
}

/// Printer and cutter stations take batch codes, fulfillment takes item codes.
pub fn resolve_action(
    role: &Role,
    station: Station,
    code: &ScannedCode,
) -> Result<ScanAction, ScanError> {
    if !role.can_use_station(station) {
        return Err(ScanError::StationDenied(station.denied_message()));
    }
    let expected = match station {
        Station::Printer | Station::Cutter => CodeKind::Batch,
        Station::Fulfillment => CodeKind::Item,
    };
    if code.kind != expected {
        return Err(ScanError::WrongCodeKind {
            expected,
            found: code.kind,
        });
    }
    let token = code.token.clone();
    Ok(match station {
        Station::Printer | Station::Cutter => ScanAction::ScanBatch(token),
        Station::Fulfillment => ScanAction::ScanUnitFulfillment(token),
    })
}

/// Body returned by both scan endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<ProductionStatus>,
    #[serde(default)]
    pub order_completed: Option<bool>,
}

impl ScanResult {
    pub fn summary(&self) -> String {
        let mut text = match (&self.message, &self.status) {
            (Some(m), _) if !m.trim().is_empty() => m.clone(),
            (_, Some(status)) => format!("Status updated to {}", status.label()),
            _ => "Scan accepted".to_string(),
        };
        if self.order_completed == Some(true) {
            text.push_str(" (order completed)");
        }
        text
    }
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Ready,
    Processing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Success(String),
    Failure(String),
}

/// Debounces camera decodes: one request at a time, and the same payload
/// is not re-submitted until the cooldown has passed.
#[derive(Debug, Clone)]
pub struct ScanSession {
    state: ScanState,
    cooldown_ms: u64,
    last_payload: Option<(String, u64)>,
    last_outcome: Option<ScanOutcome>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::with_cooldown(DEFAULT_SCAN_COOLDOWN_MS)
    }
}

impl ScanSession {
    pub fn with_cooldown(cooldown_ms: u64) -> Self {
        Self {
            state: ScanState::Ready,
            cooldown_ms,
            last_payload: None,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, ScanState::Processing(_))
    }

    pub fn last_outcome(&self) -> Option<&ScanOutcome> {
        self.last_outcome.as_ref()
    }

    /// Returns `true` when the payload should be processed; the session is
    /// then `Processing` until [`ScanSession::finish`].
    pub fn accept(&mut self, raw: &str, now_ms: u64) -> bool {
        let payload = raw.trim();
        if payload.is_empty() || self.is_processing() {
            return false;
        }
        if let Some((last, at)) = &self.last_payload {
            if last == payload && now_ms.saturating_sub(*at) < self.cooldown_ms {
                return false;
            }
        }
        self.last_payload = Some((payload.to_string(), now_ms));
        self.state = ScanState::Processing(payload.to_string());
        true
    }

    pub fn finish(&mut self, outcome: ScanOutcome, now_ms: u64) {
        if let ScanState::Processing(payload) = &self.state {
            self.last_payload = Some((payload.clone(), now_ms));
        }
        self.state = ScanState::Ready;
        self.last_outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_path_and_bare_token() {
        let url = ScannedCode::parse("https://api.opify.io/scan/batch/abc123?x=1#top").unwrap();
        assert_eq!(url.kind, CodeKind::Batch);
        assert_eq!(url.token, "abc123");

        let path = ScannedCode::parse("/scan/item-fulfillment/u-77/").unwrap();
        assert_eq!(path.kind, CodeKind::Item);
        assert_eq!(path.token, "u-77");

        let bare = ScannedCode::parse("  tok-9 ").unwrap();
        assert_eq!(bare.kind, CodeKind::Item);
        assert_eq!(bare.token, "tok-9");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ScannedCode::parse("   "), Err(ScanError::Empty));
        assert_eq!(
            ScannedCode::parse("https://api.opify.io/"),
            Err(ScanError::MissingToken)
        );
        assert_eq!(
            ScannedCode::parse("https://api.opify.io"),
            Err(ScanError::MissingToken)
        );
    }

    #[test]
    fn test_resolve_action_by_station() {
        let batch = ScannedCode::parse("/scan/batch/b1").unwrap();
        let item = ScannedCode::parse("/scan/item-fulfillment/i1").unwrap();

        let action = resolve_action(&Role::Printer, Station::Printer, &batch).unwrap();
        assert_eq!(action.endpoint(), "/scan/batch/b1");

        let action = resolve_action(&Role::Admin, Station::Fulfillment, &item).unwrap();
        assert_eq!(action.endpoint(), "/scan/item-fulfillment/i1");

        assert_eq!(
            resolve_action(&Role::Cutter, Station::Cutter, &item),
            Err(ScanError::WrongCodeKind {
                expected: CodeKind::Batch,
                found: CodeKind::Item
            })
        );
        let denied = resolve_action(&Role::Designer, Station::Printer, &batch).unwrap_err();
        assert_eq!(denied.to_string(), "Access Denied - Printers Only");
    }

    #[test]
    fn test_session_ignores_duplicates() {
        let mut session = ScanSession::default();
        assert!(session.accept("/scan/batch/b1", 1_000));
        assert!(!session.accept("/scan/batch/b2", 1_100));

        session.finish(ScanOutcome::Success("ok".into()), 1_200);
        assert_eq!(session.state(), &ScanState::Ready);
        assert!(!session.accept("/scan/batch/b1", 2_000));
        assert!(session.accept("/scan/batch/b2", 2_000));
        session.finish(ScanOutcome::Failure("nope".into()), 2_100);
        assert!(session.accept("/scan/batch/b1", 5_000));
    }

    #[test]
    fn test_scan_result_summary() {
        let result: ScanResult =
            serde_json::from_str(r#"{"status":"PACKED","orderCompleted":true}"#).unwrap();
        assert_eq!(result.summary(), "Status updated to PACKED (order completed)");
        assert_eq!(ScanResult::default().summary(), "Scan accepted");
    }
}
