use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `error` wins over `message`; blank strings are ignored.
    pub fn best_message(&self, fallback: &str) -> String {
        [self.error.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_message_prefers_error() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Batch is full","message":"ignored"}"#).unwrap();
        assert_eq!(body.best_message("x"), "Batch is full");
    }

    #[test]
    fn test_best_message_fallbacks() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"  ","message":"Nope"}"#).unwrap();
        assert_eq!(body.best_message("x"), "Nope");
        assert_eq!(ApiErrorBody::default().best_message("HTTP 500"), "HTTP 500");
    }
}
