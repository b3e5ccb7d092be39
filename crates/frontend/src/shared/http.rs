//! HTTP client wrapper over `gloo-net`.
//!
//! Every request carries the session cookie (`credentials: include`).
//! Non-2xx answers are turned into [`ApiError`] with the server's
//! `{error}` / `{message}` text; a 401 also fires the unauthorized hook
//! registered by the auth context.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::shared::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Blob, FormData, RequestCredentials};

use super::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Request timed out")]
    Timeout,
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn from_js(err: JsValue) -> Self {
        ApiError::Network(format!("{:?}", err))
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        ApiError::Validation(message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

thread_local! {
    static UNAUTHORIZED_HOOK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Called on every 401; the auth context uses it to drop the session.
pub fn set_unauthorized_hook(hook: impl Fn() + 'static) {
    UNAUTHORIZED_HOOK.with(|slot| *slot.borrow_mut() = Some(Rc::new(hook)));
}

fn notify_unauthorized() {
    let hook = UNAUTHORIZED_HOOK.with(|slot| slot.borrow().clone());
    if let Some(hook) = hook {
        hook();
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

fn with_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
    builder
        .json(body)
        .map_err(|e| ApiError::Validation(format!("Failed to serialize request: {}", e)))
}

fn without_body(builder: RequestBuilder) -> ApiResult<Request> {
    builder
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn dispatch(request: Request) -> ApiResult<Response> {
    let url = request.url();
    let response = request.send().await.map_err(|e| {
        log::warn!("request to {} failed: {}", url, e);
        ApiError::Network(e.to_string())
    })?;
    check_status(response).await
}

async fn check_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    log::warn!("{} answered {}: {}", response.url(), status, message);
    if status == 401 {
        notify_unauthorized();
        return Err(ApiError::Unauthorized(message));
    }
    Err(ApiError::Status { status, message })
}

/// Server error text, or `HTTP <status>` when the body carries none.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .unwrap_or_default()
        .best_message(&format!("HTTP {}", status))
}

/// Empty bodies decode as JSON `null`, so `()` and `Option<T>` accept 204s.
fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(&text)
}

// ============================================================================
// Helpers used by the api modules
// ============================================================================

pub async fn get_json<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = dispatch(without_body(builder(Verb::Get, path))?).await?;
    read_json(response).await
}

/// GET with a query string already produced by a contracts filter.
pub async fn get_json_query<T: DeserializeOwned>(path: &str, query: &str) -> ApiResult<T> {
    if query.is_empty() {
        return get_json(path).await;
    }
    get_json(&format!("{}?{}", path, query)).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(with_json(builder(Verb::Post, path), body)?).await?;
    read_json(response).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(with_json(builder(Verb::Put, path), body)?).await?;
    read_json(response).await
}

pub async fn patch_json<B, T>(path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = dispatch(with_json(builder(Verb::Patch, path), body)?).await?;
    read_json(response).await
}

pub async fn delete(path: &str) -> ApiResult<()> {
    dispatch(without_body(builder(Verb::Delete, path))?).await?;
    Ok(())
}

/// Multipart POST; the browser sets the boundary header itself.
pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> ApiResult<T> {
    let request = builder(Verb::Post, path)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = dispatch(request).await?;
    read_json(response).await
}

/// Binary GET, aborted after `timeout_ms` when given.
pub async fn get_blob(path: &str, timeout_ms: Option<u32>) -> ApiResult<Blob> {
    let controller = AbortController::new().map_err(ApiError::from_js)?;
    let timed_out = Rc::new(Cell::new(false));
    let _timer = timeout_ms.map(|ms| {
        let controller = controller.clone();
        let timed_out = timed_out.clone();
        Timeout::new(ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    });
    let on_abort = |err: ApiError| {
        if timed_out.get() {
            ApiError::Timeout
        } else {
            err
        }
    };

    let signal = controller.signal();
    let request = without_body(builder(Verb::Get, path).abort_signal(Some(&signal)))?;
    let response = dispatch(request).await.map_err(on_abort)?;
    let promise = web_sys::Response::from(response).blob().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| on_abort(ApiError::from_js(e)))?;
    value
        .dyn_into::<Blob>()
        .map_err(|_| ApiError::Decode("response is not a blob".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(400, r#"{"error":"Batch is full"}"#),
            "Batch is full"
        );
        assert_eq!(error_message(404, r#"{"message":"Not found"}"#), "Not found");
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(500, ""), "HTTP 500");
    }

    #[test]
    fn test_decode_empty_body() {
        let unit: () = decode_body("").unwrap();
        assert_eq!(unit, ());
        let nothing: Option<u32> = decode_body("  ").unwrap();
        assert_eq!(nothing, None);
        let value: Vec<u32> = decode_body("[1,2]").unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let err = decode_body::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_display_uses_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Batch already exists".into(),
        };
        assert_eq!(err.to_string(), "Batch already exists");
        assert_eq!(err.status(), Some(409));
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            ApiError::from("Please enter max capacity".to_string()).to_string(),
            "Please enter max capacity"
        );
    }
}
