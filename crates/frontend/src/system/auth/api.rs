use contracts::system::auth::{LoginRequest, LoginResponse, MeResponse, SessionUser};
use serde_json::Value;

use crate::shared::http::{self, ApiResult};

/// Sets the session cookie; the user may or may not be echoed back.
pub async fn login(name: String, password: String) -> ApiResult<LoginResponse> {
    let request = LoginRequest { name, password };
    http::post_json("/auth/login", &request).await
}

pub async fn logout() -> ApiResult<()> {
    let _: Value = http::post_json("/auth/logout", &Value::Null).await?;
    Ok(())
}

/// Current user behind the session cookie.
pub async fn get_me() -> ApiResult<SessionUser> {
    let me: MeResponse = http::get_json("/auth/me").await?;
    Ok(me.into_user())
}
