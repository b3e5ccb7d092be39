use serde::{Deserialize, Serialize};

use super::roles::Role;
use crate::shared::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The signed-in operator as reported by the session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// `/auth/me` answers either the user or `{ "data": user }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MeResponse {
    Wrapped { data: SessionUser },
    Bare(SessionUser),
}

impl MeResponse {
    pub fn into_user(self) -> SessionUser {
        match self {
            MeResponse::Wrapped { data } => data,
            MeResponse::Bare(user) => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_response_shapes() {
        let wrapped: MeResponse =
            serde_json::from_str(r#"{"data":{"id":3,"name":"Mona","role":"PRINTER"}}"#).unwrap();
        let bare: MeResponse = serde_json::from_str(r#"{"name":"Omar","role":"admin"}"#).unwrap();
        assert_eq!(wrapped.into_user().role, Role::Printer);
        let omar = bare.into_user();
        assert_eq!(omar.role, Role::Admin);
        assert_eq!(omar.id, None);
    }

    #[test]
    fn test_login_request_wire_format() {
        let req = LoginRequest {
            name: "mona".into(),
            password: "secret".into(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"mona","password":"secret"}"#
        );
    }
}
