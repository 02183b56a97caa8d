pub mod date;
pub mod protocol;

pub use protocol::{ApiRequest, HttpMethod};

use serde::{Deserialize, Serialize};
use std::fmt;

// =========================================================
// Constants
// =========================================================

pub const PATH_SIGNUP: &str = "/api/auth/signup";
pub const PATH_LOGIN: &str = "/api/auth/login";
pub const PATH_PROFILE: &str = "/api/auth/profile";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Build the value of the `Authorization` header for a session token.
///
/// # Arguments
/// * `token` - raw token as stored by the client
///
/// # Returns
/// `Bearer <token>`
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

// =========================================================
// Domain Models
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Admin,
    Healer,
    Vendor,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Customer,
        UserRole::Admin,
        UserRole::Healer,
        UserRole::Vendor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
            UserRole::Healer => "healer",
            UserRole::Vendor => "vendor",
        }
    }

    /// Label shown in the signup role picker.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
            UserRole::Healer => "Healer",
            UserRole::Vendor => "Vendor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful login. Only the token is used; the service also sends
/// `refresh_token`, `expires_at` and the user record, which are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Read-only projection of the authenticated user.
///
/// `role` stays a plain string: it is displayed verbatim, whatever the server
/// sends. `created_at` is kept raw and rendered by [`date::render_local`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub created_at: String,
}

/// Error body of the auth service: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signup_request_uses_wire_field_names() {
        let req = SignupRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone_number: "555-0100".into(),
            password: "hunter22".into(),
            role: UserRole::Healer,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone_number": "555-0100",
                "password": "hunter22",
                "role": "healer"
            })
        );
    }

    #[test]
    fn login_response_ignores_extra_fields() {
        let body = json!({
            "token": "abc",
            "refresh_token": "",
            "expires_at": "2024-01-02T00:00:00Z",
            "user": { "id": "cust_1" }
        });
        let resp: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.token, "abc");
    }

    #[test]
    fn profile_ignores_unused_user_fields() {
        let body = json!({
            "id": "cust_1",
            "email": "ada@example.com",
            "phone_number": "555-0100",
            "name": "Ada",
            "role": "customer",
            "email_verified": false,
            "phone_verified": false,
            "created_at": "2024-03-01T10:20:30Z",
            "updated_at": "2024-03-01T10:20:30Z"
        });
        let profile: UserProfile = serde_json::from_value(body).unwrap();
        assert_eq!(profile.id, "cust_1");
        assert_eq!(profile.role, "customer");
    }

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);

        let body: ErrorBody = serde_json::from_str(r#"{"error":"bad creds"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("bad creds"));
    }

    #[test]
    fn role_parse_matches_wire_names() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("root"), None);
    }
}
