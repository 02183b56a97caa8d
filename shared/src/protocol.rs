use crate::{
    LoginRequest, LoginResponse, PATH_LOGIN, PATH_PROFILE, PATH_SIGNUP, SignupRequest,
    UserProfile,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries `Authorization: Bearer <token>`.
    const AUTHENTICATED: bool = false;
    /// Skip the success body; `Response` is then decoded from JSON `null`.
    const DISCARD_BODY: bool = false;
}

// =========================================================
// Request Definitions
// =========================================================

/// Register a new account. The success body is not guaranteed to be JSON.
impl ApiRequest for SignupRequest {
    type Response = ();
    const PATH: &'static str = PATH_SIGNUP;
    const METHOD: HttpMethod = HttpMethod::Post;
    const DISCARD_BODY: bool = true;
}

/// Exchange credentials for a session token.
impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const PATH: &'static str = PATH_LOGIN;
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Read the profile of the token holder. Sent without a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = UserProfile;
    const PATH: &'static str = PATH_PROFILE;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_auth_service_routes() {
        assert_eq!(SignupRequest::PATH, "/api/auth/signup");
        assert_eq!(SignupRequest::METHOD, HttpMethod::Post);
        assert!(!SignupRequest::AUTHENTICATED);
        assert!(SignupRequest::DISCARD_BODY);

        assert_eq!(LoginRequest::PATH, "/api/auth/login");
        assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(!LoginRequest::DISCARD_BODY);

        assert_eq!(ProfileRequest::PATH, "/api/auth/profile");
        assert_eq!(ProfileRequest::METHOD, HttpMethod::Get);
        assert!(ProfileRequest::AUTHENTICATED);
    }
}
