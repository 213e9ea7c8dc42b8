//! Auth endpoints: login and registration.
//!
//! A server rejection surfaces as [`ApiError::Api`]; the session store is
//! never touched from here — the caller decides what to do with the token.

use deck_core::User;
use serde::{Deserialize, Serialize};

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the
    /// credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects the
    /// registration.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(request)
            .send()
            .await?;
        Ok(check_response(resp).await?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "token": "tok123",
        "user": { "id": 1, "name": "Ada", "email": "a@b.com" }
    }"#;

    #[test]
    fn auth_response_parses_token_and_user_together() {
        let resp: AuthResponse = serde_json::from_str(FIXTURE).expect("parse");
        assert_eq!(resp.token, "tok123");
        assert_eq!(resp.user.id, 1);
        assert_eq!(resp.user.email, "a@b.com");
    }

    #[test]
    fn login_request_serializes_credentials_only() {
        let req = LoginRequest {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json.as_object().expect("object").len(), 2);
    }
}
