//! # API crate — HTTP client for the remote authentication service
//!
//! The service itself is an external collaborator; this crate owns the wire
//! shapes and the one call the app makes: `POST /auth/login/admin`. Cookies
//! ride along on the web target. Callers collapse every [`ApiError`] variant
//! into a single generic user-facing message, so the error enum exists for
//! logs, not for the UI.

use serde::{Deserialize, Serialize};
use session::UserRecord;
use thiserror::Error;

/// Compile-time fallback when `SCANGATE_API_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://192.168.0.100:8080";

/// Where the authentication service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("SCANGATE_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }
}

/// Failure of an authentication call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a 2xx body that did not decode.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("server answered {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    phone_number: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: UserRecord,
}

/// Client for the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for AuthClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    /// Submit raw credentials to the admin login endpoint.
    ///
    /// The response body is expected to carry the user inside a `user`
    /// field; extra fields are ignored. The password does not outlive the
    /// request.
    pub async fn login_admin(
        &self,
        phone_number: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        let request = self
            .http
            .post(format!("{}/auth/login/admin", self.base_url))
            .json(&LoginRequest {
                phone_number,
                password,
            });

        // Include cookies in the browser fetch
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("login rejected with status {status}");
            return Err(ApiError::Status(status));
        }

        let body: LoginResponse = response.json().await?;
        Ok(body.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_wire_shape() {
        let value = serde_json::to_value(LoginRequest {
            phone_number: "+70000000001",
            password: "secret",
        })
        .unwrap();

        assert_eq!(
            value,
            json!({"phoneNumber": "+70000000001", "password": "secret"})
        );
    }

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let raw = r#"{
            "user": {"phoneNumber": "+7", "name": "Ann", "role": "admin", "id": 3},
            "token": "opaque"
        }"#;

        let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.user.phone_number, "+7");
        assert_eq!(parsed.user.name, "Ann");
    }

    #[test]
    fn test_login_response_requires_user_field() {
        assert!(serde_json::from_str::<LoginResponse>("{}").is_err());
    }

    #[test]
    fn test_default_config_has_base_url() {
        assert!(!ApiConfig::default().base_url.is_empty());
    }
}
