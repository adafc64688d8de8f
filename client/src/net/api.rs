//! Typed REST client for the business API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>` instead of panicking. Pages catch the
//! error and report it with an error toast; `401` is surfaced as
//! [`ApiError::Unauthorized`] so callers can drop the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{ClientConfig, DiscountCode, LoginRequest, LoginResponse, NewDiscountCode, Order, User};

/// Failure of a REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The API rejected the session token.
    #[error("not signed in")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is not available outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-2xx response to an error, keeping the server's message.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status { status, message: error_message(body) }
    }

    /// Text suitable for a toast body.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract `message` or `error` from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn order_cancel_path(order_id: &str) -> String {
    format!("/orders/{order_id}/cancel")
}

fn discount_path(discount_id: &str) -> String {
    format!("/discounts/{discount_id}")
}

/// Fetch runtime configuration from the host serving this app.
///
/// # Errors
///
/// Returns an [`ApiError`] if the host is unreachable or answers non-2xx.
pub async fn fetch_client_config() -> Result<ClientConfig, ApiError> {
    ApiClient::new("").get_json("/api/client-config").await
}

/// REST client bound to an API base URL and an optional session token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, token: None }
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Absolute URL for an API path such as `/orders`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Exchange credentials for a session token via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", &LoginRequest { email, password }).await
    }

    /// Fetch the account behind the current token via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the token is missing or stale.
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status or decode failure.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/orders").await
    }

    /// Cancel an order and return its updated record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status or decode failure.
    pub async fn cancel_order(&self, order_id: &str) -> Result<Order, ApiError> {
        self.post_json(&order_cancel_path(order_id), &serde_json::json!({})).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status or decode failure.
    pub async fn list_discounts(&self) -> Result<Vec<DiscountCode>, ApiError> {
        self.get_json("/discounts").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`]; a duplicate code comes back as `Status` with
    /// the server's message.
    pub async fn create_discount(&self, payload: &NewDiscountCode) -> Result<DiscountCode, ApiError> {
        self.post_json("/discounts", payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport or status failure.
    pub async fn delete_discount(&self, discount_id: &str) -> Result<(), ApiError> {
        self.delete(&discount_path(discount_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self.authorize(gloo_net::http::Request::get(&self.endpoint(path)));
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self
                .authorize(gloo_net::http::Request::post(&self.endpoint(path)))
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = self.authorize(gloo_net::http::Request::delete(&self.endpoint(path)));
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(ApiError::from_status(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &bearer_header(token)),
            None => req,
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("{} -> {status}", resp.url());
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
