use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, utils::storage};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn auth_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = storage::get_item(storage::ACCESS_TOKEN_KEY) {
            match format!("Bearer {}", token).parse() {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored access token is not a valid header value"),
            }
        }
        headers
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Session rejected by the API; clearing stored access token");
            storage::remove_item(storage::ACCESS_TOKEN_KEY);
        }
    }

    /// Single choke point for outgoing requests: attaches auth headers and,
    /// in host tests, routes the request to a registered mock responder.
    pub(crate) async fn send_request<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: FnOnce() -> Result<RequestBuilder, ApiError>,
    {
        let request = build()?
            .headers(Self::auth_headers())
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::find(request.url().as_str()) {
            return responder.respond(&request).map(MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T>(&self, response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        ApiError::from_response(status, body)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
