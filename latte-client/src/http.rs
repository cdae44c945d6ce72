//! HTTP client for the menu API

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Menu, MenuCreate};

/// Menu API surface consumed by the editor form
///
/// Seam between form logic and transport so submission can be driven
/// against a stub in tests. [`HttpClient`] is the production
/// implementation.
#[async_trait]
pub trait MenuApi {
    /// Whether a menu with this (trimmed) name already exists
    async fn check_same_menu_name(&self, menu_name: &str) -> ClientResult<bool>;

    /// Register a new menu and return the created record
    async fn register_menu(&self, menu: &MenuCreate) -> ClientResult<Menu>;
}

/// HTTP client for making network requests to the menu API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request = self.client.post(&url).json(body);

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl MenuApi for HttpClient {
    async fn check_same_menu_name(&self, menu_name: &str) -> ClientResult<bool> {
        #[derive(serde::Serialize)]
        struct CheckSameMenuName<'a> {
            menu_name: &'a str,
        }

        // The endpoint answers with a loose truthy payload, not a strict bool
        let payload: serde_json::Value = self
            .post("/api/checkSameMenuName", &CheckSameMenuName { menu_name })
            .await?;

        tracing::debug!(menu_name, %payload, "menu name duplicate check");
        Ok(is_truthy(&payload))
    }

    async fn register_menu(&self, menu: &MenuCreate) -> ClientResult<Menu> {
        let created: Menu = self.post("/api/registerMenu", menu).await?;
        tracing::debug!(menu_id = created.menu_id, name = %created.menu_name, "menu registered");
        Ok(created)
    }
}

/// JS-style truthiness for the duplicate-check payload
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
