//! reqwest-backed implementation of the REST contract.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use serde::de::DeserializeOwned;

use invoicehub_invoicing::InvoicePayload;

use crate::api::{ApiError, ApiResult, InvoiceApi};
use crate::types::{CatalogItem, ClientRecord, DashboardStats, Invoice};

/// HTTP gateway against a fixed API base path (e.g. `http://host:5000/api`).
///
/// One request per operation, one attempt per request.
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    /// Decode a response, surfacing non-2xx statuses with their raw body.
    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl InvoiceApi for HttpClient {
    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_json("/dashboard").await
    }

    async fn list_invoices(&self) -> ApiResult<Vec<Invoice>> {
        self.get_json("/invoices").await
    }

    async fn get_invoice(&self, id: i64) -> ApiResult<Invoice> {
        self.get_json(&format!("/invoices/{id}")).await
    }

    async fn create_invoice(&self, payload: &InvoicePayload) -> ApiResult<Invoice> {
        self.post_json("/invoices", payload).await
    }

    async fn list_clients(&self) -> ApiResult<Vec<ClientRecord>> {
        self.get_json("/clients").await
    }

    async fn list_items(&self) -> ApiResult<Vec<CatalogItem>> {
        self.get_json("/items").await
    }
}
