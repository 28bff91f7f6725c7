//! API operation trait and error taxonomy.

use async_trait::async_trait;
use invoicehub_invoicing::InvoicePayload;
use thiserror::Error;

use crate::types::{CatalogItem, ClientRecord, DashboardStats, Invoice};

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API operation.
///
/// Never swallowed and never retried automatically; the draft the caller
/// holds is untouched, so the user can retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx HTTP response, with the raw body.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request could not complete at all.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the contract.
    #[error("decode error: {0}")]
    Decode(String),
}

/// The six operations of the REST contract.
///
/// `HttpClient` is the production implementation; tests substitute a
/// scripted fake to exercise the application layer without a server.
#[async_trait]
pub trait InvoiceApi: Send + Sync {
    async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
    async fn list_invoices(&self) -> ApiResult<Vec<Invoice>>;
    async fn get_invoice(&self, id: i64) -> ApiResult<Invoice>;
    async fn create_invoice(&self, payload: &InvoicePayload) -> ApiResult<Invoice>;
    async fn list_clients(&self) -> ApiResult<Vec<ClientRecord>>;
    async fn list_items(&self) -> ApiResult<Vec<CatalogItem>>;
}
