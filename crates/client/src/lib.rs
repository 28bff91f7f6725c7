//! `invoicehub-client` — gateway adapter for the InvoiceHub REST API.
//!
//! Each operation maps to exactly one HTTP request against a fixed base
//! path, all bodies JSON. Single attempt per call: no retry, no backoff,
//! no timeout policy. Failures carry the status code and raw response body
//! so the caller can surface them and decide whether to retry.

pub mod api;
pub mod http;
pub mod types;

pub use api::{ApiError, ApiResult, InvoiceApi};
pub use http::HttpClient;
pub use types::{CatalogItem, ClientRecord, DashboardStats, Invoice, InvoiceStatus};
