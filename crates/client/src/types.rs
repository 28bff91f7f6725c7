//! Response shapes of the REST contract.
//!
//! These mirror the server's JSON; the client never mutates an invoice
//! once created, so everything here is read-only data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment status as assigned by the server.
///
/// The status set is server-defined, so anything beyond the known values
/// is carried through verbatim rather than failing the decode: one novel
/// status must not break an entire invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => InvoiceStatus::Pending,
            "paid" => InvoiceStatus::Paid,
            _ => InvoiceStatus::Other(raw),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A persisted invoice, owned by the server.
///
/// `invoice_number` is server-assigned (e.g. `INV-0042`); the client only
/// ever reads these back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub client_name: String,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub grand_total: Decimal,
}

/// `GET /dashboard` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_invoices: i64,
    pub total_revenue: Decimal,
    pub pending_amount: Decimal,
}

/// One row of the read-only client listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the read-only item catalogue, with its default GST rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub gst_percentage: Decimal,
    pub created_at: DateTime<Utc>,
}
