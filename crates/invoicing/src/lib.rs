//! `invoicehub-invoicing` — the invoice draft under construction.
//!
//! A draft is the client-side-only invoice being edited in the creation
//! form: a client name plus an ordered collection of line items. Edits
//! arrive as typed [`DraftCommand`]s consumed by a single state-update
//! function, and totals are a pure function of the current state.

pub mod draft;
pub mod line_item;

pub use draft::{DraftCommand, InvoiceDraft, InvoicePayload, PayloadItem};
pub use line_item::{ItemField, LineItem, DEFAULT_TAX_RATE_PERCENT, MAX_TAX_RATE_PERCENT};
