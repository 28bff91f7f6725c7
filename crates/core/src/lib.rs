//! `invoicehub-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO concerns): the
//! decimal money/tax calculator and the validation error model.

pub mod error;
pub mod money;

pub use error::{ValidationError, ValidationResult};
pub use money::{DraftTotals, LineTotals};
