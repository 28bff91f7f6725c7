//! Money/tax arithmetic and rupee display formatting.
//!
//! All computation uses exact decimal values; nothing is rounded until a
//! value is rendered for display. Totals are always recomputed from scratch
//! from the current line data so there is no incremental-accumulation drift.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Per-line derived amounts. Never stored; recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Aggregate derived amounts across all lines of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftTotals {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

impl DraftTotals {
    pub const ZERO: DraftTotals = DraftTotals {
        subtotal: Decimal::ZERO,
        total_tax: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };

    /// Elementwise sum over per-line totals. Order-independent.
    pub fn accumulate(lines: impl IntoIterator<Item = LineTotals>) -> Self {
        lines.into_iter().fold(Self::ZERO, |acc, line| Self {
            subtotal: acc.subtotal + line.subtotal,
            total_tax: acc.total_tax + line.tax,
            grand_total: acc.grand_total + line.total,
        })
    }
}

/// Compute a line's subtotal, tax amount and total.
///
/// `tax_rate` is a percentage (18 means 18%).
pub fn line_totals(quantity: Decimal, unit_price: Decimal, tax_rate: Decimal) -> LineTotals {
    let subtotal = quantity * unit_price;
    let tax = subtotal * tax_rate / Decimal::ONE_HUNDRED;
    LineTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Lenient numeric parsing for live-typing form fields.
///
/// Input that does not parse as a decimal is coerced to zero rather than
/// surfaced as an error, so a partially-typed field never throws. The flip
/// side is that a mistyped quantity silently contributes nothing. Whole-string
/// parsing only: `"12abc"` is zero here, not the numeric prefix 12 a
/// `parseFloat`-style reading would take.
pub fn parse_decimal_or_zero(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Exactly two fraction digits, no symbol, no grouping (`1234.50`).
/// Rounds half away from zero.
pub fn format_2dp(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{int_part}.{frac_part:0<2}"),
        None => format!("{text}.00"),
    }
}

/// Render an amount as rupees: `₹` prefix, exactly two fraction digits,
/// Indian digit grouping (`12,34,567.89`). Rounds half away from zero, the
/// same as `toLocaleString('en-IN')` on the wire values.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format_2dp(rounded.abs());

    let (int_part, frac) = text
        .split_once('.')
        .unwrap_or((text.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{}.{frac}", group_indian(int_part))
}

/// Indian grouping: rightmost group of three digits, then groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
