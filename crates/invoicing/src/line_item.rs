//! One billable row of the invoice creation form.

use invoicehub_core::money::{self, LineTotals};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default GST rate applied to a freshly added row.
pub const DEFAULT_TAX_RATE_PERCENT: u32 = 18;

/// Upper bound of the national GST schedule.
pub const MAX_TAX_RATE_PERCENT: u32 = 28;

/// An editable field of a line item.
///
/// Numeric fields take their values as raw form text; parsing leniency is
/// handled when the value is applied, not by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Name,
    Quantity,
    UnitPrice,
    TaxRate,
}

/// One billable row: label, quantity, unit price, tax rate.
///
/// Amount fields derived from these are never stored; see [`LineItem::totals`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_rate: Decimal,
}

impl LineItem {
    /// A blank row as the form creates it: empty name, zero quantity and
    /// price, default tax rate.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            quantity: Decimal::ZERO,
            unit_price: Decimal::ZERO,
            tax_rate: Decimal::from(DEFAULT_TAX_RATE_PERCENT),
        }
    }

    /// Apply one raw form edit to this row.
    ///
    /// Numeric text that fails to parse becomes zero (live-typing policy).
    /// The tax rate is clamped to the schedule range, mirroring the form
    /// control's min/max.
    pub fn set_field(&mut self, field: ItemField, value: &str) {
        match field {
            ItemField::Name => self.name = value.to_string(),
            ItemField::Quantity => self.quantity = money::parse_decimal_or_zero(value),
            ItemField::UnitPrice => self.unit_price = money::parse_decimal_or_zero(value),
            ItemField::TaxRate => {
                let rate = money::parse_decimal_or_zero(value);
                self.tax_rate = rate.clamp(Decimal::ZERO, Decimal::from(MAX_TAX_RATE_PERCENT));
            }
        }
    }

    /// Derived amounts for this row, recomputed from the current fields.
    pub fn totals(&self) -> LineTotals {
        money::line_totals(self.quantity, self.unit_price, self.tax_rate)
    }

    /// A row counts toward submission iff it has a non-blank name, a
    /// positive quantity and a positive price. Rows failing this are
    /// silently dropped at submission time, never reported individually.
    pub fn is_valid_for_submission(&self) -> bool {
        !self.name.trim().is_empty()
            && self.quantity > Decimal::ZERO
            && self.unit_price > Decimal::ZERO
    }
}
