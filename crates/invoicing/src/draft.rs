//! Invoice draft aggregate: client name + ordered line items.

use invoicehub_core::money::DraftTotals;
use invoicehub_core::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::line_item::{ItemField, LineItem};

/// A typed edit to the draft, produced by the form and consumed by
/// [`InvoiceDraft::apply`]. This replaces per-widget callbacks with a single
/// state-update function, so the whole editing flow is unit-testable
/// without a rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftCommand {
    /// Append a blank row at the end of the collection.
    AddRow,
    /// Remove the row at `index`. Out-of-range is a no-op; remaining rows
    /// keep their relative order.
    RemoveRow { index: usize },
    /// Set one field of one row from raw form text. Out-of-range is a no-op.
    UpdateField {
        index: usize,
        field: ItemField,
        value: String,
    },
    /// Replace the client name.
    SetClientName { value: String },
    /// Blank the form: no client name, one default row.
    Reset,
}

/// The unsaved, client-side-only invoice under construction.
///
/// The draft is ephemeral: it lives for one create-session and is replaced
/// by a blank draft once the server acknowledges creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub client_name: String,
    pub items: Vec<LineItem>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDraft {
    /// A blank draft as the form presents it: one default empty row.
    pub fn new() -> Self {
        Self {
            client_name: String::new(),
            items: vec![LineItem::blank()],
        }
    }

    /// Append a blank row, returning its position.
    pub fn push_row(&mut self) -> usize {
        let index = self.items.len();
        self.items.push(LineItem::blank());
        index
    }

    /// Single state-update function for all form edits.
    pub fn apply(&mut self, command: DraftCommand) {
        match command {
            DraftCommand::AddRow => {
                self.push_row();
            }
            DraftCommand::RemoveRow { index } => {
                if index < self.items.len() {
                    self.items.remove(index);
                } else {
                    tracing::debug!(index, "remove for a row that no longer exists");
                }
            }
            DraftCommand::UpdateField {
                index,
                field,
                value,
            } => {
                if let Some(row) = self.items.get_mut(index) {
                    row.set_field(field, &value);
                }
            }
            DraftCommand::SetClientName { value } => {
                self.client_name = value;
            }
            DraftCommand::Reset => {
                *self = Self::new();
            }
        }
    }

    /// Aggregate totals over every row, valid or not. Invalid rows carry
    /// zero quantity or price and so contribute zero. Always a full
    /// recompute from the current state; nothing is cached.
    pub fn totals(&self) -> DraftTotals {
        DraftTotals::accumulate(self.items.iter().map(LineItem::totals))
    }

    /// Validate the draft and build the wire payload for `POST /invoices`.
    ///
    /// Rows failing the submission invariant are silently filtered out
    /// before the empty check. Never mutates the draft, so a failed
    /// attempt leaves the form exactly as it was.
    pub fn prepare_submission(&self) -> ValidationResult<InvoicePayload> {
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(ValidationError::MissingClientName);
        }

        let items: Vec<PayloadItem> = self
            .items
            .iter()
            .filter(|row| row.is_valid_for_submission())
            .map(PayloadItem::from_row)
            .collect();

        if items.is_empty() {
            return Err(ValidationError::NoValidItems);
        }

        Ok(InvoicePayload {
            client_name: client_name.to_string(),
            items,
        })
    }
}

/// Body of `POST /invoices`. Field names are fixed by the server contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub client_name: String,
    pub items: Vec<PayloadItem>,
}

/// One submitted line. Per-item amounts are client-computed and sent
/// unrounded; the server stores them as authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub gst_percentage: Decimal,
    pub item_total: Decimal,
    pub gst_amount: Decimal,
}

impl PayloadItem {
    fn from_row(row: &LineItem) -> Self {
        let totals = row.totals();
        Self {
            name: row.name.trim().to_string(),
            quantity: row.quantity,
            unit_price: row.unit_price,
            gst_percentage: row.tax_rate,
            item_total: totals.subtotal,
            gst_amount: totals.tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn filled_row(name: &str, qty: &str, price: &str, rate: &str) -> Vec<DraftCommand> {
        vec![
            DraftCommand::UpdateField {
                index: 0,
                field: ItemField::Name,
                value: name.to_string(),
            },
            DraftCommand::UpdateField {
                index: 0,
                field: ItemField::Quantity,
                value: qty.to_string(),
            },
            DraftCommand::UpdateField {
                index: 0,
                field: ItemField::UnitPrice,
                value: price.to_string(),
            },
            DraftCommand::UpdateField {
                index: 0,
                field: ItemField::TaxRate,
                value: rate.to_string(),
            },
        ]
    }

    fn draft_with_two_items() -> InvoiceDraft {
        // A: 2 x 100 at 18%, B: 1 x 50 at 5%.
        let mut draft = InvoiceDraft::new();
        draft.apply(DraftCommand::SetClientName {
            value: "Acme Traders".to_string(),
        });
        for cmd in filled_row("A", "2", "100", "18") {
            draft.apply(cmd);
        }
        draft.apply(DraftCommand::AddRow);
        draft.apply(DraftCommand::UpdateField {
            index: 1,
            field: ItemField::Name,
            value: "B".to_string(),
        });
        draft.apply(DraftCommand::UpdateField {
            index: 1,
            field: ItemField::Quantity,
            value: "1".to_string(),
        });
        draft.apply(DraftCommand::UpdateField {
            index: 1,
            field: ItemField::UnitPrice,
            value: "50".to_string(),
        });
        draft.apply(DraftCommand::UpdateField {
            index: 1,
            field: ItemField::TaxRate,
            value: "5".to_string(),
        });
        draft
    }

    #[test]
    fn new_draft_has_one_blank_row() {
        let draft = InvoiceDraft::new();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.totals(), DraftTotals::ZERO);
    }

    #[test]
    fn add_row_appends_at_end() {
        let mut draft = InvoiceDraft::new();
        assert_eq!(draft.push_row(), 1);
        assert_eq!(draft.push_row(), 2);
        assert_eq!(draft.items.len(), 3);
    }

    #[test]
    fn remove_row_out_of_range_is_noop() {
        let mut draft = InvoiceDraft::new();
        draft.apply(DraftCommand::RemoveRow { index: 7 });
        assert_eq!(draft.items.len(), 1);
        draft.apply(DraftCommand::RemoveRow { index: 0 });
        assert!(draft.items.is_empty());
    }

    #[test]
    fn update_field_out_of_range_is_noop() {
        let mut draft = InvoiceDraft::new();
        let before = draft.clone();
        draft.apply(DraftCommand::UpdateField {
            index: 3,
            field: ItemField::Quantity,
            value: "5".to_string(),
        });
        assert_eq!(draft, before);
    }

    #[test]
    fn totals_match_worked_example() {
        let draft = draft_with_two_items();
        let totals = draft.totals();
        assert_eq!(totals.subtotal, dec("250"));
        assert_eq!(totals.total_tax, dec("38.5"));
        assert_eq!(totals.grand_total, dec("288.5"));
    }

    #[test]
    fn malformed_quantity_contributes_zero() {
        let mut draft = draft_with_two_items();
        draft.apply(DraftCommand::UpdateField {
            index: 0,
            field: ItemField::Quantity,
            value: "two".to_string(),
        });
        let totals = draft.totals();
        assert_eq!(totals.subtotal, dec("50"));
        assert_eq!(totals.grand_total, dec("52.5"));
    }

    #[test]
    fn missing_client_name_blocks_submission() {
        let mut draft = draft_with_two_items();
        draft.apply(DraftCommand::SetClientName {
            value: "   ".to_string(),
        });
        assert_eq!(
            draft.prepare_submission().unwrap_err(),
            ValidationError::MissingClientName
        );
    }

    #[test]
    fn zero_quantity_only_row_leaves_nothing_to_submit() {
        let mut draft = InvoiceDraft::new();
        draft.apply(DraftCommand::SetClientName {
            value: "Acme".to_string(),
        });
        draft.apply(DraftCommand::UpdateField {
            index: 0,
            field: ItemField::Name,
            value: "Widget".to_string(),
        });
        draft.apply(DraftCommand::UpdateField {
            index: 0,
            field: ItemField::UnitPrice,
            value: "10".to_string(),
        });
        // Quantity stays zero, the row is filtered, and nothing survives.
        assert_eq!(
            draft.prepare_submission().unwrap_err(),
            ValidationError::NoValidItems
        );
    }

    #[test]
    fn invalid_rows_are_silently_dropped() {
        let mut draft = draft_with_two_items();
        draft.apply(DraftCommand::AddRow);
        // Third row has a name but no price; it must not appear in the payload.
        draft.apply(DraftCommand::UpdateField {
            index: 2,
            field: ItemField::Name,
            value: "Freebie".to_string(),
        });
        let payload = draft.prepare_submission().unwrap();
        assert_eq!(payload.items.len(), 2);
        assert!(payload.items.iter().all(|i| i.name != "Freebie"));
    }

    #[test]
    fn payload_carries_client_computed_amounts() {
        let draft = draft_with_two_items();
        let payload = draft.prepare_submission().unwrap();

        assert_eq!(payload.client_name, "Acme Traders");
        assert_eq!(payload.items[0].item_total, dec("200"));
        assert_eq!(payload.items[0].gst_amount, dec("36"));
        assert_eq!(payload.items[1].item_total, dec("50"));
        assert_eq!(payload.items[1].gst_amount, dec("2.5"));
    }

    #[test]
    fn payload_wire_shape() {
        let mut draft = InvoiceDraft::new();
        draft.apply(DraftCommand::SetClientName {
            value: "Acme".to_string(),
        });
        for cmd in filled_row("Widget", "2", "100", "18") {
            draft.apply(cmd);
        }
        let payload = draft.prepare_submission().unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "client_name": "Acme",
                "items": [{
                    "name": "Widget",
                    "quantity": 2.0,
                    "unit_price": 100.0,
                    "gst_percentage": 18.0,
                    "item_total": 200.0,
                    "gst_amount": 36.0
                }]
            })
        );
    }

    #[test]
    fn failed_validation_leaves_draft_untouched() {
        let draft = InvoiceDraft::new();
        let before = draft.clone();
        assert!(draft.prepare_submission().is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn reset_restores_blank_form() {
        let mut draft = draft_with_two_items();
        draft.apply(DraftCommand::Reset);
        assert_eq!(draft, InvoiceDraft::new());
    }

    proptest! {
        /// Permuting rows never changes the aggregate totals.
        #[test]
        fn totals_are_order_independent(
            rows in prop::collection::vec(
                (1i64..1000, 0i64..100_000, 0i64..=28),
                1..50
            )
        ) {
            let items: Vec<LineItem> = rows
                .iter()
                .map(|(q, p, r)| LineItem {
                    name: "x".to_string(),
                    quantity: Decimal::from(*q),
                    unit_price: Decimal::new(*p, 2),
                    tax_rate: Decimal::from(*r),
                })
                .collect();
            let mut shuffled = items.clone();
            shuffled.reverse();

            let a = InvoiceDraft { client_name: "c".to_string(), items };
            let b = InvoiceDraft { client_name: "c".to_string(), items: shuffled };
            prop_assert_eq!(a.totals(), b.totals());
        }
    }
}
