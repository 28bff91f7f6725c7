//! `invoicehub-export` — paginated PDF rendering of the current draft.
//!
//! Produces a downloadable A4 document with a header, a tabular body
//! (item, quantity, rate, amount, tax rate, tax amount) and a totals
//! footer. Layout is cosmetic; the amounts come straight from the draft's
//! calculator so the document always matches what the form shows.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use rust_decimal::Decimal;
use thiserror::Error;

use invoicehub_core::money::{self, DraftTotals};
use invoicehub_invoicing::LineItem;

/// Item labels longer than this are truncated in the table.
const MAX_NAME_CHARS: usize = 25;

/// Rows stop here; below it only the totals footer fits.
const BODY_FLOOR_MM: f32 = 40.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// More rows than a single page can hold.
    #[error("too many items for a single page")]
    TooManyItems,

    #[error("pdf rendering failed: {0}")]
    Pdf(String),
}

/// Render the draft's valid rows into a single-page PDF.
///
/// Invalid rows (blank name, zero quantity or price) are skipped, the same
/// filter submission applies, so the document never shows amounts that
/// would not be saved. `issued_on` is printed in the header as dd/mm/yyyy.
pub fn render_invoice_pdf(
    client_name: &str,
    items: &[LineItem],
    issued_on: chrono::NaiveDate,
) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<&LineItem> = items
        .iter()
        .filter(|row| row.is_valid_for_submission())
        .collect();
    let totals = DraftTotals::accumulate(rows.iter().map(|row| row.totals()));

    let (doc, page, layer) = PdfDocument::new("Invoice", Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    // Header.
    text(&layer, &font_bold, "INVOICE", 22.0, 20.0, 270.0);
    text(&layer, &font, &format!("Client: {}", display_name(client_name)), 14.0, 20.0, 255.0);
    text(
        &layer,
        &font,
        &format!("Date: {}", issued_on.format("%d/%m/%Y")),
        14.0,
        20.0,
        247.0,
    );

    // Table header.
    let columns = [
        (20.0, "Item"),
        (78.0, "Qty"),
        (98.0, "Rate"),
        (123.0, "Amount"),
        (150.0, "GST"),
        (168.0, "GST Amt"),
    ];
    let mut y = 230.0;
    for (x, label) in columns {
        text(&layer, &font_bold, label, 10.0, x, y);
    }
    rule(&layer, y - 2.0);
    y -= 8.0;

    // Body.
    for row in &rows {
        if y < BODY_FLOOR_MM {
            return Err(ExportError::TooManyItems);
        }
        let line = row.totals();
        text(&layer, &font, &truncate_name(&row.name), 9.0, 20.0, y);
        text(&layer, &font, &money::format_2dp(row.quantity), 9.0, 78.0, y);
        text(&layer, &font, &rupees(row.unit_price), 9.0, 98.0, y);
        text(&layer, &font, &rupees(line.subtotal), 9.0, 123.0, y);
        text(&layer, &font, &format!("{}%", row.tax_rate), 9.0, 150.0, y);
        text(&layer, &font, &rupees(line.tax), 9.0, 168.0, y);
        y -= 7.0;
    }

    // Totals footer.
    y -= 8.0;
    rule(&layer, y + 5.0);
    text(&layer, &font, &format!("Subtotal: {}", rupees(totals.subtotal)), 12.0, 130.0, y);
    text(
        &layer,
        &font,
        &format!("Total GST: {}", rupees(totals.total_tax)),
        12.0,
        130.0,
        y - 8.0,
    );
    text(
        &layer,
        &font_bold,
        &format!("Grand Total: {}", rupees(totals.grand_total)),
        16.0,
        130.0,
        y - 20.0,
    );

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, s: &str, size: f32, x: f32, y: f32) {
    layer.use_text(s, size, Mm(x), Mm(y), font);
}

fn rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(printpdf::Line {
        points: vec![
            (printpdf::Point::new(Mm(20.0), Mm(y)), false),
            (printpdf::Point::new(Mm(190.0), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn rupees(amount: Decimal) -> String {
    format!("Rs {}", money::format_2dp(amount))
}

fn display_name(client_name: &str) -> &str {
    let trimmed = client_name.trim();
    if trimmed.is_empty() { "Client" } else { trimmed }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}
