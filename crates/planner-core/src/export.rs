//! Grocery Export
//!
//! Builds the shareable text and CSV for the checked subset of the grocery
//! list. Iteration follows the reference list order, not the check order.

use thiserror::Error;

use crate::domain::{CheckKey, PersistedState, PriceKey};
use crate::price::{format_money, parse_price};

const EXPORT_HEADER: &str = "MASTER PLANNER — Grocery Export";
const NO_ITEMS_LINE: &str = "(No items checked yet)";
const CSV_HEADER: [&str; 2] = ["Item", "Price"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer error: {0}")]
    Buffer(String),
}

/// One checked grocery row; `price` is formatted or empty when unparseable
#[derive(Debug, Clone, PartialEq)]
pub struct ExportItem {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryExport {
    pub text: String,
    pub items: Vec<ExportItem>,
    pub total: f64,
}

/// Collect checked grocery items with their prices.
///
/// `generated_at` is the already-formatted local timestamp for the header.
pub fn build_grocery_export(
    grocery: &[String],
    state: &PersistedState,
    generated_at: &str,
) -> GroceryExport {
    let mut lines = vec![
        EXPORT_HEADER.to_string(),
        format!("Generated: {}", generated_at),
        String::new(),
    ];
    let mut items = Vec::new();
    let mut total = 0.0;

    for (idx, name) in grocery.iter().enumerate() {
        if !state.is_checked(&CheckKey::Grocery(idx)) {
            continue;
        }
        let price = parse_price(state.price(&PriceKey::Grocery(idx)));
        match price {
            Some(value) => {
                total += value;
                lines.push(format!("- {} — ${}", name, format_money(value)));
            }
            None => lines.push(format!("- {}", name)),
        }
        items.push(ExportItem {
            name: name.clone(),
            price: price.map(format_money).unwrap_or_default(),
        });
    }

    if items.is_empty() {
        lines.push(NO_ITEMS_LINE.to_string());
    }
    lines.push(String::new());
    lines.push(format!("Estimated Total (checked items): ${}", format_money(total)));

    GroceryExport {
        text: lines.join("\n"),
        items,
        total,
    }
}

/// Render `Item,Price` CSV, quoting fields with commas, quotes or newlines
pub fn build_csv(items: &[ExportItem]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for item in items {
        writer.write_record([item.name.as_str(), item.price.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let csv = String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(csv.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grocery() -> Vec<String> {
        ["Milk", "Bread", "Eggs"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_export_checked_subset() {
        let mut state = PersistedState::default();
        state.toggle_check(&CheckKey::Grocery(0));
        state.toggle_check(&CheckKey::Grocery(2));
        state.set_price(&PriceKey::Grocery(0), "2.50");
        state.set_price(&PriceKey::Grocery(2), "abc");

        let export = build_grocery_export(&grocery(), &state, "10/16/2026, 9:00:00 AM");
        let lines: Vec<&str> = export.text.lines().collect();

        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines[1], "Generated: 10/16/2026, 9:00:00 AM");
        assert_eq!(lines[3], "- Milk — $2.50");
        assert_eq!(lines[4], "- Eggs");
        assert_eq!(*lines.last().unwrap(), "Estimated Total (checked items): $2.50");
        assert!(!export.text.contains("Bread"));
        assert_eq!(
            export.items,
            vec![
                ExportItem { name: "Milk".into(), price: "2.50".into() },
                ExportItem { name: "Eggs".into(), price: String::new() },
            ]
        );
        assert_eq!(export.total, 2.5);
    }

    #[test]
    fn test_export_nothing_checked() {
        let state = PersistedState::default();
        let export = build_grocery_export(&grocery(), &state, "now");
        assert!(export.items.is_empty());
        assert!(export.text.contains(NO_ITEMS_LINE));
        assert!(export.text.ends_with("Estimated Total (checked items): $0.00"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let items = vec![ExportItem { name: "A,B".into(), price: "1.00".into() }];
        assert_eq!(build_csv(&items).unwrap(), "Item,Price\n\"A,B\",1.00");
    }

    #[test]
    fn test_csv_doubles_quotes_and_keeps_empty_price() {
        let items = vec![
            ExportItem { name: "12\" sub".into(), price: String::new() },
            ExportItem { name: "Plain".into(), price: "3.00".into() },
        ];
        assert_eq!(
            build_csv(&items).unwrap(),
            "Item,Price\n\"12\"\" sub\",\nPlain,3.00"
        );
    }

    #[test]
    fn test_csv_header_only() {
        assert_eq!(build_csv(&[]).unwrap(), "Item,Price");
    }
}
