//! Row normalization pipelines for the two facility sheets.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::NO_DATA;
use crate::sheet::CellValue;

pub mod hydrogen;
pub mod steel;

pub use hydrogen::{hydrogen_view, HYDROGEN_SHEET};
pub use steel::{steel_view, STEEL_SHEET};

/// Quantity followed by "MW". Deliberately not anchored after the unit,
/// so "250 MWh" still extracts 250.
static MW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*MW").expect("MW pattern is valid"));

/// Descriptive-field cleaner. Blank cells and whitespace-only text become
/// the "No data" placeholder; everything else is the trimmed string form.
/// Output is never empty and never a null sentinel.
pub fn clean(cell: &CellValue) -> String {
    match cell.to_display() {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                NO_DATA.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => NO_DATA.to_string(),
    }
}

/// Numeric coercion with missing (not error) semantics.
pub fn as_number(cell: &CellValue) -> Option<f64> {
    cell.to_number()
}

/// Extract the announced capacity in MW out of free text. First match
/// only; no match or a blank cell is a true absent value.
pub fn parse_mw(cell: &CellValue) -> Option<f64> {
    let text = cell.to_display()?;
    let captures = MW_PATTERN.captures(&text)?;
    captures[1].parse().ok()
}

/// End-use flag derivation: true iff the cell coerces to a number
/// strictly greater than zero.
pub fn eu_bool(cell: &CellValue) -> bool {
    matches!(cell.to_number(), Some(n) if n > 0.0)
}

/// Distinct labels in first-occurrence order.
pub fn distinct_statuses<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for label in labels {
        if seen.insert(label) {
            ordered.push(label.to_string());
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn clean_blank_and_empty_become_placeholder() {
        assert_eq!(clean(&CellValue::Blank), "No data");
        assert_eq!(clean(&text("")), "No data");
        assert_eq!(clean(&text("   ")), "No data");
        assert_eq!(clean(&CellValue::Number(f64::NAN)), "No data");
    }

    #[test]
    fn clean_trims_text() {
        assert_eq!(clean(&text("  Paris ")), "Paris");
    }

    #[test]
    fn clean_renders_whole_numbers_without_fraction() {
        assert_eq!(clean(&CellValue::Number(250.0)), "250");
        assert_eq!(clean(&CellValue::Number(12.5)), "12.5");
    }

    #[test]
    fn parse_mw_reads_leading_quantity() {
        assert_eq!(parse_mw(&text("250 MW (Phase 1)")), Some(250.0));
        assert_eq!(parse_mw(&text("12.5MW")), Some(12.5));
        assert_eq!(parse_mw(&text("up to 40 mw electrolyser")), Some(40.0));
    }

    #[test]
    fn parse_mw_without_unit_is_absent() {
        assert_eq!(parse_mw(&text("under construction")), None);
        assert_eq!(parse_mw(&CellValue::Blank), None);
        assert_eq!(parse_mw(&CellValue::Number(250.0)), None);
    }

    #[test]
    fn parse_mw_ignores_trailing_unit_text() {
        // Known behavior: the pattern stops at "MW", so "MWh" matches too.
        assert_eq!(parse_mw(&text("250 MWh")), Some(250.0));
    }

    #[test]
    fn parse_mw_uses_first_match_only() {
        assert_eq!(parse_mw(&text("20 MW now, 100 MW by 2030")), Some(20.0));
    }

    #[test]
    fn eu_bool_true_only_for_positive_numbers() {
        assert!(!eu_bool(&text("")));
        assert!(!eu_bool(&text("0")));
        assert!(eu_bool(&text("3")));
        assert!(!eu_bool(&text("abc")));
        assert!(!eu_bool(&CellValue::Blank));
        assert!(eu_bool(&CellValue::Number(1.0)));
        assert!(!eu_bool(&CellValue::Number(-2.0)));
    }

    #[test]
    fn statuses_keep_first_occurrence_order() {
        let labels = ["Planned", "Online", "Planned", "Cancelled"];
        assert_eq!(
            distinct_statuses(labels),
            vec!["Planned", "Online", "Cancelled"]
        );
    }
}
