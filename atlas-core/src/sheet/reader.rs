//! Workbook loading via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use tracing::warn;

use super::{CellValue, SheetTable};
use crate::common::{AtlasError, Result};

/// Read one named sheet into a table. The first row is the header row;
/// anything below it is data.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(AtlasError::SheetMissing(sheet.to_string()));
    }
    let range = workbook.worksheet_range(sheet)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(SheetTable::empty());
    };

    let columns = header.iter().map(header_text).collect();
    let data = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    Ok(SheetTable::new(columns, data))
}

/// Best-effort variant used by the request path: a missing file, missing
/// sheet, or parse failure degrades to an empty table so the page still
/// renders.
pub fn read_sheet_or_empty(path: &Path, sheet: &str) -> SheetTable {
    match read_sheet(path, sheet) {
        Ok(table) => table,
        Err(err) => {
            warn!(sheet, path = %path.display(), error = %err, "sheet unavailable, rendering empty table");
            SheetTable::empty()
        }
    }
}

fn header_text(data: &Data) -> String {
    cell_value(data)
        .to_display()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        // Booleans coerce numerically, like the sheet tools authors use.
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => datetime_text(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Blank,
    }
}

fn datetime_text(dt: &ExcelDateTime) -> CellValue {
    match dt.as_datetime() {
        Some(dt) if dt.time() == chrono::NaiveTime::MIN => {
            CellValue::Text(dt.date().format("%Y-%m-%d").to_string())
        }
        Some(dt) => CellValue::Text(dt.format("%Y-%m-%d %H:%M").to_string()),
        // Out-of-range serials keep their raw numeric form.
        None => CellValue::Number(dt.as_f64()),
    }
}
