//! In-memory tabular view of one worksheet.

use std::collections::HashMap;

pub mod reader;

pub use reader::{read_sheet, read_sheet_or_empty};

/// One raw spreadsheet cell. Booleans and dates are folded into these
/// three variants at load time (see `reader`), so every downstream rule is
/// an explicit match over exactly this shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Blank,
    Number(f64),
    Text(String),
}

static BLANK: CellValue = CellValue::Blank;

impl CellValue {
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// String form of a present value. Blank cells and non-finite numbers
    /// have no string form.
    pub fn to_display(&self) -> Option<String> {
        match self {
            CellValue::Blank => None,
            CellValue::Number(n) if !n.is_finite() => None,
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    /// Numeric coercion. Unparseable text and blanks are missing, never
    /// an error; infinities count as missing too.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Blank => None,
            CellValue::Number(n) => n.is_finite().then_some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Ordered rows under named columns, as read from one sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Build a table from a header row and data rows. Rows are padded (or
    /// truncated) to the header width so column lookups never go out of
    /// bounds.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, CellValue::Blank);
        }
        let index = Self::build_index(&columns);
        Self { columns, index, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn build_index(columns: &[String]) -> HashMap<String, usize> {
        // On duplicate headers the last occurrence wins.
        columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rename headers to canonical field names via a fixed lookup table.
    /// Headers not named in the table keep their source name and stay
    /// unused by the pipelines.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for col in &mut self.columns {
            if let Some(&(_, to)) = renames.iter().find(|&&(from, _)| from == col.as_str()) {
                *col = to.to_string();
            }
        }
        self.index = Self::build_index(&self.columns);
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }
}

/// Borrowed view of one table row with lookup by canonical column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a SheetTable,
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// Cell under the named column; a structurally absent column reads as
    /// a blank cell.
    pub fn get(&self, column: &str) -> &'a CellValue {
        match self.table.index.get(column) {
            Some(&i) => &self.cells[i],
            None => &BLANK,
        }
    }
}
