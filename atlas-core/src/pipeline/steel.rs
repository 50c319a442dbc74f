//! Steel sheet normalization.

use crate::domain::{SteelProject, SteelView};
use crate::sheet::SheetTable;

use super::{as_number, clean};

pub const STEEL_SHEET: &str = "Steel";

/// Source header -> canonical field name. The steel sheet is authored by
/// hand, typos and mixed languages included, so these strings must match
/// exactly what is in the workbook.
pub const STEEL_RENAMES: &[(&str, &str)] = &[
    ("Production company", "production_company"),
    ("Capacity", "capacity"),
    ("Order company", "order_company"),
    ("Production years", "production_years"),
    ("Technology", "technology"),
    ("capex", "capex"),
    ("expected date online", "expected_date_online"),
    ("current status of the project", "status"),
    ("страна", "country"),
    ("longitide of the project", "lng"),
    ("latitutde of the project", "lat"),
    ("additional comments (description and useful facts)", "notes"),
];

/// Normalize the steel sheet into map markers. Same geometry policy as
/// the hydrogen pipeline: both coordinates or the row is dropped, both
/// columns or the sheet is empty.
pub fn steel_view(mut table: SheetTable) -> SteelView {
    table.rename_columns(STEEL_RENAMES);

    if !(table.has_column("lat") && table.has_column("lng")) {
        return SteelView::default();
    }

    let mut projects = Vec::new();
    for row in table.rows() {
        let (Some(lat), Some(lng)) = (as_number(row.get("lat")), as_number(row.get("lng")))
        else {
            continue;
        };

        projects.push(SteelProject {
            name: clean(row.get("production_company")),
            capacity: clean(row.get("capacity")),
            order_company: clean(row.get("order_company")),
            production_years: clean(row.get("production_years")),
            technology: clean(row.get("technology")),
            capex: clean(row.get("capex")),
            expected_date_online: clean(row.get("expected_date_online")),
            status: clean(row.get("status")),
            country: clean(row.get("country")),
            lat,
            lng,
            notes: clean(row.get("notes")),
        });
    }

    SteelView { projects }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample_table() -> SheetTable {
        SheetTable::new(
            vec![
                "Production company".into(),
                "Capacity".into(),
                "страна".into(),
                "latitutde of the project".into(),
                "longitide of the project".into(),
                "additional comments (description and useful facts)".into(),
            ],
            vec![
                vec![
                    text("HYBRIT"),
                    text("1.35 Mt/y"),
                    text("Sweden"),
                    CellValue::Number(67.85),
                    text("20.22"),
                    text("  pilot since 2021 "),
                ],
                vec![
                    text("No coords"),
                    CellValue::Blank,
                    text("Germany"),
                    text("n/a"),
                    CellValue::Blank,
                    CellValue::Blank,
                ],
            ],
        )
    }

    #[test]
    fn cyrillic_country_header_is_renamed() {
        let view = steel_view(sample_table());
        assert_eq!(view.projects[0].country, "Sweden");
    }

    #[test]
    fn rows_need_both_coordinates() {
        let view = steel_view(sample_table());
        assert_eq!(view.projects.len(), 1);
        assert_eq!(view.projects[0].name, "HYBRIT");
        assert_eq!(view.projects[0].lng, 20.22);
    }

    #[test]
    fn text_fields_are_cleaned() {
        let view = steel_view(sample_table());
        let project = &view.projects[0];
        assert_eq!(project.notes, "pilot since 2021");
        assert_eq!(project.order_company, "No data");
    }

    #[test]
    fn missing_geometry_column_yields_no_markers() {
        let table = SheetTable::new(
            vec!["Production company".into()],
            vec![vec![text("HYBRIT")]],
        );
        assert!(steel_view(table).projects.is_empty());
    }
}
