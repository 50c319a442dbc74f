//! Hydrogen sheet normalization.

use crate::domain::{EndUses, HydrogenProject, HydrogenView};
use crate::sheet::{Row, SheetTable};

use super::{as_number, clean, distinct_statuses, eu_bool, parse_mw};

pub const HYDROGEN_SHEET: &str = "Hydrogen";

/// Source header -> canonical field name, matched on exact header text.
/// This table is the whole contract with the sheet authors; several
/// canonical fields are carried for the sheet's sake without showing up
/// on a marker.
pub const HYDROGEN_RENAMES: &[(&str, &str)] = &[
    ("ID", "id"),
    ("Project name", "project_name"),
    ("Date online", "date_online"),
    ("Decomission date", "decom_date"),
    ("Status", "status"),
    ("Technology", "technology"),
    ("Technology_details", "technology_details"),
    ("Technology_electricity", "technology_elec"),
    ("Technology_electricity_details", "technology_elec_details"),
    ("Product", "product"),
    ("Announced Size", "announced_size_text"),
    ("Capacity_Mwel", "capacity_mwel"),
    ("Capacity_Nm³ H₂/h", "capacity_nm3ph"),
    ("Capacity_kt H2/y", "capacity_ktpy"),
    ("Capacity_t CO₂ captured/y", "capacity_tco2py"),
    (
        "IEA zero-carbon estimated normalized capacity [Nm³ H₂/hour]",
        "iea_norm_nm3ph",
    ),
    ("Location", "location_name"),
    ("Country", "country"),
    ("Latitude", "lat"),
    ("Longitude", "lng"),
    ("Comments", "comments"),
    ("End use Refining", "eu_refining"),
    ("End use Ammonia", "eu_ammonia"),
    ("End use Methanol", "eu_methanol"),
    ("End use Iron&Steel", "eu_iron_steel"),
    ("End use Other Ind", "eu_other_ind"),
    ("End use Mobility", "eu_mobility"),
    ("End use Power", "eu_power"),
    ("End use Grid inj.", "eu_grid_inj"),
    ("End use CHP", "eu_chp"),
    ("End use Domestic heat", "eu_domestic_heat"),
    ("End use Biofuels", "eu_biofuels"),
    ("End use Synfuels", "eu_synfuels"),
    ("End use CH4 grid inj.", "eu_ch4_grid_inj"),
    ("End use CH4 mobility", "eu_ch4_mobility"),
];

/// Normalize the hydrogen sheet into map markers plus the ordered status
/// labels for the filter control. Rows without both coordinates are
/// dropped; a sheet without both geometry columns yields no markers.
pub fn hydrogen_view(mut table: SheetTable) -> HydrogenView {
    table.rename_columns(HYDROGEN_RENAMES);

    if !(table.has_column("lat") && table.has_column("lng")) {
        return HydrogenView::default();
    }

    let mut projects = Vec::new();
    for row in table.rows() {
        let (Some(lat), Some(lng)) = (as_number(row.get("lat")), as_number(row.get("lng")))
        else {
            continue;
        };

        projects.push(HydrogenProject {
            id: clean(row.get("id")),
            name: clean(row.get("project_name")),
            status: clean(row.get("status")),
            country: clean(row.get("country")),
            location_name: clean(row.get("location_name")),
            lat,
            lng,
            announced_mw: parse_mw(row.get("announced_size_text")),
            capacity_mwel: as_number(row.get("capacity_mwel")),
            capacity_nm3ph: as_number(row.get("capacity_nm3ph")),
            capacity_ktpy: as_number(row.get("capacity_ktpy")),
            date_online: clean(row.get("date_online")),
            decom_date: clean(row.get("decom_date")),
            technology: clean(row.get("technology")),
            comments: clean(row.get("comments")),
            eu: end_uses(&row),
        });
    }

    let statuses = distinct_statuses(projects.iter().map(|p| p.status.as_str()));

    HydrogenView { projects, statuses }
}

fn end_uses(row: &Row<'_>) -> EndUses {
    EndUses {
        refining: eu_bool(row.get("eu_refining")),
        ammonia: eu_bool(row.get("eu_ammonia")),
        methanol: eu_bool(row.get("eu_methanol")),
        iron_steel: eu_bool(row.get("eu_iron_steel")),
        other_ind: eu_bool(row.get("eu_other_ind")),
        mobility: eu_bool(row.get("eu_mobility")),
        power: eu_bool(row.get("eu_power")),
        grid_inj: eu_bool(row.get("eu_grid_inj")),
        chp: eu_bool(row.get("eu_chp")),
        domestic_heat: eu_bool(row.get("eu_domestic_heat")),
        biofuels: eu_bool(row.get("eu_biofuels")),
        synfuels: eu_bool(row.get("eu_synfuels")),
        ch4_grid_inj: eu_bool(row.get("eu_ch4_grid_inj")),
        ch4_mobility: eu_bool(row.get("eu_ch4_mobility")),
    }
}
