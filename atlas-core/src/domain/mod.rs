use serde::Serialize;

/// Placeholder every descriptive field falls back to, so templates never
/// have to handle null or empty text.
pub const NO_DATA: &str = "No data";

/// One hydrogen production facility, displayable as a map marker.
#[derive(Debug, Clone, Serialize)]
pub struct HydrogenProject {
    pub id: String,
    pub name: String,
    pub status: String,
    pub country: String,
    pub location_name: String,
    pub lat: f64,
    pub lng: f64,
    /// Parsed out of the free-text "Announced Size" column.
    pub announced_mw: Option<f64>,
    pub capacity_mwel: Option<f64>,
    pub capacity_nm3ph: Option<f64>,
    pub capacity_ktpy: Option<f64>,
    pub date_online: String,
    pub decom_date: String,
    pub technology: String,
    pub comments: String,
    pub eu: EndUses,
}

/// End-use flags for a hydrogen facility. One field per category keeps
/// every marker carrying all 14 flags even when the sheet omits columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EndUses {
    pub refining: bool,
    pub ammonia: bool,
    pub methanol: bool,
    pub iron_steel: bool,
    pub other_ind: bool,
    pub mobility: bool,
    pub power: bool,
    pub grid_inj: bool,
    pub chp: bool,
    pub domestic_heat: bool,
    pub biofuels: bool,
    pub synfuels: bool,
    pub ch4_grid_inj: bool,
    pub ch4_mobility: bool,
}

impl EndUses {
    pub const COUNT: usize = 14;

    /// Category name / flag pairs in sheet order, for filter controls.
    pub fn flags(&self) -> [(&'static str, bool); Self::COUNT] {
        [
            ("refining", self.refining),
            ("ammonia", self.ammonia),
            ("methanol", self.methanol),
            ("iron_steel", self.iron_steel),
            ("other_ind", self.other_ind),
            ("mobility", self.mobility),
            ("power", self.power),
            ("grid_inj", self.grid_inj),
            ("chp", self.chp),
            ("domestic_heat", self.domestic_heat),
            ("biofuels", self.biofuels),
            ("synfuels", self.synfuels),
            ("ch4_grid_inj", self.ch4_grid_inj),
            ("ch4_mobility", self.ch4_mobility),
        ]
    }

    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, set)| *set)
    }
}

/// One steel production facility, displayable as a map marker.
#[derive(Debug, Clone, Serialize)]
pub struct SteelProject {
    pub name: String,
    pub capacity: String,
    pub order_company: String,
    pub production_years: String,
    pub technology: String,
    pub capex: String,
    pub expected_date_online: String,
    pub status: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub notes: String,
}

/// Everything the hydrogen map page needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HydrogenView {
    pub projects: Vec<HydrogenProject>,
    /// Distinct status labels in first-occurrence order, for the filter.
    pub statuses: Vec<String>,
}

/// Everything the steel map page needs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SteelView {
    pub projects: Vec<SteelProject>,
}
