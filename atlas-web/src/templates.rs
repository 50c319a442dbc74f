use askama::Template;

use atlas_core::domain::{HydrogenProject, SteelProject};

#[derive(Template)]
#[template(path = "hydrogen.html")]
pub struct HydrogenTemplate {
    pub projects: Vec<HydrogenProject>,
    pub statuses: Vec<String>,
    /// Empty string when no status is preselected.
    pub selected_status: String,
}

#[derive(Template)]
#[template(path = "steel.html")]
pub struct SteelTemplate {
    pub projects: Vec<SteelProject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::domain::EndUses;

    fn hydrogen_project() -> HydrogenProject {
        HydrogenProject {
            id: "17".to_string(),
            name: "Leuna refinery electrolysis".to_string(),
            status: "Operational".to_string(),
            country: "Germany".to_string(),
            location_name: "Leuna".to_string(),
            lat: 51.32,
            lng: 12.01,
            announced_mw: Some(24.0),
            capacity_mwel: Some(24.0),
            capacity_nm3ph: None,
            capacity_ktpy: None,
            date_online: "2022".to_string(),
            decom_date: "No data".to_string(),
            technology: "PEM".to_string(),
            comments: "No data".to_string(),
            eu: EndUses {
                refining: true,
                ..EndUses::default()
            },
        }
    }

    #[test]
    fn hydrogen_template_renders_markers_and_filter() {
        let html = HydrogenTemplate {
            projects: vec![hydrogen_project()],
            statuses: vec!["Operational".to_string()],
            selected_status: "Operational".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Leuna refinery electrolysis"));
        assert!(html.contains("\"refining\""));
        assert!(html.contains("<option value=\"Operational\" selected>"));
    }

    #[test]
    fn templates_render_empty_views() {
        let hydrogen = HydrogenTemplate {
            projects: Vec::new(),
            statuses: Vec::new(),
            selected_status: String::new(),
        }
        .render()
        .unwrap();
        assert!(hydrogen.contains("id=\"map\""));

        let steel = SteelTemplate { projects: Vec::new() }.render().unwrap();
        assert!(steel.contains("id=\"map\""));
    }

    #[test]
    fn steel_template_renders_markers() {
        let html = SteelTemplate {
            projects: vec![SteelProject {
                name: "HYBRIT".to_string(),
                capacity: "1.35 Mt/y".to_string(),
                order_company: "No data".to_string(),
                production_years: "No data".to_string(),
                technology: "DRI".to_string(),
                capex: "No data".to_string(),
                expected_date_online: "2026".to_string(),
                status: "Pilot".to_string(),
                country: "Sweden".to_string(),
                lat: 67.85,
                lng: 20.22,
                notes: "No data".to_string(),
            }],
        }
        .render()
        .unwrap();

        assert!(html.contains("HYBRIT"));
        assert!(html.contains("67.85"));
    }
}
