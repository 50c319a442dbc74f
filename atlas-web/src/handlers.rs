use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use tracing::info;

use atlas_core::pipeline::{hydrogen_view, steel_view, HYDROGEN_SHEET, STEEL_SHEET};
use atlas_core::sheet::read_sheet_or_empty;

use crate::state::AppState;
use crate::templates::{HydrogenTemplate, SteelTemplate};

#[derive(Debug, Clone, Deserialize)]
pub struct MapQuery {
    /// Preselects the status filter on the hydrogen page.
    pub status: Option<String>,
}

pub async fn hydrogen(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> impl IntoResponse {
    let table = read_sheet_or_empty(&state.data_path, HYDROGEN_SHEET);
    let view = hydrogen_view(table);
    info!(
        projects = view.projects.len(),
        statuses = view.statuses.len(),
        "rendering hydrogen map"
    );

    // Only honor a preselection that actually exists in the data.
    let selected_status = query
        .status
        .filter(|status| view.statuses.contains(status))
        .unwrap_or_default();

    let template = HydrogenTemplate {
        projects: view.projects,
        statuses: view.statuses,
        selected_status,
    };
    Html(template.render().expect("Template rendering failed"))
}

pub async fn steel(State(state): State<AppState>) -> impl IntoResponse {
    let table = read_sheet_or_empty(&state.data_path, STEEL_SHEET);
    let view = steel_view(table);
    info!(projects = view.projects.len(), "rendering steel map");

    let template = SteelTemplate {
        projects: view.projects,
    };
    Html(template.render().expect("Template rendering failed"))
}
