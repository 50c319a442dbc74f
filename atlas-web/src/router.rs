use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{hydrogen, steel};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hydrogen))
        .route("/hydrogen", get(hydrogen))
        .route("/steel", get(steel))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
