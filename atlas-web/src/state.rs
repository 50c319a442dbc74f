use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    /// Workbook the two map pages are built from, re-read on every request.
    pub data_path: PathBuf,
}
