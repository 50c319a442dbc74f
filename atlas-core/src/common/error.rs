use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Workbook read failed: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Worksheet not found: {0}")]
    SheetMissing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
