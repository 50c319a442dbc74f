pub mod error;

pub use error::{AtlasError, Result};
