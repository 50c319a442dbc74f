pub mod common;
pub mod domain;
pub mod pipeline;
pub mod sheet;

pub use domain::*;
