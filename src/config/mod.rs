//! Configuration for Assay.

mod settings;

pub use settings::*;
