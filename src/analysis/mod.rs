//! String analysis: content fingerprinting and derived properties.
//!
//! Both entry points are pure functions of their argument: no shared state,
//! safe to call concurrently, and the same output for the same input.

pub mod analyzer;
pub mod fingerprint;

pub use analyzer::{analyze, analyze_json, Properties};
