//! Natural language and structured filtering for analyzed records.
//!
//! This module provides:
//! - The `FilterSpec` criteria record shared by both query origins
//! - Compilation of bounded-grammar sentences into a `FilterSpec`
//! - Predicate evaluation of a `FilterSpec` against stored properties

pub mod compiler;
pub mod matcher;
pub mod types;

pub use compiler::*;
pub use matcher::*;
pub use types::*;
