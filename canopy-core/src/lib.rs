//! Core utilities and types for the Canopy component generator.
//!
//! This crate provides the file-writing layer and string utilities
//! used across the Canopy workspace.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::to_pascal_case;
