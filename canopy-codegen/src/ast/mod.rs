//! TypeScript AST builders for the statement forms the emitters produce.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which is rendered via [`CodeBuilder`](crate::builder::CodeBuilder).
//! Module paths are single-quoted to match the formatting of the Svelte
//! libraries the output lands in.

mod assign;
mod consts;
mod exports;
mod imports;
mod types;

pub use assign::Assign;
pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use types::TypeAlias;
