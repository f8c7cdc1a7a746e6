//! Report data structures for commands.
//!
//! Commands build reports from pipeline results, then render them to an
//! Output target. Keeping the pipeline free of printing is what makes it
//! testable without capturing process output.

mod generate;
mod output;

pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Output, Report, TerminalOutput};
