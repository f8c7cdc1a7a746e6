//! Directory-level barrel aggregation module.

use std::path::{Path, PathBuf};

use canopy_core::{FileRules, GeneratedFile};

use super::{AGGREGATION_FILE, GENERATED_HEADER};
use crate::{ast::Export, code_file::CodeFile, scan::ELEMENTS_DIR};

/// The `elements.ts` module for a component without a root element:
/// re-exports the barrel index as a namespace bound to the default
/// export slot. The `.js` extension in the re-export path is what
/// downstream TypeScript resolution expects for the emitted library.
pub struct BarrelModule;

impl GeneratedFile for BarrelModule {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(AGGREGATION_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::overwrite()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .export(
                Export::new()
                    .from(format!("./{}/__index__.js", ELEMENTS_DIR))
                    .star_as("default"),
            )
            .render()
    }
}
