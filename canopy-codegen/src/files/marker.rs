//! Placeholder aggregation module.

use std::path::{Path, PathBuf};

use canopy_core::{FileRules, GeneratedFile};

use super::AGGREGATION_FILE;

/// The empty-module placeholder written before real generation runs, so
/// an import of the aggregation path always resolves. Created only when
/// missing; existing content is left alone.
pub struct ElementsMarker;

impl GeneratedFile for ElementsMarker {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(AGGREGATION_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        "export {};\n".to_string()
    }
}
