//! Barrel index inside the `elements/` folder.

use std::path::{Path, PathBuf};

use canopy_core::{FileRules, GeneratedFile, to_pascal_case};

use super::{GENERATED_HEADER, INDEX_FILE};
use crate::{ast::Export, code_file::CodeFile, scan::Component};

/// The `elements/__index__.ts` file re-exporting each sub-element under
/// its normalized name. Written for components without a root element.
pub struct BarrelIndex<'a> {
    component: &'a Component,
}

impl<'a> BarrelIndex<'a> {
    pub fn new(component: &'a Component) -> Self {
        Self { component }
    }
}

impl GeneratedFile for BarrelIndex<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(crate::scan::ELEMENTS_DIR).join(INDEX_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::overwrite()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .exports(self.component.sub_elements.iter().map(|sub| {
                Export::new()
                    .from(format!("./{}.svelte", sub))
                    .default_as(to_pascal_case(sub))
            }))
            .render()
    }
}
