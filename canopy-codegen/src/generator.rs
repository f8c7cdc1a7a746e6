//! Generation pipeline driver.

use std::path::{Path, PathBuf};

use canopy_core::{GeneratedFile, WriteResult};
use eyre::Result;

use crate::{
    files::{BarrelIndex, BarrelModule, ElementsMarker, RootModule},
    scan::Component,
    strategy::Strategy,
};

/// Drives emission for a scanned set of components.
///
/// For each component in scan order: the placeholder marker is ensured
/// first, then the strategy-specific files are written (index before
/// wrapper for barrels, so static resolution never sees a dangling
/// re-export). The first write failure aborts the run; files written for
/// earlier components stay on disk and a re-run is safe.
pub struct Generator<'a> {
    components: &'a [Component],
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Aggregation files written this run
    pub written: Vec<PathBuf>,
    /// Placeholder files created because they were missing
    pub created_markers: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the scanned root
    pub path: String,
    /// File content
    pub content: String,
}

impl<'a> Generator<'a> {
    pub fn new(components: &'a [Component]) -> Self {
        Self { components }
    }

    /// Write all files to disk.
    pub fn generate(&self) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for component in self.components {
            self.generate_component(component, &mut result)?;
        }

        Ok(result)
    }

    /// Render all final files without touching disk.
    ///
    /// Markers are not previewed: they are never the final content of a
    /// component directory.
    pub fn preview(&self, root: &Path) -> Vec<PreviewFile> {
        let mut files = Vec::new();

        for component in self.components {
            match Strategy::select(component) {
                Strategy::RootComposed => {
                    if let Some(root_file) = &component.root_file {
                        let module = RootModule::new(component, root_file);
                        files.push(preview_file(&module, component, root));
                    }
                }
                Strategy::Barrel => {
                    let index = BarrelIndex::new(component);
                    files.push(preview_file(&index, component, root));
                    files.push(preview_file(&BarrelModule, component, root));
                }
            }
        }

        files
    }

    fn generate_component(
        &self,
        component: &Component,
        result: &mut GenerateResult,
    ) -> Result<()> {
        if ElementsMarker.write(&component.dir)? == WriteResult::Written {
            result
                .created_markers
                .push(ElementsMarker.path(&component.dir));
        }

        match Strategy::select(component) {
            Strategy::RootComposed => {
                if let Some(root_file) = &component.root_file {
                    let module = RootModule::new(component, root_file);
                    module.write(&component.dir)?;
                    result.written.push(module.path(&component.dir));
                }
            }
            Strategy::Barrel => {
                let index = BarrelIndex::new(component);
                index.write(&component.dir)?;
                result.written.push(index.path(&component.dir));

                BarrelModule.write(&component.dir)?;
                result.written.push(BarrelModule.path(&component.dir));
            }
        }

        Ok(())
    }
}

fn preview_file(file: &impl GeneratedFile, component: &Component, root: &Path) -> PreviewFile {
    let path = file.path(&component.dir);
    let path = path.strip_prefix(root).unwrap_or(&path);

    PreviewFile {
        path: path.display().to_string(),
        content: file.render(),
    }
}
