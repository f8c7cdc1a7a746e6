//! Component discovery.
//!
//! Walks the component library depth-first. A directory holding an
//! `elements/` subdirectory is a component directory and contributes one
//! [`Component`]; any other directory is a container and is recursed
//! into. The walk never descends into an `elements/` folder itself.
//!
//! Entries are visited in lexicographic order and sub-element lists are
//! sorted, so a scan of an unchanged tree always yields the same
//! descriptors.

use std::path::{Path, PathBuf};

use canopy_core::to_pascal_case;

use crate::error::{ScanError, ScanResult};

/// Name of the sub-items folder that marks a component directory.
pub const ELEMENTS_DIR: &str = "elements";

/// Extension of recognized sub-element source files.
const SVELTE_EXT: &str = ".svelte";

/// One discovered component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// The component directory itself.
    pub dir: PathBuf,
    /// Base names of the sub-element files inside `elements/`, sorted.
    pub sub_elements: Vec<String>,
    /// File name of the sub-element matching the directory name, if any.
    pub root_file: Option<String>,
}

impl Component {
    /// The directory's own base name (e.g., "radio-group").
    pub fn name(&self) -> &str {
        self.dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// The PascalCase identifier derived from the directory name
    /// (e.g., "RadioGroup").
    pub fn type_name(&self) -> String {
        to_pascal_case(self.name())
    }

    /// Sub-element base names excluding the root element.
    pub fn non_root_elements(&self) -> impl Iterator<Item = &str> {
        let name = self.name();
        self.sub_elements
            .iter()
            .map(String::as_str)
            .filter(move |sub| *sub != name)
    }
}

/// Scan a component library root and return all discovered components.
///
/// Fails with [`ScanError::MissingRoot`] if `root` is not a directory;
/// no partial results are produced on failure.
pub fn scan(root: &Path) -> ScanResult<Vec<Component>> {
    if !root.is_dir() {
        return Err(ScanError::missing_root(root));
    }

    let mut components = Vec::new();
    scan_into(root, &mut components)?;
    Ok(components)
}

fn scan_into(dir: &Path, components: &mut Vec<Component>) -> ScanResult<()> {
    for entry in read_dir_sorted(dir)? {
        if !entry.is_dir() {
            continue;
        }

        let elements = entry.join(ELEMENTS_DIR);
        if elements.is_dir() {
            components.push(read_component(entry, &elements)?);
        } else {
            scan_into(&entry, components)?;
        }
    }

    Ok(())
}

fn read_component(dir: PathBuf, elements: &Path) -> ScanResult<Component> {
    let files: Vec<String> = read_dir_sorted(elements)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .filter(|name| name.ends_with(SVELTE_EXT))
                .map(str::to_string)
        })
        .collect();

    let folder_name = dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let root_name = format!("{}{}", folder_name, SVELTE_EXT);
    let root_file = files.iter().find(|file| **file == root_name).cloned();

    let sub_elements = files
        .iter()
        .map(|file| file.strip_suffix(SVELTE_EXT).unwrap_or(file).to_string())
        .collect();

    Ok(Component {
        dir,
        sub_elements,
        root_file,
    })
}

fn read_dir_sorted(dir: &Path) -> ScanResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::read_dir(dir, source))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::read_dir(dir, source))?;
        paths.push(entry.path());
    }
    paths.sort();

    Ok(paths)
}
