//! End-to-end tests for the scan-then-emit pipeline.
//!
//! Each test builds a component tree in a temp directory, runs the
//! pipeline, and checks the files it leaves behind.

use std::{collections::BTreeMap, fs, path::Path};

use canopy_codegen::{Generator, scan};
use tempfile::TempDir;

const BUTTON_MODULE: &str = "\
// This file is auto-generated. Do not edit manually.
import type { SubComponent } from '$lib/types/svelte.js';
import Root from './elements/button.svelte';
import Group from './elements/group.svelte';

type ButtonType = typeof Root & {
  Group: SubComponent<typeof Group>;
};

const Button = Root as ButtonType;
Button.Group = Group as ButtonType['Group'];

export default Button;
";

const CARD_INDEX: &str = "\
// This file is auto-generated. Do not edit manually.
export { default as Footer } from './footer.svelte';
export { default as Header } from './header.svelte';
";

const BARREL_MODULE: &str = "\
// This file is auto-generated. Do not edit manually.
export * as default from './elements/__index__.js';
";

fn mkdirs(base: &Path, dirs: &[&str]) {
    for dir in dirs {
        fs::create_dir_all(base.join(dir)).unwrap();
    }
}

fn touch(base: &Path, files: &[&str]) {
    for file in files {
        fs::write(base.join(file), "<script></script>\n").unwrap();
    }
}

fn generate(root: &Path) -> canopy_codegen::GenerateResult {
    let components = scan(root).unwrap();
    Generator::new(&components).generate().unwrap()
}

/// Collect every generated .ts file under `root`, keyed by relative path.
fn generated_files(root: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    collect_ts(root, root, &mut files);
    files
}

fn collect_ts(dir: &Path, root: &Path, files: &mut BTreeMap<String, String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_ts(&path, root, files);
        } else if path.extension().is_some_and(|ext| ext == "ts") {
            let relative = path.strip_prefix(root).unwrap().display().to_string();
            files.insert(relative, fs::read_to_string(&path).unwrap());
        }
    }
}

#[test]
fn test_root_composed_component() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["atoms/button/elements"]);
    touch(
        temp.path(),
        &[
            "atoms/button/elements/button.svelte",
            "atoms/button/elements/group.svelte",
        ],
    );

    generate(temp.path());

    let module = fs::read_to_string(temp.path().join("atoms/button/elements.ts")).unwrap();
    assert_eq!(module, BUTTON_MODULE);
    // No barrel index for root-composed components.
    assert!(!temp.path().join("atoms/button/elements/__index__.ts").exists());
}

#[test]
fn test_barrel_component() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["molecules/card/elements"]);
    touch(
        temp.path(),
        &[
            "molecules/card/elements/header.svelte",
            "molecules/card/elements/footer.svelte",
        ],
    );

    generate(temp.path());

    let index =
        fs::read_to_string(temp.path().join("molecules/card/elements/__index__.ts")).unwrap();
    assert_eq!(index, CARD_INDEX);

    let module = fs::read_to_string(temp.path().join("molecules/card/elements.ts")).unwrap();
    assert_eq!(module, BARREL_MODULE);
}

#[test]
fn test_containers_contribute_no_files() {
    let temp = TempDir::new().unwrap();
    mkdirs(
        temp.path(),
        &["atoms/badge/elements", "atoms/button/elements"],
    );
    touch(
        temp.path(),
        &[
            "atoms/badge/elements/badge.svelte",
            "atoms/button/elements/button.svelte",
        ],
    );

    let result = generate(temp.path());

    assert_eq!(result.written.len(), 2);
    assert!(temp.path().join("atoms/badge/elements.ts").exists());
    assert!(temp.path().join("atoms/button/elements.ts").exists());
    // The container itself gets no aggregation file.
    assert!(!temp.path().join("atoms/elements.ts").exists());
    assert!(!temp.path().join("elements.ts").exists());
}

#[test]
fn test_empty_elements_folder_generates_valid_barrel() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["divider/elements"]);

    generate(temp.path());

    let index = fs::read_to_string(temp.path().join("divider/elements/__index__.ts")).unwrap();
    assert_eq!(index, "// This file is auto-generated. Do not edit manually.\n");

    let module = fs::read_to_string(temp.path().join("divider/elements.ts")).unwrap();
    assert_eq!(module, BARREL_MODULE);
}

#[test]
fn test_empty_tree_is_success() {
    let temp = TempDir::new().unwrap();

    let result = generate(temp.path());

    assert!(result.written.is_empty());
    assert!(result.created_markers.is_empty());
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    mkdirs(
        temp.path(),
        &["atoms/button/elements", "molecules/card/elements"],
    );
    touch(
        temp.path(),
        &[
            "atoms/button/elements/button.svelte",
            "atoms/button/elements/group.svelte",
            "molecules/card/elements/header.svelte",
        ],
    );

    let first_result = generate(temp.path());
    let first = generated_files(temp.path());

    let second_result = generate(temp.path());
    let second = generated_files(temp.path());

    assert_eq!(first, second);
    // Markers are created on the first run only.
    assert_eq!(first_result.created_markers.len(), 2);
    assert!(second_result.created_markers.is_empty());
}

#[test]
fn test_marker_reported_then_overwritten_by_emission() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["badge/elements"]);
    touch(temp.path(), &["badge/elements/badge.svelte"]);

    let result = generate(temp.path());

    assert_eq!(
        result.created_markers,
        vec![temp.path().join("badge/elements.ts")]
    );
    // Final content is the generated module, not the placeholder.
    let module = fs::read_to_string(temp.path().join("badge/elements.ts")).unwrap();
    assert!(module.starts_with("// This file is auto-generated."));
    assert!(module.contains("export default Badge;"));
}

#[test]
fn test_stale_aggregation_file_is_regenerated() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["card/elements"]);
    touch(temp.path(), &["card/elements/header.svelte"]);
    fs::write(temp.path().join("card/elements.ts"), "// hand edit\n").unwrap();

    generate(temp.path());

    let module = fs::read_to_string(temp.path().join("card/elements.ts")).unwrap();
    assert_eq!(module, BARREL_MODULE);
}

#[test]
fn test_preview_matches_generated_output() {
    let temp = TempDir::new().unwrap();
    mkdirs(
        temp.path(),
        &["atoms/button/elements", "molecules/card/elements"],
    );
    touch(
        temp.path(),
        &[
            "atoms/button/elements/button.svelte",
            "molecules/card/elements/header.svelte",
        ],
    );

    let components = scan(temp.path()).unwrap();
    let generator = Generator::new(&components);

    let preview = generator.preview(temp.path());
    generator.generate().unwrap();

    assert_eq!(preview.len(), 3);
    for file in preview {
        let on_disk = fs::read_to_string(temp.path().join(&file.path)).unwrap();
        assert_eq!(on_disk, file.content, "mismatch for {}", file.path);
    }
}
