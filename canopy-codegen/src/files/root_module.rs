//! Root-composed aggregation module.

use std::path::{Path, PathBuf};

use canopy_core::{FileRules, GeneratedFile, to_pascal_case};

use super::{AGGREGATION_FILE, GENERATED_HEADER, SUB_COMPONENT_MODULE};
use crate::{
    ast::{Assign, Const, Export, Import, TypeAlias},
    builder::Renderable,
    code_file::CodeFile,
    scan::Component,
};

/// The `elements.ts` module for a component with a root element.
///
/// Imports the root under a fixed alias, attaches every other
/// sub-element as a typed property on it, and default-exports the
/// composite. Statement order matters: the type alias references the
/// imports, and the assignments reference the constant.
pub struct RootModule<'a> {
    component: &'a Component,
    root_file: &'a str,
}

impl<'a> RootModule<'a> {
    pub fn new(component: &'a Component, root_file: &'a str) -> Self {
        Self {
            component,
            root_file,
        }
    }
}

impl GeneratedFile for RootModule<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(AGGREGATION_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules::overwrite()
    }

    fn render(&self) -> String {
        let name = self.component.type_name();
        let type_name = format!("{}Type", name);
        let subs: Vec<String> = self
            .component
            .non_root_elements()
            .map(to_pascal_case)
            .collect();
        let sub_files: Vec<&str> = self.component.non_root_elements().collect();

        let mut file = CodeFile::new()
            .header(GENERATED_HEADER)
            .import(
                Import::new(SUB_COMPONENT_MODULE)
                    .named("SubComponent")
                    .type_only(),
            )
            .import(Import::new(format!("./elements/{}", self.root_file)).default("Root"));

        for (sub, sub_file) in subs.iter().zip(&sub_files) {
            file = file.import(
                Import::new(format!("./elements/{}.svelte", sub_file)).default(sub.clone()),
            );
        }

        let mut alias = TypeAlias::new(&type_name, "typeof Root");
        for sub in &subs {
            alias = alias.field(sub.clone(), format!("SubComponent<typeof {}>", sub));
        }

        let mut binding = Const::new(&name, format!("Root as {}", type_name)).to_fragments();
        for sub in &subs {
            binding.extend(
                Assign::new(
                    format!("{}.{}", name, sub),
                    format!("{} as {}['{}']", sub, type_name, sub),
                )
                .to_fragments(),
            );
        }

        file.add(alias)
            .add_fragments(binding)
            .export(Export::new().default(&name))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use canopy_core::GeneratedFile;

    use super::*;

    fn component(dir: &str, sub_elements: &[&str], root_file: &str) -> Component {
        Component {
            dir: PathBuf::from(dir),
            sub_elements: sub_elements.iter().map(|s| s.to_string()).collect(),
            root_file: Some(root_file.to_string()),
        }
    }

    #[test]
    fn test_path_and_rules() {
        let component = component("button", &["button"], "button.svelte");
        let module = RootModule::new(&component, "button.svelte");

        assert_eq!(
            module.path(Path::new("atoms/button")),
            PathBuf::from("atoms/button/elements.ts")
        );
        assert_eq!(module.rules().overwrite, canopy_core::Overwrite::Always);
    }

    #[test]
    fn test_render_with_sub_elements() {
        let component = component("button", &["button", "group"], "button.svelte");
        let module = RootModule::new(&component, "button.svelte");

        insta::assert_snapshot!(module.render(), @r"
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
        ");
    }

    #[test]
    fn test_render_root_only() {
        let component = component("badge", &["badge"], "badge.svelte");
        let module = RootModule::new(&component, "badge.svelte");

        insta::assert_snapshot!(module.render(), @r"
        // This file is auto-generated. Do not edit manually.
        import type { SubComponent } from '$lib/types/svelte.js';
        import Root from './elements/badge.svelte';

        type BadgeType = typeof Root & {};

        const Badge = Root as BadgeType;

        export default Badge;
        ");
    }

    #[test]
    fn test_render_normalizes_kebab_case_names() {
        let component = component(
            "radio-group",
            &["radio-group", "radio-item"],
            "radio-group.svelte",
        );
        let module = RootModule::new(&component, "radio-group.svelte");
        let rendered = module.render();

        assert!(rendered.contains("type RadioGroupType = typeof Root & {"));
        assert!(rendered.contains("import RadioItem from './elements/radio-item.svelte';"));
        assert!(rendered.contains("RadioGroup.RadioItem = RadioItem as RadioGroupType['RadioItem'];"));
    }
}
