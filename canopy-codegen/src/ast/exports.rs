//! TypeScript export builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    from: Option<String>,
    default: Option<String>,
    default_as: Option<String>,
    star_as: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export from another module.
    pub fn from(mut self, module: impl Into<String>) -> Self {
        self.from = Some(module.into());
        self
    }

    /// Export a local binding as default (`export default Foo;`).
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Re-export another module's default under a name
    /// (`export { default as Foo } from '...';`).
    pub fn default_as(mut self, name: impl Into<String>) -> Self {
        self.default_as = Some(name.into());
        self
    }

    /// Re-export a whole module as a named namespace
    /// (`export * as foo from '...';`).
    pub fn star_as(mut self, name: impl Into<String>) -> Self {
        self.star_as = Some(name.into());
        self
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn to_line(&self) -> String {
        match (&self.from, &self.default, &self.default_as, &self.star_as) {
            // Export default: export default Foo;
            (None, Some(def), None, None) => {
                format!("export default {};", def)
            }
            // Re-export a default under a name: export { default as Foo } from '...';
            (Some(from), None, Some(name), None) => {
                format!("export {{ default as {} }} from '{}';", name, from)
            }
            // Namespace re-export: export * as foo from '...';
            (Some(from), None, None, Some(ns)) => {
                format!("export * as {} from '{}';", ns, from)
            }
            // Invalid combinations - return empty
            _ => String::new(),
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = self.to_line();
        if line.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::Line(line)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_default() {
        let e = Export::new().default("Button").build();
        assert_eq!(e, "export default Button;\n");
    }

    #[test]
    fn test_re_export_default_as_named() {
        let e = Export::new()
            .from("./header.svelte")
            .default_as("Header")
            .build();
        assert_eq!(e, "export { default as Header } from './header.svelte';\n");
    }

    #[test]
    fn test_namespace_re_export_as_default() {
        let e = Export::new()
            .from("./elements/__index__.js")
            .star_as("default")
            .build();
        assert_eq!(e, "export * as default from './elements/__index__.js';\n");
    }

    #[test]
    fn test_invalid_combination_renders_nothing() {
        let e = Export::new().default("Foo").star_as("bar").build();
        assert_eq!(e, "");
    }
}
