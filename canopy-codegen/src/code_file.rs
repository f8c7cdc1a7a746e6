//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with an
//! optional header comment and organized imports, body, and exports
//! sections. Section order is what makes the generated modules valid:
//! the type alias references the imports, and the assignments reference
//! the constant bound before them.

use crate::{
    ast::{Export, Import},
    builder::{CodeBuilder, CodeFragment, Indent, Renderable},
};

/// A structured representation of a TypeScript file.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .import(Import::new("./elements/button.svelte").default("Root"))
///     .add(type_alias)
///     .export(Export::new().default("Button"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment rendered as the first line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add a group of fragments as one body element (no blank lines inside).
    pub fn add_fragments(mut self, fragments: Vec<CodeFragment>) -> Self {
        self.body.push(fragments);
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Add exports from an iterator.
    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::TYPESCRIPT);

        // 1. Header comment, flush with the first statement
        if let Some(header) = &self.header {
            builder.push_line(header);
        }

        // 2. Imports
        for import in &self.imports {
            builder.emit(import);
        }

        // 3. Blank line between imports and the rest
        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        // 4. Body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        // 5. Blank line before exports
        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        // 6. Exports
        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }
}
