//! TypeScript type alias builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for type aliases intersecting a base type with an object type
/// (`type Foo = typeof Root & { ... };`).
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    base: String,
    fields: Vec<(String, String)>,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the object side of the intersection.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "type {} = {} & {{}};",
                self.name, self.base
            ))];
        }

        let body = self
            .fields
            .iter()
            .map(|(name, ty)| CodeFragment::Line(format!("{}: {};", name, ty)))
            .collect();

        vec![CodeFragment::block(
            format!("type {} = {} & {{", self.name, self.base),
            body,
            "};",
        )]
    }
}
