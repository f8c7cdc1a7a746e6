//! TypeScript const declaration builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Build the const declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        vec![CodeFragment::Line(format!(
            "const {}{} = {};",
            self.name, type_annotation, self.value
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_const() {
        let c = Const::new("foo", "42").build();
        assert_eq!(c, "const foo = 42;\n");
    }

    #[test]
    fn test_const_with_cast_value() {
        let c = Const::new("Button", "Root as ButtonType").build();
        assert_eq!(c, "const Button = Root as ButtonType;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = Const::new("name", "'card'").ty("string").build();
        assert_eq!(c, "const name: string = 'card';\n");
    }
}
