//! TypeScript property assignment builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for assignment statements (`target = value;`).
#[derive(Debug, Clone)]
pub struct Assign {
    target: String,
    value: String,
}

impl Assign {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Build the assignment as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Assign {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "{} = {};",
            self.target, self.value
        ))]
    }
}
