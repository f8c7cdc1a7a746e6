//! Emission strategy selection.

use crate::scan::Component;

/// How a component directory's aggregation module is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// A root element matches the directory name; the other sub-elements
    /// are attached to it as typed properties.
    RootComposed,
    /// No root element; sub-elements are re-exported through a barrel
    /// index bound to the default export slot.
    Barrel,
}

impl Strategy {
    /// Select the strategy for a component.
    pub fn select(component: &Component) -> Self {
        if component.root_file.is_some() {
            Self::RootComposed
        } else {
            Self::Barrel
        }
    }
}
