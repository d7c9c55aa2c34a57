//! Screen identifier enum.

use std::fmt;

/// Identifies each TUI screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    BrandList,
    /// Created on `Action::OpenBrand`, dropped on `GoBack`.
    BrandDetail,
}

impl ScreenId {
    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::BrandList => "Brands",
            Self::BrandDetail => "Brand",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
