//! Actions produced by key handling. Screen-local state (selection, follow
//! flag) never becomes an action; it stays inside each screen.

use brandly_core::BrandId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,

    // ── Navigation ──────────────────────────────────────────────────
    /// Open the detail screen for this brand.
    OpenBrand(BrandId),
    /// Leave the detail screen.
    GoBack,

    // ── Overlays ────────────────────────────────────────────────────
    ToggleHelp,
}
