//! UI actions — the sole mechanism for app-level state transitions.
//!
//! Screens read list snapshots straight off their controllers at render
//! time, so actions stay small: lifecycle, navigation, and the overlay
//! toggles the app loop owns.

use crate::screen::ScreenId;

/// Every app-level state transition is expressed as an Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Overlays ──────────────────────────────────────────────────
    ToggleHelp,
    OpenSearch,
    CloseSearch,
}
