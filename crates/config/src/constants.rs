//! Centralized constants for the Cohort TUI workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Event Loop Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
///
/// Must be short enough to resolve the hover-hide debounce and the dialog
/// transitions with no visible lag.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

// =============================================================================
// Dialog Timing
// =============================================================================

/// Delay before a showing dialog reaches its settled (fully visible) phase,
/// in milliseconds. Presentation only; the dialog accepts input immediately.
pub const DIALOG_ENTER_MS: u64 = 10;

/// Delay before a hiding dialog is fully gone, in milliseconds. The content
/// keeps rendering during this window but no longer accepts input.
pub const DIALOG_LEAVE_MS: u64 = 150;

/// Default dialog width in terminal columns.
pub const DIALOG_WIDTH: u16 = 52;

// =============================================================================
// Profile Card
// =============================================================================

/// Debounce delay before the profile card hides after the pointer leaves a
/// trigger or the card itself, in milliseconds. Long enough to move the
/// pointer from a trigger onto the card without flicker.
pub const CARD_HIDE_DELAY_MS: u64 = 150;

/// Horizontal gap between a trigger's right edge and the card, in columns.
pub const CARD_GAP_COLS: u16 = 2;

/// Vertical offset applied when aligning the card's bottom edge with the
/// trigger's vertical center, in rows.
pub const CARD_VERTICAL_OFFSET_ROWS: u16 = 1;

/// Profile card width in terminal columns.
pub const CARD_WIDTH: u16 = 38;

// =============================================================================
// Dropdown Defaults
// =============================================================================

/// Maximum number of option rows an open dropdown menu shows at once.
pub const DROPDOWN_MENU_MAX_ROWS: u16 = 6;
