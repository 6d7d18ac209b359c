//! Actions routed through the application's event channel.
//!
//! Responsibilities:
//! - Define the `Action` enum that the input task, timers, and dialog
//!   callbacks all feed into the single event loop.
//!
//! Does NOT handle:
//! - Action dispatch (see `App::update` and the main loop).

use crossterm::event::{KeyEvent, MouseEvent};

/// Events and commands processed by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A key press from the terminal.
    Input(KeyEvent),
    /// A mouse event from the terminal.
    Mouse(MouseEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
    /// Periodic UI tick driving timers and transitions.
    Tick,
    /// Exit the application.
    Quit,
    /// Reset every dropdown to its unselected state.
    ClearSelections,
}
