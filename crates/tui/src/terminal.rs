//! Terminal restore-on-exit guard.
//!
//! Raw mode and the alternate screen must be undone on every exit path,
//! including panics, or the user's shell is left unusable. The guard
//! restores the terminal in `Drop`; the explicit cleanup in `main()` runs
//! first on normal exits and this is the safety net for the rest.

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// Create the guard after terminal setup is complete.
    pub fn new(mouse_captured: bool) -> Self {
        Self { mouse_captured }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic, and there is nothing
        // sensible to do if the terminal refuses the restore sequence.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, Show);
        }
    }
}
