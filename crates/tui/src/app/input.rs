//! Keyboard input handling.
//!
//! Responsibilities:
//! - Route keys to the dialog when one is accepting input.
//! - Drive dropdown focus, opening, and selection from the keyboard.
//! - Open the quit/clear confirmation dialogs and the submit feedback.
//!
//! Does NOT handle:
//! - Mouse input (see `app::mouse`).
//! - Rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::dialog::{DialogKind, DialogRequest};

impl App {
    /// Handle a key press. Returns an action for the main loop when the
    /// key maps to one.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.dialog.accepts_input() {
            self.handle_dialog_key(key);
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.dropdowns.close_all();
                None
            }
            KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::BackTab => {
                self.focus_previous();
                None
            }
            KeyCode::Down => {
                match self.dropdowns.open_index() {
                    Some(open) => {
                        if let Some(dropdown) = self.dropdowns.get_mut(open) {
                            dropdown.cursor_down();
                        }
                    }
                    None => self.focus_next(),
                }
                None
            }
            KeyCode::Up => {
                match self.dropdowns.open_index() {
                    Some(open) => {
                        if let Some(dropdown) = self.dropdowns.get_mut(open) {
                            dropdown.cursor_up();
                        }
                    }
                    None => self.focus_previous(),
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.dropdowns.open_index() {
                    Some(open) => {
                        let cursor = self
                            .dropdowns
                            .get(open)
                            .map(|d| d.cursor())
                            .unwrap_or_default();
                        self.dropdowns.select(open, cursor);
                    }
                    None => self.dropdowns.toggle(self.focus),
                }
                None
            }
            KeyCode::Char('s') => {
                self.submit();
                None
            }
            KeyCode::Char('c') => {
                self.request_clear();
                None
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
                None
            }
            KeyCode::Char('q') => self.request_quit(),
            _ => None,
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let is_confirm_kind = self
            .dialog
            .active()
            .is_some_and(|a| a.kind.has_cancel());
        match key.code {
            KeyCode::Esc => self.dialog.dismiss(),
            KeyCode::Enter | KeyCode::Char('y') => self.dialog.confirm_pressed(),
            KeyCode::Char('n') if is_confirm_kind => self.dialog.cancel_pressed(),
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        if self.dropdowns.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.dropdowns.len();
        self.dropdowns.close_all();
    }

    fn focus_previous(&mut self) {
        if self.dropdowns.is_empty() {
            return;
        }
        self.focus = self
            .focus
            .checked_sub(1)
            .unwrap_or(self.dropdowns.len() - 1);
        self.dropdowns.close_all();
    }

    /// Submit the enrollment form: success when every dropdown has a
    /// committed value, a warning otherwise.
    fn submit(&mut self) {
        if self.dropdowns.iter().all(|d| d.has_selection()) {
            let _saved = self.dialog.success("Enrollment saved");
        } else {
            let _seen = self.dialog.warning("Complete all fields before submitting");
        }
    }

    /// Confirm clearing every dropdown selection.
    fn request_clear(&mut self) {
        let request = DialogRequest::new(DialogKind::Confirm)
            .title("Clear form")
            .message("Clear all selections?")
            .confirm_text("Clear");
        let request = match self.action_sender() {
            Some(tx) => request.on_confirm(move || {
                let _ = tx.try_send(Action::ClearSelections);
            }),
            None => request,
        };
        self.dialog.show(request);
    }

    /// Confirm quitting. Without an event-loop sender (tests) quit is
    /// immediate.
    fn request_quit(&mut self) -> Option<Action> {
        match self.action_sender() {
            Some(tx) => {
                self.dialog.show(
                    DialogRequest::new(DialogKind::Confirm)
                        .title("Quit")
                        .message("Quit Cohort?")
                        .confirm_text("Quit")
                        .on_confirm(move || {
                            let _ = tx.try_send(Action::Quit);
                        }),
                );
                None
            }
            None => Some(Action::Quit),
        }
    }
}
