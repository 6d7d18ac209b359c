//! Application state and dispatch.
//!
//! This module owns the main `App` struct and its submodules:
//! - `dropdowns`: dropdown state machine (one-open invariant)
//! - `profile_card`: hover-driven profile card controller
//! - `layout`: screen geometry shared by rendering and mouse handling
//! - `input`: keyboard handling
//! - `mouse`: mouse handling and hit-testing
//! - `render`: frame rendering

pub mod dropdowns;
pub mod layout;
pub mod profile_card;

mod input;
mod mouse;
mod render;

pub use layout::{FOOTER_HEIGHT, HEADER_HEIGHT, ScreenLayout};

use std::time::Instant;

use cohort_config::{ColorTheme, Theme, UiConfig};
use ratatui::layout::Rect;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::app::dropdowns::DropdownSet;
use crate::app::profile_card::ProfileCardController;
use crate::dialog::DialogController;

/// Main application state.
pub struct App {
    /// Dropdown selectors on the enrollment form.
    pub dropdowns: DropdownSet,
    /// The screen's single modal dialog.
    pub dialog: DialogController,
    /// Hover profile card over the roster.
    pub card: ProfileCardController,

    /// Currently selected color theme.
    pub color_theme: ColorTheme,
    /// Expanded runtime theme derived from `color_theme`.
    pub theme: Theme,

    /// Index of the keyboard-focused dropdown.
    pub focus: usize,

    /// Last known frame area, kept in sync by render and resize events.
    pub last_area: Rect,

    /// Sender used by dialog callbacks to feed actions back into the
    /// event loop. Absent in unit tests; callbacks then do nothing.
    action_tx: Option<Sender<Action>>,
}

impl App {
    /// Build the application from typed configuration.
    pub fn new(config: UiConfig, color_theme: ColorTheme) -> Self {
        Self {
            dropdowns: DropdownSet::new(config.dropdowns),
            dialog: DialogController::new(),
            card: ProfileCardController::new(config.members),
            color_theme,
            theme: color_theme.into(),
            focus: 0,
            last_area: Rect::default(),
            action_tx: None,
        }
    }

    /// Wire the event-loop sender so dialog callbacks can dispatch
    /// actions (quit confirmation, clearing the form).
    pub fn set_action_sender(&mut self, tx: Sender<Action>) {
        self.action_tx = Some(tx);
    }

    /// Apply a non-input action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                let now = Instant::now();
                self.dialog.tick(now);
                self.card.tick(now);
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::ClearSelections => {
                self.dropdowns.clear_all();
                let _confirmed = self.dialog.success("Selections cleared");
            }
            // Input, Mouse, and Quit are routed by the main loop.
            Action::Input(_) | Action::Mouse(_) | Action::Quit => {}
        }
    }

    /// Switch to the next color theme in the cycle.
    pub fn cycle_theme(&mut self) {
        self.color_theme = self.color_theme.cycle_next();
        self.theme = self.color_theme.into();
    }

    pub(crate) fn action_sender(&self) -> Option<Sender<Action>> {
        self.action_tx.clone()
    }
}
