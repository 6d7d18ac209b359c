//! Cohort TUI Library
//!
//! This library provides the application state, the three interactive UI
//! controllers (dropdowns, dialogs, profile card), and the rendering for
//! the Cohort dashboard terminal interface.
//!
//! # Example
//!
//! ```rust
//! use cohort_config::{ColorTheme, UiConfig};
//! use cohort_tui::App;
//!
//! let mut app = App::new(UiConfig::sample(), ColorTheme::Default);
//! let saved = app.dialog.success("Enrollment saved");
//! // `saved` resolves once the user confirms the dialog.
//! assert!(!saved.is_resolved());
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod dialog;
pub mod terminal;
pub mod timer;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::App;
pub use dialog::{Deferred, DialogController, DialogKind, DialogRequest};
pub use timer::DelayTimer;
