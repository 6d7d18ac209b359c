//! Modal dialog subsystem.
//!
//! A single `DialogController` owns the one dialog the screen can show.
//! Callers either drive it with a full `DialogRequest` (optional confirm
//! and cancel callbacks) or use the convenience wrappers (`alert`,
//! `success`, `error`, `warning`, `confirm`) which return a
//! single-resolution `Deferred` that resolves when the user acts.
//!
//! Invariants:
//! - At most one dialog is visible; showing a new one overwrites the
//!   prior content and callbacks entirely.
//! - Initialization is lazy and idempotent: `show` before `init` simply
//!   initializes first.
//! - Dismissal (Esc or backdrop click) hides without running either
//!   callback. For a `confirm` wrapper this means the returned deferred
//!   never resolves; callers must only act on a resolved value.

mod deferred;
mod layout;

pub use deferred::{Deferred, DeferredHandle};
pub use layout::DialogLayout;

use std::time::{Duration, Instant};

use cohort_config::Theme;
use cohort_config::constants::{DIALOG_ENTER_MS, DIALOG_LEAVE_MS};
use ratatui::style::Color;

/// Boxed one-shot callback run on the UI thread when a button is pressed.
pub type DialogCallback = Box<dyn FnOnce() + Send>;

/// The kind of dialog, selecting its visual preset and button set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Alert,
    Success,
    Error,
    Warning,
    Confirm,
}

impl DialogKind {
    /// Parse a kind name. Unknown names silently degrade to `Alert`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "confirm" => Self::Confirm,
            _ => Self::Alert,
        }
    }

    /// Icon glyph shown next to the title.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Alert => "ℹ",
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Warning => "⚠",
            Self::Confirm => "?",
        }
    }

    /// Accent color for the border, icon, and confirm button.
    pub fn accent(self, theme: &Theme) -> Color {
        match self {
            Self::Alert => theme.text_dim,
            Self::Success => theme.success,
            Self::Error => theme.error,
            Self::Warning => theme.warning,
            Self::Confirm => theme.info,
        }
    }

    /// Default title used by the convenience wrapper for this kind.
    pub fn wrapper_title(self) -> &'static str {
        match self {
            Self::Alert => "Notice",
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Confirm => "Confirm",
        }
    }

    /// Whether this kind renders a cancel button in addition to confirm.
    pub fn has_cancel(self) -> bool {
        matches!(self, Self::Confirm)
    }
}

/// A dialog request with builder-style optional fields.
///
/// Unset fields fall back to their defaults when shown: title
/// "Notification", empty message, "OK"/"Cancel" button labels, no
/// callbacks. There is no validation error path.
pub struct DialogRequest {
    kind: DialogKind,
    title: Option<String>,
    message: Option<String>,
    confirm_text: Option<String>,
    cancel_text: Option<String>,
    on_confirm: Option<DialogCallback>,
    on_cancel: Option<DialogCallback>,
}

impl DialogRequest {
    /// Create a request for the given kind.
    pub fn new(kind: DialogKind) -> Self {
        Self {
            kind,
            title: None,
            message: None,
            confirm_text: None,
            cancel_text: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the dialog message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the confirm button label.
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    /// Set the cancel button label (only rendered for `Confirm` dialogs).
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Run `f` when the confirm button is pressed.
    pub fn on_confirm(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    /// Run `f` when the cancel button is pressed.
    pub fn on_cancel(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    fn into_active(self) -> ActiveDialog {
        ActiveDialog {
            kind: self.kind,
            title: self.title.unwrap_or_else(|| "Notification".to_string()),
            message: self.message.unwrap_or_default(),
            confirm_text: self.confirm_text.unwrap_or_else(|| "OK".to_string()),
            cancel_text: self.cancel_text.unwrap_or_else(|| "Cancel".to_string()),
            on_confirm: self.on_confirm,
            on_cancel: self.on_cancel,
        }
    }
}

/// The dialog currently owned by the controller.
pub struct ActiveDialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    on_confirm: Option<DialogCallback>,
    on_cancel: Option<DialogCallback>,
}

/// Presentation phase of the dialog.
///
/// `Entering` and `Leaving` exist for animation pacing only: the dialog
/// accepts input from the moment it is shown, and ignores input from the
/// moment hiding starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogPhase {
    Hidden,
    Entering { since: Instant },
    Visible,
    Leaving { since: Instant },
}

/// Controller owning the screen's single modal dialog.
pub struct DialogController {
    initialized: bool,
    phase: DialogPhase,
    active: Option<ActiveDialog>,
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogController {
    /// Create an uninitialized controller. Initialization happens lazily
    /// on the first `show`.
    pub fn new() -> Self {
        Self {
            initialized: false,
            phase: DialogPhase::Hidden,
            active: None,
        }
    }

    /// Idempotent initialization. Only the first call has any effect.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        tracing::debug!("dialog controller initialized");
    }

    /// Whether `init` has run (directly or via a lazy `show`).
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Show a dialog, replacing any currently shown content and callbacks.
    pub fn show(&mut self, request: DialogRequest) {
        self.init();
        self.active = Some(request.into_active());
        self.phase = DialogPhase::Entering {
            since: Instant::now(),
        };
    }

    /// Start hiding the dialog, dropping any pending callbacks. The
    /// content keeps rendering through the short leave transition.
    pub fn hide(&mut self) {
        if matches!(self.phase, DialogPhase::Hidden | DialogPhase::Leaving { .. }) {
            return;
        }
        if let Some(active) = self.active.as_mut() {
            active.on_confirm = None;
            active.on_cancel = None;
        }
        self.phase = DialogPhase::Leaving {
            since: Instant::now(),
        };
    }

    /// Dismiss without running either callback (Esc / backdrop click).
    pub fn dismiss(&mut self) {
        self.hide();
    }

    /// Confirm button pressed: run the confirm callback, then hide.
    pub fn confirm_pressed(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let callback = self.active.as_mut().and_then(|a| a.on_confirm.take());
        if let Some(callback) = callback {
            callback();
        }
        self.hide();
    }

    /// Cancel button pressed: run the cancel callback, then hide.
    pub fn cancel_pressed(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let callback = self.active.as_mut().and_then(|a| a.on_cancel.take());
        if let Some(callback) = callback {
            callback();
        }
        self.hide();
    }

    /// Advance the enter/leave transitions. Called from the UI tick.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            DialogPhase::Entering { since }
                if now.duration_since(since) >= Duration::from_millis(DIALOG_ENTER_MS) =>
            {
                self.phase = DialogPhase::Visible;
            }
            DialogPhase::Leaving { since }
                if now.duration_since(since) >= Duration::from_millis(DIALOG_LEAVE_MS) =>
            {
                self.phase = DialogPhase::Hidden;
                self.active = None;
            }
            _ => {}
        }
    }

    /// Whether the dialog currently consumes keyboard and mouse input.
    pub fn accepts_input(&self) -> bool {
        matches!(
            self.phase,
            DialogPhase::Entering { .. } | DialogPhase::Visible
        )
    }

    /// Whether any dialog content should render (includes the leave
    /// transition window).
    pub fn is_shown(&self) -> bool {
        self.active.is_some() && !matches!(self.phase, DialogPhase::Hidden)
    }

    /// Whether the dialog has settled into its fully visible phase.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, DialogPhase::Visible)
    }

    /// The currently shown dialog content, if any.
    pub fn active(&self) -> Option<&ActiveDialog> {
        self.active.as_ref()
    }

    /// Show an informational dialog. Resolves when confirmed.
    pub fn alert(&mut self, message: impl Into<String>) -> Deferred<()> {
        self.notice(DialogKind::Alert, message)
    }

    /// Show a success dialog. Resolves when confirmed.
    pub fn success(&mut self, message: impl Into<String>) -> Deferred<()> {
        self.notice(DialogKind::Success, message)
    }

    /// Show an error dialog. Resolves when confirmed.
    pub fn error(&mut self, message: impl Into<String>) -> Deferred<()> {
        self.notice(DialogKind::Error, message)
    }

    /// Show a warning dialog. Resolves when confirmed.
    pub fn warning(&mut self, message: impl Into<String>) -> Deferred<()> {
        self.notice(DialogKind::Warning, message)
    }

    /// Show a confirm dialog. Resolves `true` on confirm and `false` on
    /// cancel. Backdrop or Esc dismissal resolves neither.
    pub fn confirm(&mut self, message: impl Into<String>) -> Deferred<bool> {
        let (deferred, handle) = Deferred::new();
        let cancel_handle = handle.clone();
        self.show(
            DialogRequest::new(DialogKind::Confirm)
                .title(DialogKind::Confirm.wrapper_title())
                .message(message)
                .confirm_text("Confirm")
                .on_confirm(move || handle.resolve(true))
                .on_cancel(move || cancel_handle.resolve(false)),
        );
        deferred
    }

    fn notice(&mut self, kind: DialogKind, message: impl Into<String>) -> Deferred<()> {
        let (deferred, handle) = Deferred::new();
        self.show(
            DialogRequest::new(kind)
                .title(kind.wrapper_title())
                .message(message)
                .on_confirm(move || handle.resolve(())),
        );
        deferred
    }
}
