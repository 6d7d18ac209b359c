//! Dialog geometry shared between rendering and mouse handling.
//!
//! Both the renderer and the mouse handler need the same answer to "where
//! is the confirm button", so the layout is computed in one place from the
//! frame area and the active dialog's content.

use cohort_config::constants::DIALOG_WIDTH;
use ratatui::layout::Rect;

use crate::dialog::ActiveDialog;
use crate::ui::text::wrap_text;

/// Computed dialog geometry for one frame size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// The dialog box itself (including borders).
    pub dialog: Rect,
    /// The confirm button row segment.
    pub confirm_button: Rect,
    /// The cancel button row segment; present only for confirm dialogs.
    pub cancel_button: Option<Rect>,
}

impl DialogLayout {
    /// Compute the dialog geometry for the given frame.
    pub fn compute(frame: Rect, active: &ActiveDialog) -> Self {
        let width = DIALOG_WIDTH.min(frame.width);
        let inner_width = width.saturating_sub(4).max(1);

        let message_rows = wrap_text(&active.message, inner_width as usize).len() as u16;
        // borders + header row + spacer + message + spacer + button row
        let height = (message_rows + 6).min(frame.height);

        let x = frame.x + frame.width.saturating_sub(width) / 2;
        let y = frame.y + frame.height.saturating_sub(height) / 2;
        let dialog = Rect::new(x, y, width, height);

        let button_row = dialog.y + dialog.height.saturating_sub(2);

        let confirm_width = button_width(&active.confirm_text);
        let confirm_x = dialog
            .right()
            .saturating_sub(2)
            .saturating_sub(confirm_width);
        let confirm_button = Rect::new(confirm_x, button_row, confirm_width, 1);

        let cancel_button = active.kind.has_cancel().then(|| {
            let cancel_width = button_width(&active.cancel_text);
            let cancel_x = confirm_x.saturating_sub(1).saturating_sub(cancel_width);
            Rect::new(cancel_x, button_row, cancel_width, 1)
        });

        Self {
            dialog,
            confirm_button,
            cancel_button,
        }
    }
}

fn button_width(label: &str) -> u16 {
    // "[ label ]"
    (label.chars().count() as u16).saturating_add(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{DialogKind, DialogRequest};

    fn active(kind: DialogKind, message: &str) -> ActiveDialog {
        DialogRequest::new(kind).message(message).into_active()
    }

    #[test]
    fn test_dialog_is_centered() {
        let frame = Rect::new(0, 0, 100, 40);
        let layout = DialogLayout::compute(frame, &active(DialogKind::Alert, "hello"));

        let left_margin = layout.dialog.x - frame.x;
        let right_margin = frame.right() - layout.dialog.right();
        assert!(left_margin.abs_diff(right_margin) <= 1);
    }

    #[test]
    fn test_confirm_dialog_places_cancel_left_of_confirm() {
        let frame = Rect::new(0, 0, 100, 40);
        let layout = DialogLayout::compute(frame, &active(DialogKind::Confirm, "Delete?"));

        let cancel = layout.cancel_button.expect("confirm dialog has cancel");
        assert!(cancel.right() < layout.confirm_button.x);
        assert_eq!(cancel.y, layout.confirm_button.y);
    }

    #[test]
    fn test_non_confirm_dialog_has_single_button() {
        let frame = Rect::new(0, 0, 100, 40);
        for kind in [
            DialogKind::Alert,
            DialogKind::Success,
            DialogKind::Error,
            DialogKind::Warning,
        ] {
            let layout = DialogLayout::compute(frame, &active(kind, "msg"));
            assert!(layout.cancel_button.is_none(), "{kind:?} must not render cancel");
        }
    }

    #[test]
    fn test_buttons_are_inside_dialog() {
        let frame = Rect::new(0, 0, 100, 40);
        let layout = DialogLayout::compute(frame, &active(DialogKind::Confirm, "Remove member?"));

        assert!(layout.dialog.contains(ratatui::layout::Position::new(
            layout.confirm_button.x,
            layout.confirm_button.y
        )));
        let cancel = layout.cancel_button.unwrap();
        assert!(layout
            .dialog
            .contains(ratatui::layout::Position::new(cancel.x, cancel.y)));
    }

    #[test]
    fn test_long_message_grows_height() {
        let frame = Rect::new(0, 0, 100, 40);
        let short = DialogLayout::compute(frame, &active(DialogKind::Alert, "hi"));
        let long = DialogLayout::compute(
            frame,
            &active(DialogKind::Alert, &"long message ".repeat(20)),
        );
        assert!(long.dialog.height > short.dialog.height);
    }
}
