//! Tests for the modal dialog: lazy init, presets, button flows, and the
//! deferred-resolution contract of the convenience wrappers.
//!
//! ## Invariants
//! - `show` before any init still makes the dialog visible (lazy init)
//! - Non-confirm kinds render a single button; confirm renders two
//! - A deferred resolves at most once, never errors, and backdrop
//!   dismissal of a confirm dialog resolves neither outcome

mod helpers;
use helpers::*;

use cohort_tui::dialog::{DialogKind, DialogLayout, DialogRequest};
use futures_util::FutureExt;

#[test]
fn test_show_before_init_becomes_visible() {
    let mut app = test_app();
    assert!(!app.dialog.is_initialized());

    let _seen = app.dialog.alert("Saved");

    assert!(app.dialog.is_initialized());
    assert!(app.dialog.accepts_input());
    assert_eq!(app.dialog.active().unwrap().message, "Saved");
}

#[test]
fn test_warning_wrapper_preset() {
    let mut app = test_app();
    let _seen = app.dialog.warning("Low disk space");

    let active = app.dialog.active().unwrap();
    assert_eq!(active.kind, DialogKind::Warning);
    assert_eq!(active.title, "Warning");
    assert_eq!(active.confirm_text, "OK");
    assert!(!active.kind.has_cancel(), "No cancel button for warnings");

    let layout = DialogLayout::compute(app.last_area, active);
    assert!(layout.cancel_button.is_none());
}

#[test]
fn test_confirm_renders_two_buttons() {
    let mut app = test_app();
    let _answer = app.dialog.confirm("Delete?");

    let active = app.dialog.active().unwrap();
    assert_eq!(active.title, "Confirm");
    assert_eq!(active.confirm_text, "Confirm");
    assert_eq!(active.cancel_text, "Cancel");

    let layout = DialogLayout::compute(app.last_area, active);
    let cancel = layout.cancel_button.expect("confirm dialog has two buttons");
    assert!(cancel.right() < layout.confirm_button.x, "Cancel renders left of confirm");
}

#[test]
fn test_confirm_click_resolves_true() {
    let mut app = test_app();
    let answer = app.dialog.confirm("Delete?");

    let layout = DialogLayout::compute(app.last_area, app.dialog.active().unwrap());
    let (col, row) = center(layout.confirm_button);
    app.handle_mouse(click(col, row));

    assert_eq!(answer.now_or_never(), Some(true));
    assert!(!app.dialog.accepts_input());
}

#[test]
fn test_cancel_click_resolves_false() {
    let mut app = test_app();
    let answer = app.dialog.confirm("Delete?");

    let layout = DialogLayout::compute(app.last_area, app.dialog.active().unwrap());
    let (col, row) = center(layout.cancel_button.unwrap());
    app.handle_mouse(click(col, row));

    assert_eq!(answer.now_or_never(), Some(false));
}

#[test]
fn test_backdrop_click_resolves_neither() {
    let mut app = test_app();
    let answer = app.dialog.confirm("Delete?");

    // Top-left corner is well outside the centered dialog box.
    app.handle_mouse(click(0, 0));

    assert!(!app.dialog.accepts_input(), "Backdrop click hides the dialog");
    assert!(!answer.is_resolved(), "Backdrop dismissal resolves neither outcome");
    assert_eq!(answer.now_or_never(), None);
}

#[test]
fn test_click_inside_dialog_body_does_nothing() {
    let mut app = test_app();
    let _answer = app.dialog.confirm("Delete?");

    let layout = DialogLayout::compute(app.last_area, app.dialog.active().unwrap());
    app.handle_mouse(click(layout.dialog.x + 2, layout.dialog.y + 1));

    assert!(app.dialog.accepts_input(), "Body clicks neither confirm nor dismiss");
}

#[test]
fn test_alert_resolves_once_after_button() {
    let mut app = test_app();
    let seen = app.dialog.alert("Saved");
    assert!(!seen.is_resolved(), "Nothing resolves before the user acts");

    app.handle_input(enter_key());
    assert!(seen.is_resolved());
    assert_eq!(seen.now_or_never(), Some(()));
}

#[test]
fn test_escape_hides_without_resolving() {
    let mut app = test_app();
    let seen = app.dialog.alert("Saved");

    app.handle_input(esc_key());

    assert!(!app.dialog.accepts_input());
    assert!(!seen.is_resolved());
}

#[test]
fn test_keyboard_yes_no_on_confirm_dialog() {
    let mut app = test_app();
    let answer = app.dialog.confirm("Remove member?");
    app.handle_input(key('n'));
    assert_eq!(answer.now_or_never(), Some(false));

    let answer = app.dialog.confirm("Remove member?");
    app.handle_input(key('y'));
    assert_eq!(answer.now_or_never(), Some(true));
}

#[test]
fn test_new_show_overwrites_previous_dialog() {
    let mut app = test_app();
    let first = app.dialog.alert("first");
    let _second = app.dialog.confirm("second");

    let active = app.dialog.active().unwrap();
    assert_eq!(active.kind, DialogKind::Confirm);
    assert_eq!(active.message, "second");

    // The first dialog's deferred can no longer resolve: its callback
    // was overwritten along with the content.
    app.handle_input(enter_key());
    assert!(!first.is_resolved());
}

#[test]
fn test_show_options_fall_back_to_defaults() {
    let mut app = test_app();
    app.dialog.show(DialogRequest::new(DialogKind::from_name("bogus")));

    let active = app.dialog.active().unwrap();
    assert_eq!(active.kind, DialogKind::Alert, "Unknown kind degrades to alert");
    assert_eq!(active.title, "Notification");
    assert_eq!(active.message, "");
    assert_eq!(active.confirm_text, "OK");
}

#[test]
fn test_input_is_routed_to_dialog_while_shown() {
    let mut app = test_app();
    let _seen = app.dialog.alert("busy");

    // 's' would normally open the submit feedback dialog; while a dialog
    // is up it must be ignored.
    app.handle_input(key('s'));
    assert_eq!(app.dialog.active().unwrap().message, "busy");
}

#[test]
fn test_submit_paths() {
    let mut app = test_app();

    app.handle_input(key('s'));
    let active = app.dialog.active().unwrap();
    assert_eq!(active.kind, DialogKind::Warning, "Incomplete form warns");
    app.handle_input(enter_key());

    // Fill both dropdowns, then submit again.
    app.handle_input(enter_key());
    app.handle_input(enter_key()); // select first option of dropdown 0
    app.handle_input(tab_key());
    app.handle_input(enter_key());
    app.handle_input(enter_key()); // select first option of dropdown 1

    app.handle_input(key('s'));
    let active = app.dialog.active().unwrap();
    assert_eq!(active.kind, DialogKind::Success);
    assert_eq!(active.message, "Enrollment saved");
}
