//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Route mouse events to the dialog when one is accepting input
//!   (buttons, backdrop dismissal).
//! - Hit-test dropdown triggers and open menus against the computed
//!   screen layout, with containment: clicks inside a dropdown surface
//!   never reach the document-level handlers.
//! - Derive profile-card hover targets from pointer movement.
//!
//! Does NOT handle:
//! - Keyboard input (see `app::input`).
//! - Rendering.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::Action;
use crate::app::App;
use crate::app::layout::ScreenLayout;
use crate::app::profile_card::PointerTarget;
use crate::dialog::DialogLayout;
use crate::ui::components::dropdown::menu_scroll;
use crate::ui::components::profile_card::close_button_area;

impl App {
    /// Handle mouse input - returns an Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.dialog.accepts_input() {
            self.handle_dialog_mouse(mouse);
            return None;
        }

        let layout = ScreenLayout::compute(self.last_area, &self.dropdowns, self.card.members().len());
        match mouse.kind {
            MouseEventKind::Moved => {
                let target = self.pointer_target(mouse.column, mouse.row, &layout);
                self.card
                    .pointer_moved(target, self.last_area, Instant::now());
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row, &layout)
            }
            _ => None,
        }
    }

    /// What the pointer is over, for hover purposes. The card wins over
    /// the roster rows it may overlap.
    fn pointer_target(&self, col: u16, row: u16, layout: &ScreenLayout) -> PointerTarget {
        let pos = Position::new(col, row);
        if self.card.card_area().is_some_and(|area| area.contains(pos)) {
            return PointerTarget::Card;
        }
        for (index, area) in layout.roster_rows.iter().enumerate() {
            if area.contains(pos) {
                return PointerTarget::Trigger { index, area: *area };
            }
        }
        PointerTarget::Elsewhere
    }

    fn handle_left_click(&mut self, col: u16, row: u16, layout: &ScreenLayout) -> Option<Action> {
        let pos = Position::new(col, row);

        // Dropdown surfaces first: these clicks are contained and never
        // fall through to the document-level handlers below.
        for index in 0..self.dropdowns.len() {
            if layout
                .dropdown_triggers
                .get(index)
                .is_some_and(|r| r.contains(pos))
            {
                self.focus = index;
                self.dropdowns.toggle(index);
                return None;
            }
            if let Some(menu) = layout.dropdown_menus.get(index).and_then(|m| *m) {
                if menu.contains(pos) {
                    self.handle_menu_click(index, menu, row);
                    return None;
                }
            }
            if layout.in_dropdown_surface(index, col, row) {
                return None;
            }
        }

        // Document level: any click out here closes every open dropdown.
        self.dropdowns.close_all();

        if let Some(card_area) = self.card.card_area() {
            if card_area.contains(pos) {
                if close_button_area(card_area).contains(pos) {
                    self.card.close();
                }
                // Other clicks inside the card are contained.
                return None;
            }
        }

        let on_trigger = layout.roster_rows.iter().any(|r| r.contains(pos));
        if !on_trigger {
            self.card.outside_click();
        }
        None
    }

    fn handle_menu_click(&mut self, index: usize, menu: ratatui::layout::Rect, row: u16) {
        let inner_top = menu.y + 1;
        let inner_bottom = menu.bottom().saturating_sub(1);
        if row < inner_top || row >= inner_bottom {
            // Border rows: contained, no selection.
            return;
        }
        let Some(dropdown) = self.dropdowns.get(index) else {
            return;
        };
        let visible_rows = menu.height.saturating_sub(2) as usize;
        let scroll = menu_scroll(dropdown.cursor(), visible_rows);
        let option_index = scroll + (row - inner_top) as usize;
        if option_index < dropdown.options().len() {
            self.dropdowns.select(index, option_index);
        }
    }

    fn handle_dialog_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        let Some(active) = self.dialog.active() else {
            return;
        };
        let layout = DialogLayout::compute(self.last_area, active);
        let pos = Position::new(mouse.column, mouse.row);

        if layout.confirm_button.contains(pos) {
            self.dialog.confirm_pressed();
        } else if layout.cancel_button.is_some_and(|b| b.contains(pos)) {
            self.dialog.cancel_pressed();
        } else if !layout.dialog.contains(pos) {
            // Backdrop click: hide without running either callback.
            self.dialog.dismiss();
        }
    }
}
