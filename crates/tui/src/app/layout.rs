//! Screen geometry shared between rendering and mouse handling.
//!
//! The same layout is computed from the frame area in both places, so a
//! click or hover is always tested against exactly what was drawn.

use cohort_config::constants::DROPDOWN_MENU_MAX_ROWS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::dropdowns::DropdownSet;

/// Header rows (title bar).
pub const HEADER_HEIGHT: u16 = 3;
/// Footer rows (key hints).
pub const FOOTER_HEIGHT: u16 = 2;

/// Rows each dropdown occupies in the form: label, trigger, spacer.
const DROPDOWN_STRIDE: u16 = 3;

/// Computed screen geometry for one frame size.
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub roster: Rect,
    pub footer: Rect,
    /// Label row above each dropdown trigger.
    pub dropdown_labels: Vec<Rect>,
    /// Trigger row of each dropdown.
    pub dropdown_triggers: Vec<Rect>,
    /// Menu overlay of each dropdown; `Some` only while open.
    pub dropdown_menus: Vec<Option<Rect>>,
    /// One row per visible roster member (profile-card triggers).
    pub roster_rows: Vec<Rect>,
}

impl ScreenLayout {
    /// Compute the layout for `area` given the current dropdown state.
    pub fn compute(area: Rect, dropdowns: &DropdownSet, member_count: usize) -> Self {
        let [header, body, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .areas(area);

        let [form, roster] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(body);

        let form_inner = inset(form);
        let mut dropdown_labels = Vec::with_capacity(dropdowns.len());
        let mut dropdown_triggers = Vec::with_capacity(dropdowns.len());
        let mut dropdown_menus = Vec::with_capacity(dropdowns.len());

        for (i, dropdown) in dropdowns.iter().enumerate() {
            let top = form_inner.y.saturating_add(i as u16 * DROPDOWN_STRIDE);
            let label = row_in(form_inner, top, area);
            let trigger = row_in(form_inner, top.saturating_add(1), area);
            dropdown_labels.push(label);
            dropdown_triggers.push(trigger);

            let menu = (dropdown.is_open() && trigger.height > 0).then(|| {
                let rows = (dropdown.options().len() as u16).min(DROPDOWN_MENU_MAX_ROWS);
                let height = rows + 2; // borders
                Rect::new(trigger.x, trigger.bottom(), trigger.width, height)
                    .intersection(area)
            });
            dropdown_menus.push(menu);
        }

        let roster_inner = inset(roster);
        let visible_members = (member_count as u16).min(roster_inner.height) as usize;
        let roster_rows = (0..visible_members)
            .map(|i| {
                Rect::new(
                    roster_inner.x,
                    roster_inner.y + i as u16,
                    roster_inner.width,
                    1,
                )
            })
            .collect();

        Self {
            header,
            form,
            roster,
            footer,
            dropdown_labels,
            dropdown_triggers,
            dropdown_menus,
            roster_rows,
        }
    }

    /// Whether the point is inside dropdown `index`'s surface (trigger,
    /// label, or open menu). Clicks here never reach the document-level
    /// handlers.
    pub fn in_dropdown_surface(&self, index: usize, col: u16, row: u16) -> bool {
        let pos = ratatui::layout::Position::new(col, row);
        self.dropdown_labels
            .get(index)
            .is_some_and(|r| r.contains(pos))
            || self
                .dropdown_triggers
                .get(index)
                .is_some_and(|r| r.contains(pos))
            || self
                .dropdown_menus
                .get(index)
                .and_then(|m| *m)
                .is_some_and(|r| r.contains(pos))
    }
}

/// A one-row rect inside `inner`, clipped away entirely if `y` falls
/// outside the frame.
fn row_in(inner: Rect, y: u16, frame: Rect) -> Rect {
    if y >= frame.bottom() || inner.width == 0 {
        return Rect::default();
    }
    Rect::new(inner.x, y, inner.width, 1)
}

/// Shrink a bordered block area to its inner content area.
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
