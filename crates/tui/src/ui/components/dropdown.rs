//! Dropdown rendering.
//!
//! The trigger row is drawn in place inside the form; the open menu is an
//! overlay drawn after the base panels so it can float over the roster.

use cohort_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::dropdowns::Dropdown;
use crate::ui::theme::ThemeExt;

/// Direction indicator for a closed menu.
pub const INDICATOR_CLOSED: &str = "▾";
/// Direction indicator for an open (rotated) menu.
pub const INDICATOR_OPEN: &str = "▴";

/// Render a dropdown's label and trigger row.
pub fn render_trigger(
    f: &mut Frame,
    dropdown: &Dropdown,
    label_area: Rect,
    trigger_area: Rect,
    focused: bool,
    theme: &Theme,
) {
    if !dropdown.label().is_empty() {
        let label = Paragraph::new(Line::from(Span::styled(
            dropdown.label().to_string(),
            theme.text_dim(),
        )));
        f.render_widget(label, label_area);
    }

    let text_style = if dropdown.has_selection() {
        theme.text()
    } else {
        theme.text_dim()
    };
    let marker_style = if focused { theme.border_focused() } else { theme.border() };

    let text = Paragraph::new(Line::from(vec![
        Span::styled("▸ ", marker_style),
        Span::styled(dropdown.display_text().to_string(), text_style),
    ]));
    f.render_widget(text, trigger_area);

    let indicator = if dropdown.is_open() {
        INDICATOR_OPEN
    } else {
        INDICATOR_CLOSED
    };
    let arrow = Paragraph::new(Line::from(Span::styled(indicator, marker_style)))
        .alignment(Alignment::Right);
    f.render_widget(arrow, trigger_area);
}

/// Scroll offset that keeps the cursor row in view for long option lists.
pub fn menu_scroll(cursor: usize, visible_rows: usize) -> usize {
    cursor.saturating_sub(visible_rows.saturating_sub(1))
}

/// Render a dropdown's open menu as an overlay.
pub fn render_menu(f: &mut Frame, dropdown: &Dropdown, menu_area: Rect, theme: &Theme) {
    f.render_widget(Clear, menu_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused());
    let inner = block.inner(menu_area);
    f.render_widget(block, menu_area);

    let visible_rows = inner.height as usize;
    let scroll = menu_scroll(dropdown.cursor(), visible_rows);

    for (row, (index, option)) in dropdown
        .options()
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_rows)
        .enumerate()
    {
        let is_active = dropdown.selected_index() == Some(index);
        let is_cursor = dropdown.cursor() == index;

        let style = if is_active {
            theme.accent().add_modifier(Modifier::BOLD)
        } else if is_cursor {
            theme.highlight()
        } else {
            theme.text()
        };
        let prefix = if is_cursor { "> " } else { "  " };

        let area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let line = Paragraph::new(Line::from(Span::styled(
            format!("{prefix}{}", option.label),
            style,
        )))
        .style(if is_cursor { theme.highlight() } else { Style::default() });
        f.render_widget(line, area);
    }
}
