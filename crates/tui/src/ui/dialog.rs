//! Modal dialog rendering.
//!
//! The dialog draws last so it overlays every other surface. Geometry
//! comes from `DialogLayout` so the mouse handler and the renderer always
//! agree on where the buttons are.

use cohort_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::dialog::{ActiveDialog, DialogLayout};
use crate::ui::theme::ThemeExt;

/// Render the active dialog centered on the frame.
pub fn render_dialog(f: &mut Frame, active: &ActiveDialog, theme: &Theme) {
    let layout = DialogLayout::compute(f.area(), active);
    let accent = active.kind.accent(theme);

    f.render_widget(Clear, layout.dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(layout.dialog);
    f.render_widget(block, layout.dialog);

    // Header: icon + title.
    let header = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(active.kind.icon(), Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(
                active.title.clone(),
                theme.text().add_modifier(Modifier::BOLD),
            ),
        ])),
        header,
    );

    // Message body between header and button row.
    let body = Rect::new(
        inner.x + 1,
        inner.y + 2,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    f.render_widget(
        Paragraph::new(active.message.clone())
            .style(theme.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );

    // Buttons: cancel (plain) then confirm (accent), right-aligned.
    if let Some(cancel) = layout.cancel_button {
        f.render_widget(
            Paragraph::new(format!("[ {} ]", active.cancel_text)).style(theme.text_dim()),
            cancel,
        );
    }
    f.render_widget(
        Paragraph::new(format!("[ {} ]", active.confirm_text))
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        layout.confirm_button,
    );
}
