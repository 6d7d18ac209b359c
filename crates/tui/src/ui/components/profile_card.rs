//! Profile card rendering.

use cohort_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::profile_card::{AvatarView, BIO_MAX_ROWS, CardView};
use crate::ui::text::wrap_text;
use crate::ui::theme::ThemeExt;

/// The close control's hit area within the card's top border.
pub fn close_button_area(card: Rect) -> Rect {
    Rect::new(card.right().saturating_sub(3), card.y, 2, 1)
}

/// Render the profile card overlay.
pub fn render_card(f: &mut Frame, view: &CardView, theme: &Theme) {
    let area = view.area;
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent())
        .title(Line::from(" Profile ").left_aligned())
        .title(Line::from("✕ ").right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let content = &view.content;
    let avatar = match &content.avatar {
        AvatarView::Glyph(glyph) => glyph.clone(),
        AvatarView::Initial(initial) => format!("({initial})"),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(avatar, theme.accent().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(content.name.clone(), theme.text().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled(format!("@{}", content.username), theme.text_dim()),
            Span::styled(" · ", theme.text_dim()),
            Span::styled(content.role.clone(), theme.accent()),
        ]),
        Line::from(Span::styled(
            content.email.clone(),
            theme.text().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled(format!("★ {}", content.stars), theme.accent()),
            Span::raw("   "),
            Span::styled(format!("Progress {}", content.progress), theme.text()),
        ]),
    ];

    if let Some(bio) = &content.bio {
        for row in wrap_text(bio, inner.width as usize).into_iter().take(BIO_MAX_ROWS) {
            lines.push(Line::from(Span::styled(row, theme.text_dim())));
        }
    }
    if let Some(joined) = &content.joined {
        lines.push(Line::from(Span::styled(
            format!("Joined {joined}"),
            theme.text_dim(),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
