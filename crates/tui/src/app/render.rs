//! Frame rendering.
//!
//! Base panels draw first, then the floating surfaces in stacking order:
//! open dropdown menu, profile card, dialog. The dialog always draws last
//! so it overlays everything else.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::layout::ScreenLayout;
use crate::app::profile_card::{AvatarView, CardContent};
use crate::ui::components::{dropdown, profile_card};
use crate::ui::dialog::render_dialog;
use crate::ui::theme::ThemeExt;

impl App {
    /// Render one frame.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = ScreenLayout::compute(self.last_area, &self.dropdowns, self.card.members().len());
        let theme = self.theme;

        // Header
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" Cohort ", theme.title()),
            Span::styled("learning dashboard", theme.text_dim()),
        ]))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border()));
        f.render_widget(header, layout.header);
        let theme_name = Paragraph::new(Line::from(Span::styled(
            format!("{} ", self.color_theme),
            theme.text_dim(),
        )))
        .alignment(Alignment::Right);
        f.render_widget(theme_name, layout.header);

        // Enrollment form
        let form_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Line::from(" Enrollment "));
        f.render_widget(form_block, layout.form);
        for (i, d) in self.dropdowns.iter().enumerate() {
            dropdown::render_trigger(
                f,
                d,
                layout.dropdown_labels[i],
                layout.dropdown_triggers[i],
                self.focus == i,
                &theme,
            );
        }

        // Roster
        let roster_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Line::from(" Roster "));
        f.render_widget(roster_block, layout.roster);
        for (i, area) in layout.roster_rows.iter().enumerate() {
            let Some(member) = self.card.members().get(i) else {
                break;
            };
            let content = CardContent::from_member(member);
            let hovered = self.card.hovered_trigger() == Some(i);
            let name_style = if hovered {
                theme.highlight().add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            };
            let avatar = match &content.avatar {
                AvatarView::Glyph(glyph) => glyph.clone(),
                AvatarView::Initial(initial) => format!("({initial})"),
            };
            let row = Paragraph::new(Line::from(vec![
                Span::styled(format!("{avatar} "), theme.accent()),
                Span::styled(content.name.clone(), name_style),
                Span::styled(format!(" · {}", content.role), theme.text_dim()),
            ]))
            .style(if hovered { theme.highlight() } else { Style::default() });
            f.render_widget(row, *area);
        }

        // Footer hints
        let footer = Paragraph::new(Line::from(Span::styled(
            " Tab focus · Enter open/select · s submit · c clear · t theme · q quit",
            theme.text_dim(),
        )));
        f.render_widget(footer, layout.footer);

        // Floating surfaces, bottom to top.
        if let Some(open) = self.dropdowns.open_index() {
            if let (Some(d), Some(menu)) = (
                self.dropdowns.get(open),
                layout.dropdown_menus.get(open).and_then(|m| *m),
            ) {
                dropdown::render_menu(f, d, menu, &theme);
            }
        }

        if let Some(view) = self.card.view() {
            profile_card::render_card(f, view, &theme);
        }

        if self.dialog.is_shown() {
            if let Some(active) = self.dialog.active() {
                render_dialog(f, active, &theme);
            }
        }
    }
}
