//! TUI-specific theme helpers and style builders.
//!
//! This module extends `cohort_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use cohort_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (title color + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get border style when focused.
    fn border_focused(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    /// Get accent style.
    fn accent(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
