//! Configuration types for Cohort TUI.

use chrono::NaiveDate;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// The committed value when this option is selected.
    pub value: String,
    /// The human-readable label shown in the menu and the trigger.
    pub label: String,
}

impl DropdownOption {
    /// Create an option from a value and label pair.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn default_placeholder() -> String {
    "Select an option".to_string()
}

/// Descriptor for one dropdown on the dashboard form.
///
/// Replaces environment inspection: every dropdown the UI builds comes from
/// one of these, passed to the controller at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownSpec {
    /// Stable identifier for the committed value (form field name).
    pub id: String,
    /// Label rendered above the trigger.
    #[serde(default)]
    pub label: String,
    /// Text shown on the trigger before any selection is made.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// The selectable options. An empty list is valid; the dropdown opens
    /// to an empty menu and never produces a selection.
    #[serde(default)]
    pub options: Vec<DropdownOption>,
}

/// Descriptor for one roster member acting as a profile-card trigger.
///
/// Every field is optional in the file; presentation-level fallbacks are
/// applied where the card is populated, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSpec {
    pub name: String,
    pub username: String,
    pub email: String,
    pub stars: Option<u32>,
    pub role: String,
    /// Avatar glyph (emoji or single character). When absent the card shows
    /// an initial-letter badge instead.
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub joined: Option<NaiveDate>,
    /// Course progress in percent (0-100).
    pub progress: Option<u8>,
}

/// Top-level UI configuration: everything the dashboard renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dropdowns: Vec<DropdownSpec>,
    pub members: Vec<MemberSpec>,
}

impl UiConfig {
    /// Built-in demo configuration used when no config file is found, so
    /// the binary runs out of the box.
    pub fn sample() -> Self {
        Self {
            dropdowns: vec![
                DropdownSpec {
                    id: "course".to_string(),
                    label: "Course".to_string(),
                    placeholder: "Select a course".to_string(),
                    options: vec![
                        DropdownOption::new("python-basics", "Python Basics"),
                        DropdownOption::new("data-structures", "Data Structures"),
                        DropdownOption::new("web-dev", "Web Development"),
                    ],
                },
                DropdownSpec {
                    id: "track".to_string(),
                    label: "Track".to_string(),
                    placeholder: "Select a track".to_string(),
                    options: vec![
                        DropdownOption::new("self-paced", "Self-paced"),
                        DropdownOption::new("cohort", "Cohort"),
                    ],
                },
            ],
            members: vec![
                MemberSpec {
                    name: "Ada Lovelace".to_string(),
                    username: "ada".to_string(),
                    email: "ada@example.com".to_string(),
                    stars: Some(12),
                    role: "Mentor".to_string(),
                    avatar: None,
                    bio: Some("Writes the notes everyone else studies from.".to_string()),
                    joined: NaiveDate::from_ymd_opt(2024, 1, 15),
                    progress: Some(80),
                },
                MemberSpec {
                    name: "Grace Hopper".to_string(),
                    username: "grace".to_string(),
                    email: "grace@example.com".to_string(),
                    stars: Some(31),
                    role: "Teacher".to_string(),
                    avatar: Some("🦋".to_string()),
                    bio: None,
                    joined: NaiveDate::from_ymd_opt(2023, 9, 1),
                    progress: Some(100),
                },
                MemberSpec {
                    name: "Ken Thompson".to_string(),
                    username: "ken".to_string(),
                    email: "ken@example.com".to_string(),
                    stars: Some(4),
                    role: String::new(),
                    avatar: None,
                    bio: None,
                    joined: None,
                    progress: None,
                },
            ],
        }
    }
}

/// User-selectable color theme.
///
/// Expanded into a full `Theme` at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Next theme in the cycle (used by the "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Default,
        }
    }

    /// Parse a theme name from the CLI. Unknown names fall back to the
    /// default theme rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "high_contrast" | "high-contrast" => Self::HighContrast,
            _ => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist `ColorTheme` and expand on startup.
/// - Colors should be semantically meaningful (error/warn/success/info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),
                accent: Color::Indexed(214), // orange-ish

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Indexed(110),
                disabled: Color::DarkGray,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,

                highlight_fg: Color::White,
                highlight_bg: Color::Blue,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::Gray,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_spec_defaults() {
        let json = r#"{ "id": "course" }"#;
        let spec: DropdownSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.id, "course");
        assert_eq!(spec.placeholder, "Select an option");
        assert!(spec.options.is_empty());
    }

    #[test]
    fn test_member_spec_all_fields_optional() {
        let spec: MemberSpec = serde_json::from_str("{}").unwrap();
        assert!(spec.name.is_empty());
        assert!(spec.stars.is_none());
        assert!(spec.joined.is_none());
    }

    #[test]
    fn test_member_spec_joined_date_parses() {
        let json = r#"{ "name": "Ada", "joined": "2024-01-15" }"#;
        let spec: MemberSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.joined, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_ui_config_round_trip() {
        let original = UiConfig::sample();
        let json = serde_json::to_string(&original).unwrap();
        let back: UiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dropdowns.len(), original.dropdowns.len());
        assert_eq!(back.members.len(), original.members.len());
    }

    #[test]
    fn test_color_theme_cycle_covers_all_variants() {
        let mut seen = vec![ColorTheme::Default];
        let mut current = ColorTheme::Default;
        loop {
            current = current.cycle_next();
            if current == ColorTheme::Default {
                break;
            }
            seen.push(current);
        }
        assert_eq!(seen.len(), 4, "Cycle should visit every theme");
    }

    #[test]
    fn test_color_theme_from_name_unknown_falls_back() {
        assert_eq!(ColorTheme::from_name("dark"), ColorTheme::Dark);
        assert_eq!(ColorTheme::from_name("high-contrast"), ColorTheme::HighContrast);
        assert_eq!(ColorTheme::from_name("neon"), ColorTheme::Default);
    }

    #[test]
    fn test_theme_expansion_differs_per_variant() {
        let default = Theme::from_color_theme(ColorTheme::Default);
        let light = Theme::from_color_theme(ColorTheme::Light);
        assert_ne!(default.text, light.text);
    }
}
