//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard and mouse input and
//! a deterministic App fixture with a known layout.

#![allow(dead_code)]

use cohort_config::{ColorTheme, DropdownOption, DropdownSpec, MemberSpec, UiConfig};
use cohort_tui::app::{App, ScreenLayout};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a left-button press at the given cell.
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Create a pointer-move event at the given cell.
pub fn move_to(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// The deterministic UI config the fixtures use.
pub fn test_config() -> UiConfig {
    UiConfig {
        dropdowns: vec![
            DropdownSpec {
                id: "course".to_string(),
                label: "Course".to_string(),
                placeholder: "Select a course".to_string(),
                options: vec![
                    DropdownOption::new("a", "Alpha"),
                    DropdownOption::new("b", "Beta"),
                    DropdownOption::new("c", "Gamma"),
                ],
            },
            DropdownSpec {
                id: "track".to_string(),
                label: "Track".to_string(),
                placeholder: "Select a track".to_string(),
                options: vec![
                    DropdownOption::new("fast", "Fast"),
                    DropdownOption::new("slow", "Slow"),
                ],
            },
        ],
        members: vec![
            MemberSpec {
                name: "Ada".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                stars: Some(12),
                role: "Mentor".to_string(),
                ..MemberSpec::default()
            },
            MemberSpec {
                name: "Grace".to_string(),
                username: "grace".to_string(),
                email: "grace@example.com".to_string(),
                stars: Some(3),
                role: "Teacher".to_string(),
                avatar: Some("🦋".to_string()),
                bio: Some("Debugger of moths.".to_string()),
                joined: chrono::NaiveDate::from_ymd_opt(2023, 9, 1),
                progress: Some(100),
            },
            MemberSpec::default(),
        ],
    }
}

/// Create an App with the test config and a fixed 100x40 frame.
pub fn test_app() -> App {
    let mut app = App::new(test_config(), ColorTheme::Default);
    app.last_area = Rect::new(0, 0, 100, 40);
    app
}

/// The screen layout the app is currently hit-testing against.
pub fn layout_of(app: &App) -> ScreenLayout {
    ScreenLayout::compute(app.last_area, &app.dropdowns, app.card.members().len())
}

/// Center cell of a rect, for aiming clicks.
pub fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}
