//! Configuration for Cohort TUI.
//!
//! This crate provides the typed UI descriptors the dashboard is built
//! from (dropdown and roster member specs), the color theme system, shared
//! timing/layout constants, and the loader that resolves and parses the
//! configuration file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigError, load_dotenv, load_ui_config, resolve_config_path};
pub use types::{ColorTheme, DropdownOption, DropdownSpec, MemberSpec, Theme, UiConfig};
