//! Command-line argument parsing for cohort-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `cohort_config`).
//! - Terminal state management (see `main.rs`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Configuration precedence: CLI args > env vars > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for cohort-tui.
#[derive(Debug, Parser)]
#[command(
    name = "cohort-tui",
    about = "Terminal dashboard for the Cohort learning platform",
    version,
    after_help = "Examples:\n  cohort-tui\n  cohort-tui --config-path ./ui.json\n  cohort-tui --theme dark --no-mouse\n"
)]
pub struct Cli {
    /// Path to a custom UI configuration file
    #[arg(long, env = "COHORT_CONFIG")]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support (dropdown clicks and the hover profile card
    /// then require keyboard-only operation)
    #[arg(long)]
    pub no_mouse: bool,

    /// Color theme (default, light, dark, high-contrast)
    #[arg(long)]
    pub theme: Option<String>,
}
