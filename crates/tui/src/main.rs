//! Cohort TUI - terminal dashboard for the Cohort learning platform.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - UI state transitions (see `app`).
//! - Configuration parsing (see `cohort_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and the alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::{Context, Result};
use clap::Parser;
use cohort_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use cohort_config::{ColorTheme, load_dotenv, load_ui_config};
use cohort_tui::action::Action;
use cohort_tui::app::App;
use cohort_tui::cli::Cli;
use cohort_tui::terminal::TerminalGuard;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    load_dotenv();

    // File-based logging; stdout belongs to the TUI.
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "cohort-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // Note: _log_guard must live for the entire main() duration so logs flush.

    let config = load_ui_config(cli.config_path.as_deref()).context("failed to load UI config")?;
    let color_theme = cli
        .theme
        .as_deref()
        .map(ColorTheme::from_name)
        .unwrap_or_default();

    tracing::info!(
        dropdowns = config.dropdowns.len(),
        members = config.members.len(),
        theme = %color_theme,
        "starting cohort-tui"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(!no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Bounded channel for actions with backpressure handling.
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task: key events are never dropped, mouse events may
    // be when the channel is full (mouse-move floods are harmless to lose).
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        use crossterm::event::EventStream;
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let Ok(event) = event_result else {
                break;
            };
            let action = match event {
                crossterm::event::Event::Key(key) => {
                    (key.kind == crossterm::event::KeyEventKind::Press)
                        .then_some(Action::Input(key))
                }
                crossterm::event::Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
                crossterm::event::Event::Resize(width, height) => {
                    Some(Action::Resize(width, height))
                }
                _ => None,
            };
            let Some(action) = action else {
                continue;
            };

            let is_critical = !matches!(action, Action::Mouse(_));
            if is_critical {
                if tx_input.send(action).await.is_err() {
                    break;
                }
            } else {
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        }
    });

    let mut app = App::new(config, color_theme);
    app.set_action_sender(tx.clone());

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                match action {
                    Action::Input(key) => {
                        if let Some(followup) = app.handle_input(key) {
                            if matches!(followup, Action::Quit) {
                                break;
                            }
                            app.update(followup);
                        }
                    }
                    Action::Mouse(mouse) => {
                        if let Some(followup) = app.handle_mouse(mouse) {
                            if matches!(followup, Action::Quit) {
                                break;
                            }
                            app.update(followup);
                        }
                    }
                    other => app.update(other),
                }
            }
            _ = tick_interval.tick() => {
                // Drives dialog transitions and the hover-hide debounce.
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    Ok(())
}
