//! A personal portfolio page for the terminal.
//!
//! Run the binary to browse the page interactively.
//! Run with `--print` to write the page as plain text to stdout.

mod app;
mod config;
mod core;
mod links;
mod ui;

use std::fs::File;
use std::io::stderr;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{document::Document, motion::Motion, theme::Palette};

/// Animation frame interval.
const TICK_RATE: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Personal portfolio page for the terminal")]
struct Cli {
    /// Print the page as plain text and exit.
    #[arg(long)]
    print: bool,

    /// Page width used by `--print`.
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Skip the entrance animations.
    #[arg(long = "no-animations")]
    no_animations: bool,

    /// Directory holding the resume and portrait.
    #[arg(long, default_value = "public")]
    assets: PathBuf,

    /// Config file (defaults to `$XDG_CONFIG_HOME/folio/config.toml`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the current configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

// ───────────────────────────────────────── logging ──────────

/// Log to the file named by `FOLIO_LOG` when set, else to stderr.  The TUI
/// owns stderr while running, so interactive sessions should use the file.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match std::env::var_os("FOLIO_LOG") {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", PathBuf::from(&path).display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let mut user_config = AppConfig::load(&config_path);
    if cli.no_animations {
        user_config.animations = false;
    }

    // ── one-shot modes ────────────────────────────────────────
    if cli.write_config {
        user_config.save(&config_path)?;
        println!("wrote {}", config_path.display());
        return Ok(());
    }
    if cli.print {
        let document = Document::build(cli.width, &Palette::LIGHT, &Motion::settled(), &cli.assets);
        print!("{}", document.plain_text());
        return Ok(());
    }

    let mut state = AppState::new(user_config, cli.assets);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(TICK_RATE);
    let result = run(&mut terminal, &mut state, &mut events).await;

    // ── teardown ──────────────────────────────────────────────
    state.teardown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stderr>>,
    state: &mut AppState,
    events: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| ui::render::draw(frame, state))?;
            dirty = false;
        }

        for target in std::mem::take(&mut state.pending_links) {
            let message = links::opener::open_target(target, &state.assets);
            state.status_message = Some(message);
            dirty = true;
        }
        if dirty {
            continue;
        }

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(state, k),
            Some(AppEvent::Mouse(m)) => handler::handle_mouse(state, m),
            // Idle ticks don't redraw.
            Some(AppEvent::Tick) if !state.motion.is_animating() => continue,
            Some(AppEvent::Tick) => state.motion.tick(),
            Some(AppEvent::Resize(_, _)) => {}
            None => break,
        }
        dirty = true;

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
