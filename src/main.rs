// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Player TUI.
//!
//! A terminal-based local video library and player.
//!
//! This application coordinates a TUI frontend built with `ratatui`, a
//! background scanner that discovers video files, and an MPV backend that
//! plays them in its own window.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** handle directory scans and playback via
//!   asynchronous command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod browser;
mod commander;
mod config;
mod error;
mod model;
mod player;
mod render;
mod scan;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::File,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    browser::LibraryBrowser,
    commander::Commander,
    config::AppConfig,
    model::{catalog::Catalog, library::VideoLibrary},
    player::{VideoPlayer, controller::PlayerController},
    theme::Theme,
};

const HELP: &str = "\
vidui - browse and play local video files

USAGE:
  vidui [OPTIONS] [PATH ...]

ARGS:
  PATH                  Files or folders to add to the library

OPTIONS:
  --log-level <LEVEL>   Log filter, e.g. info or vidui=debug
  -h, --help            Print this help
";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum MainView {
    Library,
    Player,
}

/// Command line arguments.
struct Args {
    log_level: Option<String>,
    paths: Vec<String>,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub video_player: VideoPlayer,

    pub library: VideoLibrary,
    pub browser: LibraryBrowser,
    pub player: PlayerController,
    pub catalog: Catalog,

    pub commander: Commander,

    /// Latest status line message, dismissed by the next key.
    pub status: Option<String>,
    /// Every location scanned this session, for rescans.
    pub scan_roots: Vec<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let video_player_event_tx = event_tx.clone();
        let video_player = VideoPlayer::new(config.video_output.clone(), video_player_event_tx);

        let library = VideoLibrary::new(config.fallback_folder.clone());
        let player = PlayerController::new(config.controls_timeout());

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Library,
            event_tx,
            event_rx,
            command_tx,
            video_player,
            library,
            browser: LibraryBrowser::new(),
            player,
            catalog: Catalog::new(),
            commander: Commander::new(),
            status: None,
            scan_roots: vec![],
        }
    }
}

/// The entry point of the application.
///
/// Parses the command line, sets up logging and the communication channels,
/// initializes the application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        print!("{}", HELP);
        return Ok(());
    };

    let config = config::load_config();
    init_logging(args.log_level.as_deref().unwrap_or(&config.log_level));

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx, args.paths);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Parses the command line, returning `None` if help was requested.
fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let log_level = args
        .opt_value_from_str("--log-level")
        .context("Invalid --log-level")?;

    let paths = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok())
        .collect();

    Ok(Some(Args { log_level, paths }))
}

/// Sends log output to a file next to the configuration file.
///
/// The terminal belongs to the user interface, so if the log file cannot be
/// created logging stays disabled.
fn init_logging(default_level: &str) {
    let Some(path) = config::log_path() else {
        return;
    };

    if let Some(dir) = path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let Ok(file) = File::create(&path) else {
        return;
    };

    let initialised = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .try_init();

    if initialised.is_ok() {
        log::info!("Logging to {}", path.display());
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to drive the controls idle timer and UI refreshes.
///
/// The configured media directories and any paths given on the command line
/// are scanned straight away. Control is then handed to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
    paths: Vec<String>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    let initial: Vec<String> = app.config.media_dirs.iter().cloned().chain(paths).collect();
    if !initial.is_empty() {
        app.command_tx
            .send(AppCommand::ScanPaths(initial))
            .context("Failed to start the initial scan")?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
