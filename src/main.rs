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

//! # Music Catalog TUI.
//!
//! A terminal client for a personal music catalog: artists, tracks and
//! collections, with search and an admin area, backed either by a catalog
//! server over REST or by a local in-memory store.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** owns the catalog backend and processes commands
//!   off the UI thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod api;
mod components;
mod config;
mod modal;
mod model;
mod notify;
mod render;
mod session;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

use crate::{
    actions::{
        Generations,
        commands::AppCommand,
        events::{AppEvent, process_events, show_section},
    },
    components::{
        AdminView, ArtistsView, CollectionsView, LoginView, ProfileView, SearchView, TracksView,
    },
    config::AppConfig,
    modal::Modal,
    model::Genre,
    notify::Notifications,
    session::Session,
    theme::Theme,
};

const LOG_FILE: &str = "trackdeck.log";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Login,
    Profile,
    Tracks,
    Collections,
    Search,
    Artists,
    Admin,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub section: Section,
    pub session: Session,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub genres: Vec<Genre>,

    pub login_view: LoginView,
    pub profile_view: ProfileView,
    pub artists_view: ArtistsView,
    pub tracks_view: TracksView,
    pub collections_view: CollectionsView,
    pub search_view: SearchView,
    pub admin_view: AdminView,

    pub modal: Option<Modal>,
    pub notifications: Notifications,
    pub generations: Generations,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, session: Session, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            section: Section::Login,
            session,
            event_tx,
            event_rx,
            command_tx,
            genres: Vec::new(),
            login_view: LoginView::new(),
            profile_view: ProfileView::new(),
            artists_view: ArtistsView::new(),
            tracks_view: TracksView::new(),
            collections_view: CollectionsView::new(),
            search_view: SearchView::new(),
            admin_view: AdminView::new(),
            modal: None,
            notifications: Notifications::default(),
            generations: Generations::default(),
        }
    }

    /// Drops all per-user state and returns to the login screen. Used on
    /// sign-out; the channels and configuration are kept.
    pub fn reset_to_login(&mut self) {
        self.session = Session::default();
        self.section = Section::Login;
        self.genres = Vec::new();
        self.login_view = LoginView::new();
        self.profile_view = ProfileView::new();
        self.artists_view = ArtistsView::new();
        self.tracks_view = TracksView::new();
        self.collections_view = CollectionsView::new();
        self.search_view = SearchView::new();
        self.admin_view = AdminView::new();
        self.modal = None;
        self.notifications = Notifications::default();
        self.generations = Generations::default();
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    init_logging();

    let session = session::load_session();

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, session, command_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes log output to a file next to the configuration; the terminal
/// itself belongs to the TUI. Logging is best-effort and failures to set it
/// up are ignored.
fn init_logging() {
    let Ok(config_path) = confy::get_configuration_file_path(config::APP_NAME, None) else {
        return;
    };
    let Some(dir) = config_path.parent() else {
        return;
    };
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Prepares the terminal for the TUI application.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
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
/// raw mode and leaving the alternate screen. It also ensures the cursor is
/// made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker that owns the catalog backend and processes
///   asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes and notification expiry.
///
/// After spawning the workers, it hands control to [`process_events`] to
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
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(
        &app.config,
        app.session.token.clone(),
        command_rx,
        command_event_tx,
    );

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // A persisted session skips the login screen and lands on the tracks
    // section; the genre list is loaded up front for the forms and filters.
    if app.session.is_authenticated() {
        let generation = app.generations.genres.begin();
        app.command_tx.send(AppCommand::LoadGenres { generation })?;
        show_section(app, Section::Tracks)?;
    }

    terminal.draw(|f| render::draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
