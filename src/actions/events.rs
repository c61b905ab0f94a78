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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (scanner, video player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to background workers.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::{handlers::*, keys::process_key_event},
    model::{DiscoveredFile, EntryId},
    player::MediaEvent,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Catalog(CatalogEvent),
    FilesDiscovered(Vec<DiscoveredFile>),

    RemoveEntry(EntryId),

    PlayIndex(usize),
    PlayNext,
    PlayPrevious,
    BackToLibrary,

    Rescan,
    ClearLibrary,

    Media { generation: u64, event: MediaEvent },

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

#[derive(Debug)]
pub(crate) enum CatalogEvent {
    Started(Vec<String>),
    StartedDirectory(String),
    ProcessedFile(usize),
    FinishedDirectory(String),
    Finished,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Catalog(catalog_event) => handle_catalog_event(app, catalog_event),
            AppEvent::FilesDiscovered(files) => handle_files_discovered(app, files),
            AppEvent::RemoveEntry(id) => handle_remove_entry(app, id),
            AppEvent::PlayIndex(index) => handle_play_index(app, index),
            AppEvent::PlayNext => handle_play_next(app),
            AppEvent::PlayPrevious => handle_play_previous(app),
            AppEvent::BackToLibrary => handle_back_to_library(app),
            AppEvent::Rescan => handle_rescan(app)?,
            AppEvent::ClearLibrary => handle_clear_library(app),
            AppEvent::Media { generation, event } => handle_media_event(app, generation, event),
            AppEvent::Tick => handle_tick(app),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => handle_fatal_error(app, message),
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
