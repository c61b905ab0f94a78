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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line, handling a text input
//! component and dispatching the corresponding application command or event
//! when a command is submitted. `:open <path>` is how files and folders are
//! selected from inside the application.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::{commands::AppCommand, events::AppEvent};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandLine {
    Open(String),
    Rescan,
    Clear,
    Back,
    Quit,
}

/// Parses a submitted command line.
///
/// Everything after `open` is taken as the path, so paths may contain
/// spaces.
pub(crate) fn parse(buffer: &str) -> Result<CommandLine, String> {
    let buffer = buffer.trim();
    let (command, rest) = buffer
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((buffer, ""));

    match (command, rest) {
        ("open" | "o", "") => Err("Usage: open <path>".to_string()),
        ("open" | "o", path) => Ok(CommandLine::Open(path.to_string())),
        ("rescan", "") => Ok(CommandLine::Rescan),
        ("clear", "") => Ok(CommandLine::Clear),
        ("back" | "b", "") => Ok(CommandLine::Back),
        ("q" | "quit", "") => Ok(CommandLine::Quit),
        _ => Err(format!("Unknown command: {}", buffer)),
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        command_tx: &Sender<AppCommand>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }
            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    self.run_command(&buffer, command_tx, event_tx)?;
                }
            }
            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(
        &self,
        buffer: &str,
        command_tx: &Sender<AppCommand>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<()> {
        log::debug!("Command line: {}", buffer);

        match parse(buffer) {
            Ok(CommandLine::Open(path)) => command_tx.send(AppCommand::ScanPaths(vec![path]))?,
            Ok(CommandLine::Rescan) => event_tx.send(AppEvent::Rescan)?,
            Ok(CommandLine::Clear) => event_tx.send(AppEvent::ClearLibrary)?,
            Ok(CommandLine::Back) => event_tx.send(AppEvent::BackToLibrary)?,
            Ok(CommandLine::Quit) => event_tx.send(AppEvent::ExitApplication)?,
            Err(message) => event_tx.send(AppEvent::Error(message))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse("open /media/My Videos"), Ok(CommandLine::Open("/media/My Videos".to_string())));
        assert_eq!(parse("  o  clip.mp4 "), Ok(CommandLine::Open("clip.mp4".to_string())));
        assert_eq!(parse("rescan"), Ok(CommandLine::Rescan));
        assert_eq!(parse("clear"), Ok(CommandLine::Clear));
        assert_eq!(parse("b"), Ok(CommandLine::Back));
        assert_eq!(parse("q"), Ok(CommandLine::Quit));
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse("open").is_err());
        assert!(parse("rescan now").is_err());
        assert_eq!(parse("fly"), Err("Unknown command: fly".to_string()));
    }

    #[test]
    fn typed_open_command_requests_a_scan() {
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, _event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &command_tx, &event_tx).unwrap());
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &command_tx, &event_tx).unwrap());
        assert!(commander.active());

        for c in "o /tmp".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &command_tx, &event_tx).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &command_tx, &event_tx).unwrap();

        assert!(!commander.active());
        assert!(matches!(
            command_rx.try_recv(),
            Ok(AppCommand::ScanPaths(paths)) if paths == ["/tmp"]
        ));
    }

    #[test]
    fn escape_abandons_input() {
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &command_tx, &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Char('q')), &command_tx, &event_tx).unwrap();
        commander.handle_event(&key(KeyCode::Esc), &command_tx, &event_tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(command_rx.try_recv().is_err());
        assert!(event_rx.try_recv().is_err());
    }
}
