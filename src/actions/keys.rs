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

//! Keyboard input routing.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, MainView, actions::events::AppEvent};

/// Maps keyboard input to application actions and playback commands.
///
/// Any key dismisses the status message. The command line gets first
/// refusal on every key, anything it does not consume is routed by the
/// active view.
///
/// # Errors
///
/// Returns an error if an event fails to send to the application loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    app.status = None;

    let event = Event::Key(key);
    if app
        .commander
        .handle_event(&event, &app.command_tx, &app.event_tx)?
    {
        return Ok(());
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        _ => {}
    }

    match app.main_view {
        MainView::Library => process_library_key_event(app, key),
        MainView::Player => process_player_key_event(app, key),
    }
}

fn process_library_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Navigation: Down / j
        KeyCode::Char('j') | KeyCode::Down => app.browser.next(),

        // Navigation: Up / k
        KeyCode::Char('k') | KeyCode::Up => app.browser.previous(),

        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if let Some(index) = app.browser.activate(&app.library) {
                app.event_tx.send(AppEvent::PlayIndex(index))?;
            }
        }

        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace | KeyCode::Esc => {
            app.browser.back();
        }

        KeyCode::Char('r') => app.event_tx.send(AppEvent::Rescan)?,

        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = app.browser.selected_entry_id(&app.library) {
                app.event_tx.send(AppEvent::RemoveEntry(id))?;
            }
        }

        _ => {}
    }

    Ok(())
}

fn process_player_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let now = Instant::now();
    app.player.interact(now);

    let player = &mut app.player;
    let media = &mut app.video_player;
    let config = &app.config;

    match key.code {
        KeyCode::Char(' ') => {
            player.toggle_play(media, now);
        }

        // Seeking
        KeyCode::Char(',') | KeyCode::Left => {
            player.seek_relative(-config.seek_step_secs, media, now);
        }
        KeyCode::Char('.') | KeyCode::Right => {
            player.seek_relative(config.seek_step_secs, media, now);
        }
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = f64::from(c.to_digit(10).unwrap_or_default());
            player.seek_percent(tenths * 10.0, media, now);
        }

        KeyCode::Char('a') => {
            player.cycle_aspect_ratio(media, now);
        }
        KeyCode::Char('s') => {
            player.cycle_speed(media, now);
        }

        KeyCode::Char('-') => {
            player.adjust_volume(-config.volume_step, media, now);
        }
        KeyCode::Char('=') | KeyCode::Char('+') => {
            player.adjust_volume(config.volume_step, media, now);
        }

        KeyCode::Char('[') => {
            player.adjust_brightness(-config.brightness_step, media, now);
        }
        KeyCode::Char(']') => {
            player.adjust_brightness(config.brightness_step, media, now);
        }

        KeyCode::Char('f') => {
            player.toggle_fullscreen(media, now);
        }
        KeyCode::Char('l') => {
            player.toggle_lock(now);
        }

        KeyCode::Char('n') => app.event_tx.send(AppEvent::PlayNext)?,
        KeyCode::Char('p') => app.event_tx.send(AppEvent::PlayPrevious)?,

        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            app.event_tx.send(AppEvent::BackToLibrary)?;
        }

        _ => {}
    }

    Ok(())
}
