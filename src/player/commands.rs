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

//! MPV-backed video playback engine and event processing.
//!
//! This module provides the core playback logic, leveraging `libmpv` for
//! decoding and for the video window that serves as the player surface. It
//! manages a background worker thread that bridges the application's
//! command-based interface and MPV's property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`PlayerCommand`]s from the UI to
//!    control playback (load, play, pause, seek, display settings).
//! 2. **Event Channel**: Broadcasts [`AppEvent::Media`] notifications tagged
//!    with the load generation, so the UI can drop events that belong to an
//!    entry it has already moved away from.

use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;

use crate::{actions::events::AppEvent, model::settings::AspectRatio, player::MediaEvent};

type MpvResult = std::result::Result<(), mpv::Error>;

#[derive(Debug)]
pub(crate) enum PlayerCommand {
    Load { path: PathBuf, generation: u64 },
    Play,
    Pause,
    Stop,
    SeekTo(f64),
    SetSpeed(f64),
    SetAspectRatio(AspectRatio),
    SetVolume(f64),
    SetBrightness(i64),
    ToggleFullscreen,
}

/// Spawns the player worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast
/// as a fatal application event.
pub(crate) fn spawn_player_worker(
    video_output: Option<String>,
    command_rx: Receiver<PlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = video_player_worker(video_output, command_rx, event_tx) {
            log::error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the playback backend.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize, or when the
/// application side of the event channel has gone away.
fn video_player_worker(
    video_output: Option<String>,
    command_rx: Receiver<PlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        if let Some(vo) = video_output.as_deref() {
            builder
                .set_option("vo", vo)
                .context("Failed to set video output")?;
        }
        builder
            .set_option("force-window", "yes")
            .context("Failed to set force-window")?;
        builder
            .set_option("idle", "yes")
            .context("Failed to set idle")?;
        // Hold the last frame at end of file so playback can be restarted.
        builder
            .set_option("keep-open", "yes")
            .context("Failed to set keep-open")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;
    handler
        .observe_property::<bool>("eof-reached", 0)
        .context("Failed to observe eof-reached")?;

    log::info!("MPV worker started");

    let mut tag = LoadTag::default();

    loop {
        if !process_commands(&mut handler, &command_rx, &mut tag, &event_tx)? {
            log::info!("Player command channel closed, stopping MPV worker");
            return Ok(());
        }
        if let Some(mpv_event) = handler.wait_event(0.05) {
            forward_event(&mut tag, mpv_event, &event_tx)?;
        }
    }
}

/// Tracks which load the events coming out of MPV belong to.
///
/// A load only takes effect once MPV reports `StartFile` for it. Until then
/// events still belong to the previous file and are dropped.
#[derive(Debug, Default)]
struct LoadTag {
    generation: u64,
    awaiting_start: bool,
}

impl LoadTag {
    fn begin(&mut self, generation: u64) {
        self.generation = generation;
        self.awaiting_start = true;
    }

    /// Maps an MPV event onto a media event for the current load.
    fn translate(&mut self, event: mpv::Event) -> Option<MediaEvent> {
        if let mpv::Event::StartFile = event {
            self.awaiting_start = false;
            return None;
        }

        if self.awaiting_start {
            log::trace!("Dropping MPV event from before generation {}", self.generation);
            return None;
        }

        match event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("duration", Format::Double(duration)) => Some(MediaEvent::MetadataLoaded(duration)),
                ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                    Some(MediaEvent::TimeUpdate(seconds))
                }
                ("eof-reached", Format::Flag(true)) => Some(MediaEvent::Ended),
                _ => None,
            },
            mpv::Event::EndFile(result) => match result {
                Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => Some(MediaEvent::Ended),
                Ok(_) => None,
                Err(e) => Some(MediaEvent::Failed(format!("Playback failed: {:?}", e))),
            },
            _ => None,
        }
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// Returns `false` once the command channel has been closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<PlayerCommand>,
    tag: &mut LoadTag,
    event_tx: &Sender<AppEvent>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(mpsc::TryRecvError::Empty) => return Ok(true),
            Err(mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            PlayerCommand::Load { path, generation } => {
                // Whatever MPV has already queued belongs to the outgoing file.
                while let Some(mpv_event) = handler.wait_event(0.0) {
                    forward_event(tag, mpv_event, event_tx)?;
                }
                tag.begin(generation);

                let Some(filename) = path.to_str() else {
                    tag.awaiting_start = false;
                    send_media(event_tx, generation, MediaEvent::Failed(format!(
                        "Path is not valid UTF-8: {}",
                        path.display()
                    )))?;
                    continue;
                };

                log::debug!("Loading {} (generation {})", filename, generation);

                if let Err(e) = handler.command(&["loadfile", filename, "replace"]) {
                    tag.awaiting_start = false;
                    send_media(event_tx, generation, MediaEvent::Failed(format!(
                        "Failed to load {}: {:?}",
                        filename, e
                    )))?;
                }
            }
            PlayerCommand::Play => {
                if let Err(e) = handler.set_property("pause", false) {
                    log::debug!("Play request rejected: {:?}", e);
                    send_media(event_tx, tag.generation, MediaEvent::PlayRejected)?;
                }
            }
            PlayerCommand::Pause => log_failure("pause", handler.set_property("pause", true)),
            PlayerCommand::Stop => log_failure("stop", handler.command(&["stop"])),
            PlayerCommand::SeekTo(seconds) => log_failure(
                "seek",
                handler.command(&["seek", &seconds.to_string(), "absolute"]),
            ),
            PlayerCommand::SetSpeed(speed) => {
                log_failure("speed", set(handler, "speed", &speed.to_string()))
            }
            PlayerCommand::SetAspectRatio(ratio) => {
                log_failure("aspect ratio", apply_aspect_ratio(handler, ratio))
            }
            PlayerCommand::SetVolume(volume) => {
                log_failure("volume", set(handler, "volume", &volume.to_string()))
            }
            PlayerCommand::SetBrightness(offset) => {
                log_failure("brightness", set(handler, "brightness", &offset.to_string()))
            }
            PlayerCommand::ToggleFullscreen => {
                log_failure("fullscreen", handler.command(&["cycle", "fullscreen"]))
            }
        }
    }
}

fn set(handler: &mut mpv::MpvHandler, property: &str, value: &str) -> MpvResult {
    handler.command(&["set", property, value])
}

/// Maps an [`AspectRatio`] onto MPV's scaling properties.
///
/// * `Fit` letterboxes, `Stretch` drops the aspect constraint, `Crop` zooms
///   until the window is filled, the fixed ratios override the source
///   aspect.
fn apply_aspect_ratio(handler: &mut mpv::MpvHandler, ratio: AspectRatio) -> MpvResult {
    let (keep_aspect, panscan, aspect_override) = match ratio {
        AspectRatio::Fit => ("yes", "0", "-1"),
        AspectRatio::Stretch => ("no", "0", "-1"),
        AspectRatio::Crop => ("yes", "1", "-1"),
        AspectRatio::Wide => ("yes", "0", "16:9"),
        AspectRatio::Standard => ("yes", "0", "4:3"),
    };

    set(handler, "keepaspect", keep_aspect)?;
    set(handler, "panscan", panscan)?;
    set(handler, "video-aspect-override", aspect_override)
}

fn log_failure(what: &str, result: MpvResult) {
    if let Err(e) = result {
        log::warn!("MPV {} command failed: {:?}", what, e);
    }
}

fn send_media(event_tx: &Sender<AppEvent>, generation: u64, event: MediaEvent) -> Result<()> {
    event_tx
        .send(AppEvent::Media { generation, event })
        .context("Failed to send media event")
}

/// Forwards an MPV event to the application, tagged with its load.
fn forward_event(tag: &mut LoadTag, mpv_event: mpv::Event, event_tx: &Sender<AppEvent>) -> Result<()> {
    match tag.translate(mpv_event) {
        Some(event) => send_media(event_tx, tag.generation, event),
        None => Ok(()),
    }
}
