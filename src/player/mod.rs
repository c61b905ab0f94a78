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

//! Video playback control and state management.
//!
//! This module provides the [`MediaElement`] seam between the player logic
//! and the playback backend, and the high-level [`VideoPlayer`] handle that
//! implements it. `VideoPlayer` manages a background worker thread that
//! interfaces with the underlying video library (MPV), ensuring that heavy
//! playback operations do not block the main application thread.
//!
//! The playback and UI state for the bound entry lives in
//! [`controller::PlayerController`], which only ever talks to a
//! [`MediaElement`].

pub(crate) mod commands;
pub(crate) mod controller;
pub(crate) mod timer;

use std::{
    path::{Path, PathBuf},
    sync::mpsc,
};

use crate::{
    actions::events::AppEvent,
    error::PlayerError,
    model::settings::{AspectRatio, Brightness, PlaybackSpeed, Volume},
    player::commands::PlayerCommand,
};

/// Represents the current playback status of the bound entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
    Failed,
}

/// Notifications from the playback backend about the loaded media.
///
/// Each is delivered tagged with the load generation it belongs to, see
/// [`AppEvent::Media`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MediaEvent {
    MetadataLoaded(f64),
    TimeUpdate(f64),
    Ended,
    Failed(String),
    PlayRejected,
}

/// The operations the player needs from a playback backend.
pub(crate) trait MediaElement {
    /// Replaces the current media with `source` and rewinds to the start.
    ///
    /// Events produced for this media carry `generation`.
    fn load(&mut self, source: &Path, generation: u64) -> Result<(), PlayerError>;
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn stop(&mut self) -> Result<(), PlayerError>;
    fn seek_to(&mut self, seconds: f64) -> Result<(), PlayerError>;
    fn set_speed(&mut self, speed: PlaybackSpeed) -> Result<(), PlayerError>;
    fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<(), PlayerError>;
    fn set_volume(&mut self, volume: Volume) -> Result<(), PlayerError>;
    fn set_brightness(&mut self, brightness: Brightness) -> Result<(), PlayerError>;
    fn toggle_fullscreen(&mut self) -> Result<(), PlayerError>;
}

/// A handle to the video playback engine.
///
/// This struct acts as a command proxy; it does not perform any decoding
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct VideoPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<PlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the player worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `video_output` - Optional MPV `vo` override.
    /// * `event_tx` - A channel to send application-level events (like
    ///   progress updates or errors) back to the main event loop.
    pub(crate) fn new(video_output: Option<String>, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();

        commands::spawn_player_worker(video_output, command_rx, event_tx);

        Self { command_tx }
    }

    /// A player without a worker, commands queue up on the returned receiver.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::Receiver<PlayerCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (Self { command_tx }, command_rx)
    }

    fn send(&self, command: PlayerCommand) -> Result<(), PlayerError> {
        self.command_tx
            .send(command)
            .map_err(|_| PlayerError::WorkerGone)
    }
}

impl MediaElement for VideoPlayer {
    fn load(&mut self, source: &Path, generation: u64) -> Result<(), PlayerError> {
        if !source.is_file() {
            return Err(PlayerError::Backend(format!(
                "{} is no longer available",
                source.display()
            )));
        }

        self.send(PlayerCommand::Load {
            path: PathBuf::from(source),
            generation,
        })
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Pause)
    }

    fn stop(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::Stop)
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SeekTo(seconds))
    }

    fn set_speed(&mut self, speed: PlaybackSpeed) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SetSpeed(speed.value()))
    }

    fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SetAspectRatio(ratio))
    }

    fn set_volume(&mut self, volume: Volume) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SetVolume(volume.percent()))
    }

    fn set_brightness(&mut self, brightness: Brightness) -> Result<(), PlayerError> {
        self.send(PlayerCommand::SetBrightness(brightness.equaliser_offset()))
    }

    fn toggle_fullscreen(&mut self) -> Result<(), PlayerError> {
        self.send(PlayerCommand::ToggleFullscreen)
    }
}
