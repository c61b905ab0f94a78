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

//! Playback and on-screen control state for the bound entry.
//!
//! The controller is a set of independent flags rather than a state
//! machine: playing or paused, locked or unlocked, controls shown or hidden,
//! and an optional terminal error. It drives a [`MediaElement`] and is fed
//! media events and clock ticks by the application.
//!
//! While locked, every control apart from the lock toggle is inert. While an
//! error is active, only going back to the library is possible.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use crate::{
    error::PlayerError,
    model::{
        VideoEntry,
        settings::{Brightness, PlayerSettings, Volume},
    },
    player::{MediaElement, MediaEvent, PlayerState, timer::IdleTimer},
};

/// Which neighbours of the bound entry exist in the library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Navigation {
    pub(crate) has_next: bool,
    pub(crate) has_previous: bool,
}

pub(crate) struct PlayerController {
    entry: Option<VideoEntry>,
    generation: u64,
    playing: bool,
    ended: bool,
    error: Option<String>,
    controls_visible: bool,
    current_time: f64,
    duration: Option<f64>,
    settings: PlayerSettings,
    volume: Volume,
    brightness: Brightness,
    navigation: Navigation,
    idle_timer: IdleTimer,
}

impl PlayerController {
    pub(crate) fn new(controls_timeout: Duration) -> Self {
        Self {
            entry: None,
            generation: 0,
            playing: false,
            ended: false,
            error: None,
            controls_visible: true,
            current_time: 0.0,
            duration: None,
            settings: PlayerSettings::default(),
            volume: Volume::default(),
            brightness: Brightness::default(),
            navigation: Navigation::default(),
            idle_timer: IdleTimer::new(controls_timeout),
        }
    }

    /// Binds a new entry, superseding whatever was bound before.
    ///
    /// Clears any error, stops the current media, resets settings and
    /// progress, loads `source` from the start and attempts to auto-play. A
    /// rejected play request leaves the player paused. A source that cannot
    /// be resolved or loaded puts the player in the error state.
    pub(crate) fn bind(
        &mut self,
        entry: &VideoEntry,
        source: Result<&Path, PlayerError>,
        navigation: Navigation,
        media: &mut impl MediaElement,
        now: Instant,
    ) {
        self.generation += 1;
        self.entry = Some(entry.clone());
        self.error = None;
        self.playing = false;
        self.ended = false;
        self.current_time = 0.0;
        self.duration = None;
        self.settings = PlayerSettings::default();
        self.volume = Volume::default();
        self.brightness = Brightness::default();
        self.navigation = navigation;
        self.show_controls(now);

        log::info!("Binding {} ({})", entry.relative_path, entry.locator);

        if let Err(e) = self.load(source, media) {
            self.fail(e.to_string());
            return;
        }

        match media.play() {
            Ok(()) => self.playing = true,
            Err(e) => log::debug!("Auto-play rejected, staying paused: {}", e),
        }
    }

    fn load(
        &self,
        source: Result<&Path, PlayerError>,
        media: &mut impl MediaElement,
    ) -> Result<(), PlayerError> {
        media.stop()?;
        media.load(source?, self.generation)?;
        media.set_speed(self.settings.speed)?;
        media.set_aspect_ratio(self.settings.aspect_ratio)?;
        media.set_volume(self.volume)?;
        media.set_brightness(self.brightness)
    }

    /// Stops playback and forgets the bound entry.
    pub(crate) fn unbind(&mut self, media: &mut impl MediaElement) {
        if let Err(e) = media.stop() {
            log::warn!("Failed to stop playback: {}", e);
        }
        self.generation += 1;
        self.entry = None;
        self.playing = false;
        self.ended = false;
        self.error = None;
        self.settings.locked = false;
        self.idle_timer.cancel();
        self.controls_visible = true;
    }

    fn fail(&mut self, message: String) {
        log::warn!("Playback failed: {}", message);
        self.error = Some(message);
        self.playing = false;
        self.controls_visible = true;
        self.idle_timer.cancel();
    }

    fn show_controls(&mut self, now: Instant) {
        self.controls_visible = true;
        self.idle_timer.reschedule(now);
    }

    /// Registers user activity: shows the controls and restarts the
    /// inactivity timer.
    pub(crate) fn interact(&mut self, now: Instant) {
        if self.entry.is_some() && self.error.is_none() {
            self.show_controls(now);
        }
    }

    /// Advances the inactivity timer, hiding the controls once it fires if
    /// playing, unlocked and error free.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.idle_timer.fire(now) && self.playing && !self.settings.locked && self.error.is_none() {
            self.controls_visible = false;
        }
    }

    fn is_inert(&self) -> bool {
        self.entry.is_none() || self.error.is_some() || self.settings.locked
    }

    fn apply(what: &str, result: Result<(), PlayerError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to {}: {}", what, e);
                false
            }
        }
    }

    /// Pauses or resumes playback. Resuming after the end of the media
    /// restarts it from the beginning.
    pub(crate) fn toggle_play(&mut self, media: &mut impl MediaElement, now: Instant) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);

        if self.playing {
            if Self::apply("pause", media.pause()) {
                self.playing = false;
            }
        } else {
            if self.ended && Self::apply("rewind", media.seek_to(0.0)) {
                self.ended = false;
                self.current_time = 0.0;
            }
            match media.play() {
                Ok(()) => self.playing = true,
                Err(e) => log::debug!("Play request rejected, staying paused: {}", e),
            }
        }
        true
    }

    fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Seeks to `percent` (0-100) of the reported duration.
    ///
    /// Ignored while locked, on error, or while the duration is unknown.
    pub(crate) fn seek_percent(
        &mut self,
        percent: f64,
        media: &mut impl MediaElement,
        now: Instant,
    ) -> bool {
        if self.is_inert() || !percent.is_finite() {
            return false;
        }
        let Some(duration) = self.known_duration() else {
            return false;
        };

        self.seek_to(duration * percent.clamp(0.0, 100.0) / 100.0, media, now)
    }

    /// Seeks `delta` seconds from the current position, within the media.
    pub(crate) fn seek_relative(
        &mut self,
        delta: f64,
        media: &mut impl MediaElement,
        now: Instant,
    ) -> bool {
        if self.is_inert() || !delta.is_finite() {
            return false;
        }
        let Some(duration) = self.known_duration() else {
            return false;
        };

        self.seek_to((self.current_time + delta).clamp(0.0, duration), media, now)
    }

    fn seek_to(&mut self, target: f64, media: &mut impl MediaElement, now: Instant) -> bool {
        self.show_controls(now);
        if Self::apply("seek", media.seek_to(target)) {
            self.current_time = target;
            self.ended = false;
        }
        true
    }

    pub(crate) fn cycle_aspect_ratio(&mut self, media: &mut impl MediaElement, now: Instant) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);

        let ratio = self.settings.aspect_ratio.next();
        if Self::apply("change aspect ratio", media.set_aspect_ratio(ratio)) {
            self.settings.aspect_ratio = ratio;
        }
        true
    }

    pub(crate) fn cycle_speed(&mut self, media: &mut impl MediaElement, now: Instant) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);

        let speed = self.settings.speed.next();
        if Self::apply("change speed", media.set_speed(speed)) {
            self.settings.speed = speed;
        }
        true
    }

    pub(crate) fn adjust_volume(
        &mut self,
        delta: f32,
        media: &mut impl MediaElement,
        now: Instant,
    ) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);

        let volume = self.volume.adjust(delta);
        if Self::apply("change volume", media.set_volume(volume)) {
            self.volume = volume;
        }
        true
    }

    pub(crate) fn adjust_brightness(
        &mut self,
        delta: i32,
        media: &mut impl MediaElement,
        now: Instant,
    ) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);

        let brightness = self.brightness.adjust(delta);
        if Self::apply("change brightness", media.set_brightness(brightness)) {
            self.brightness = brightness;
        }
        true
    }

    pub(crate) fn toggle_fullscreen(&mut self, media: &mut impl MediaElement, now: Instant) -> bool {
        if self.is_inert() {
            return false;
        }
        self.show_controls(now);
        Self::apply("toggle fullscreen", media.toggle_fullscreen())
    }

    /// Locks or unlocks the controls. Unavailable on error.
    pub(crate) fn toggle_lock(&mut self, now: Instant) -> bool {
        if self.entry.is_none() || self.error.is_some() {
            return false;
        }
        self.settings.locked = !self.settings.locked;
        self.show_controls(now);
        true
    }

    /// Updates the neighbour flags after the library has changed.
    pub(crate) fn set_navigation(&mut self, navigation: Navigation) {
        self.navigation = navigation;
    }

    pub(crate) fn can_go_back(&self) -> bool {
        self.entry.is_some() && (self.error.is_some() || !self.settings.locked)
    }

    pub(crate) fn can_go_next(&self) -> bool {
        !self.is_inert() && self.navigation.has_next
    }

    pub(crate) fn can_go_previous(&self) -> bool {
        !self.is_inert() && self.navigation.has_previous
    }

    /// Applies a media event, ignoring events from an earlier load.
    ///
    /// Returns `true` if the event belonged to the current load.
    pub(crate) fn on_media_event(&mut self, generation: u64, event: MediaEvent, now: Instant) -> bool {
        if generation != self.generation || self.entry.is_none() {
            log::trace!("Ignoring stale media event {:?}", event);
            return false;
        }

        match event {
            MediaEvent::MetadataLoaded(duration) => {
                self.duration = Some(duration).filter(|d| d.is_finite() && *d > 0.0);
            }
            MediaEvent::TimeUpdate(seconds) => {
                if seconds.is_finite() && seconds >= 0.0 {
                    self.current_time = seconds;
                }
            }
            MediaEvent::Ended => {
                self.playing = false;
                self.ended = true;
                if let Some(duration) = self.known_duration() {
                    self.current_time = duration;
                }
                self.show_controls(now);
            }
            MediaEvent::Failed(message) => self.fail(message),
            MediaEvent::PlayRejected => {
                log::debug!("Play request rejected by backend, staying paused");
                self.playing = false;
                self.show_controls(now);
            }
        }
        true
    }

    /// The load generation that media events must carry to be applied.
    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn entry(&self) -> Option<&VideoEntry> {
        self.entry.as_ref()
    }

    pub(crate) fn state(&self) -> PlayerState {
        if self.error.is_some() {
            PlayerState::Failed
        } else if self.entry.is_none() {
            PlayerState::Stopped
        } else if self.playing {
            PlayerState::Playing
        } else {
            PlayerState::Paused
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.settings.locked
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    pub(crate) fn current_time(&self) -> f64 {
        self.current_time
    }

    pub(crate) fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Playback position as a percentage of the duration, 0 when unknown.
    pub(crate) fn progress_percent(&self) -> f64 {
        self.known_duration()
            .map(|d| (self.current_time / d * 100.0).clamp(0.0, 100.0))
            .unwrap_or(0.0)
    }

    pub(crate) fn settings(&self) -> PlayerSettings {
        self.settings
    }

    pub(crate) fn volume(&self) -> Volume {
        self.volume
    }

    pub(crate) fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub(crate) fn navigation(&self) -> Navigation {
        self.navigation
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::model::{
        fixtures::video,
        locator::Locators,
        settings::{AspectRatio, PlaybackSpeed},
    };

    const TIMEOUT: Duration = Duration::from_secs(3);

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load(PathBuf, u64),
        Play,
        Pause,
        Stop,
        SeekTo(f64),
        Speed(PlaybackSpeed),
        Aspect(AspectRatio),
        Volume(f32),
        Brightness(u16),
        Fullscreen,
    }

    #[derive(Default)]
    struct FakeMedia {
        calls: Vec<Call>,
        reject_play: bool,
        fail_load: bool,
    }

    impl FakeMedia {
        fn take(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }
    }

    impl MediaElement for FakeMedia {
        fn load(&mut self, source: &Path, generation: u64) -> Result<(), PlayerError> {
            if self.fail_load {
                return Err(PlayerError::Backend("cannot open".to_string()));
            }
            self.calls.push(Call::Load(source.to_path_buf(), generation));
            Ok(())
        }

        fn play(&mut self) -> Result<(), PlayerError> {
            self.calls.push(Call::Play);
            if self.reject_play {
                Err(PlayerError::Backend("autoplay blocked".to_string()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) -> Result<(), PlayerError> {
            self.calls.push(Call::Pause);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), PlayerError> {
            self.calls.push(Call::Stop);
            Ok(())
        }

        fn seek_to(&mut self, seconds: f64) -> Result<(), PlayerError> {
            self.calls.push(Call::SeekTo(seconds));
            Ok(())
        }

        fn set_speed(&mut self, speed: PlaybackSpeed) -> Result<(), PlayerError> {
            self.calls.push(Call::Speed(speed));
            Ok(())
        }

        fn set_aspect_ratio(&mut self, ratio: AspectRatio) -> Result<(), PlayerError> {
            self.calls.push(Call::Aspect(ratio));
            Ok(())
        }

        fn set_volume(&mut self, volume: Volume) -> Result<(), PlayerError> {
            self.calls.push(Call::Volume(volume.value()));
            Ok(())
        }

        fn set_brightness(&mut self, brightness: Brightness) -> Result<(), PlayerError> {
            self.calls.push(Call::Brightness(brightness.percent()));
            Ok(())
        }

        fn toggle_fullscreen(&mut self) -> Result<(), PlayerError> {
            self.calls.push(Call::Fullscreen);
            Ok(())
        }
    }

    struct Harness {
        controller: PlayerController,
        media: FakeMedia,
        locators: Locators,
        start: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                controller: PlayerController::new(TIMEOUT),
                media: FakeMedia::default(),
                locators: Locators::new(),
                start: Instant::now(),
            }
        }

        fn entry(&mut self, relative_path: &str) -> VideoEntry {
            let file = video(relative_path);
            let locator = self.locators.create(file.path.clone());
            VideoEntry::new(file, locator, "Unsorted")
        }

        fn bind(&mut self, relative_path: &str) -> VideoEntry {
            let entry = self.entry(relative_path);
            let source = self.locators.resolve(entry.locator);
            self.controller.bind(
                &entry,
                source,
                Navigation {
                    has_next: true,
                    has_previous: false,
                },
                &mut self.media,
                self.start,
            );
            entry
        }

        fn at(&self, secs: u64) -> Instant {
            self.start + Duration::from_secs(secs)
        }

        fn event(&mut self, event: MediaEvent) -> bool {
            let generation = self.controller.generation;
            self.controller.on_media_event(generation, event, self.start)
        }
    }

    #[test]
    fn bind_loads_from_start_and_plays() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");

        assert_eq!(
            h.media.take(),
            [
                Call::Stop,
                Call::Load(PathBuf::from("/media/M/a.mp4"), 1),
                Call::Speed(PlaybackSpeed::Normal),
                Call::Aspect(AspectRatio::Fit),
                Call::Volume(1.0),
                Call::Brightness(100),
                Call::Play,
            ]
        );
        assert!(h.controller.is_playing());
        assert_eq!(h.controller.state(), PlayerState::Playing);
        assert_eq!(h.controller.current_time(), 0.0);
        assert!(h.controller.error().is_none());
        assert!(h.controller.controls_visible());
    }

    #[test]
    fn rejected_autoplay_is_paused_not_an_error() {
        let mut h = Harness::new();
        h.media.reject_play = true;
        h.bind("M/a.mp4");

        assert!(!h.controller.is_playing());
        assert!(h.controller.error().is_none());
        assert_eq!(h.controller.state(), PlayerState::Paused);
    }

    #[test]
    fn asynchronous_play_rejection_pauses() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        assert!(h.event(MediaEvent::PlayRejected));

        assert!(!h.controller.is_playing());
        assert!(h.controller.error().is_none());
    }

    #[test]
    fn bind_clears_error_and_resets_settings() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(100.0));
        h.event(MediaEvent::TimeUpdate(42.0));
        h.controller.cycle_speed(&mut h.media, h.start);
        h.controller.cycle_aspect_ratio(&mut h.media, h.start);
        h.controller.adjust_volume(-0.5, &mut h.media, h.start);
        h.event(MediaEvent::Failed("decoder error".to_string()));
        assert!(h.controller.error().is_some());

        h.bind("M/b.mp4");

        assert!(h.controller.error().is_none());
        assert_eq!(h.controller.settings(), PlayerSettings::default());
        assert_eq!(h.controller.volume(), Volume::default());
        assert_eq!(h.controller.current_time(), 0.0);
        assert_eq!(h.controller.duration(), None);
        assert!(h.controller.is_playing());
        assert_eq!(h.controller.entry().unwrap().name, "b.mp4");
    }

    #[test]
    fn bind_resets_lock() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.controller.toggle_lock(h.start);
        h.bind("M/b.mp4");

        assert!(!h.controller.is_locked());
    }

    #[test]
    fn revoked_source_is_a_load_error() {
        let mut h = Harness::new();
        let entry = h.entry("M/a.mp4");
        h.locators.revoke(entry.locator);
        let source = h.locators.resolve(entry.locator);
        h.controller
            .bind(&entry, source, Navigation::default(), &mut h.media, h.start);

        assert!(h.controller.error().unwrap().contains("revoked"));
        assert!(!h.controller.is_playing());
        assert!(!h.media.calls.contains(&Call::Play));
    }

    #[test]
    fn failing_load_is_an_error() {
        let mut h = Harness::new();
        h.media.fail_load = true;
        h.bind("M/a.mp4");

        assert_eq!(h.controller.state(), PlayerState::Failed);
        assert!(h.controller.can_go_back());
    }

    #[test]
    fn end_of_media_pauses_without_error() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(60.0));
        h.event(MediaEvent::Ended);

        assert!(!h.controller.is_playing());
        assert!(h.controller.error().is_none());
        assert_eq!(h.controller.progress_percent(), 100.0);
    }

    #[test]
    fn play_after_end_of_media_restarts_from_zero() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(60.0));
        h.event(MediaEvent::Ended);
        h.media.take();

        assert!(h.controller.toggle_play(&mut h.media, h.start));

        assert_eq!(h.media.take(), [Call::SeekTo(0.0), Call::Play]);
        assert!(h.controller.is_playing());
        assert_eq!(h.controller.current_time(), 0.0);
        assert_eq!(h.controller.progress_percent(), 0.0);

        // Only the first resume after the end rewinds.
        h.controller.toggle_play(&mut h.media, h.start);
        h.controller.toggle_play(&mut h.media, h.start);
        assert_eq!(h.media.take(), [Call::Pause, Call::Play]);
    }

    #[test]
    fn seeking_after_end_of_media_resumes_from_there() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(60.0));
        h.event(MediaEvent::Ended);
        h.controller.seek_percent(50.0, &mut h.media, h.start);
        h.media.take();

        h.controller.toggle_play(&mut h.media, h.start);

        assert_eq!(h.media.take(), [Call::Play]);
        assert_eq!(h.controller.current_time(), 30.0);
    }

    #[test]
    fn toggle_play_pauses_and_resumes() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.media.take();

        assert!(h.controller.toggle_play(&mut h.media, h.start));
        assert!(!h.controller.is_playing());
        assert!(h.controller.toggle_play(&mut h.media, h.start));
        assert!(h.controller.is_playing());
        assert_eq!(h.media.take(), [Call::Pause, Call::Play]);
    }

    #[test]
    fn seek_percent_uses_duration() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(200.0));
        h.media.take();

        assert!(h.controller.seek_percent(25.0, &mut h.media, h.start));
        assert!(h.controller.seek_percent(150.0, &mut h.media, h.start));
        assert_eq!(h.media.take(), [Call::SeekTo(50.0), Call::SeekTo(200.0)]);
        assert_eq!(h.controller.current_time(), 200.0);
    }

    #[test]
    fn seek_is_ignored_without_duration() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.media.take();

        assert!(!h.controller.seek_percent(50.0, &mut h.media, h.start));
        h.event(MediaEvent::MetadataLoaded(f64::NAN));
        assert!(!h.controller.seek_percent(50.0, &mut h.media, h.start));
        h.event(MediaEvent::MetadataLoaded(0.0));
        assert!(!h.controller.seek_relative(5.0, &mut h.media, h.start));
        assert!(h.media.take().is_empty());
    }

    #[test]
    fn seek_relative_is_clamped() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(30.0));
        h.event(MediaEvent::TimeUpdate(25.0));
        h.media.take();

        h.controller.seek_relative(10.0, &mut h.media, h.start);
        h.controller.seek_relative(-100.0, &mut h.media, h.start);
        assert_eq!(h.media.take(), [Call::SeekTo(30.0), Call::SeekTo(0.0)]);
    }

    #[test]
    fn cycling_five_times_returns_to_start() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");

        for _ in 0..5 {
            h.controller.cycle_aspect_ratio(&mut h.media, h.start);
            h.controller.cycle_speed(&mut h.media, h.start);
        }

        assert_eq!(h.controller.settings().aspect_ratio, AspectRatio::Fit);
        assert_eq!(h.controller.settings().speed, PlaybackSpeed::Normal);
    }

    #[test]
    fn locked_controls_have_no_effect() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::MetadataLoaded(100.0));
        assert!(h.controller.toggle_lock(h.start));
        h.media.take();
        let settings = h.controller.settings();

        assert!(!h.controller.seek_percent(50.0, &mut h.media, h.start));
        assert!(!h.controller.seek_relative(10.0, &mut h.media, h.start));
        assert!(!h.controller.cycle_aspect_ratio(&mut h.media, h.start));
        assert!(!h.controller.cycle_speed(&mut h.media, h.start));
        assert!(!h.controller.toggle_play(&mut h.media, h.start));
        assert!(!h.controller.adjust_volume(0.1, &mut h.media, h.start));
        assert!(!h.controller.adjust_brightness(10, &mut h.media, h.start));
        assert!(!h.controller.toggle_fullscreen(&mut h.media, h.start));

        assert!(h.media.take().is_empty());
        assert_eq!(h.controller.settings(), settings);
        assert_eq!(h.controller.current_time(), 0.0);
        assert!(h.controller.is_playing());
        assert!(!h.controller.can_go_back());
        assert!(!h.controller.can_go_next());

        assert!(h.controller.toggle_lock(h.start));
        assert!(h.controller.cycle_speed(&mut h.media, h.start));
        assert!(h.controller.can_go_back());
    }

    #[test]
    fn error_leaves_only_back() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.event(MediaEvent::Failed("unsupported codec".to_string()));
        h.media.take();

        assert!(!h.controller.toggle_play(&mut h.media, h.start));
        assert!(!h.controller.toggle_lock(h.start));
        assert!(!h.controller.can_go_next());
        assert!(h.controller.can_go_back());
        assert!(h.media.take().is_empty());
        assert_eq!(h.controller.error(), Some("unsupported codec"));
    }

    #[test]
    fn navigation_flags_follow_binding() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");

        assert!(h.controller.can_go_next());
        assert!(!h.controller.can_go_previous());
        assert_eq!(
            h.controller.navigation(),
            Navigation {
                has_next: true,
                has_previous: false
            }
        );
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        let old = h.controller.generation;
        h.bind("M/b.mp4");

        assert!(!h.controller.on_media_event(old, MediaEvent::Failed("late".to_string()), h.start));
        assert!(!h.controller.on_media_event(old, MediaEvent::Ended, h.start));
        assert!(h.controller.error().is_none());
        assert!(h.controller.is_playing());
    }

    #[test]
    fn controls_hide_after_inactivity_while_playing() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");

        h.controller.tick(h.at(2));
        assert!(h.controller.controls_visible());
        h.controller.tick(h.at(3));
        assert!(!h.controller.controls_visible());

        h.controller.interact(h.at(4));
        assert!(h.controller.controls_visible());
        h.controller.tick(h.at(6));
        assert!(h.controller.controls_visible());
        h.controller.tick(h.at(7));
        assert!(!h.controller.controls_visible());
    }

    #[test]
    fn controls_stay_visible_when_paused_locked_or_failed() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.controller.toggle_play(&mut h.media, h.start);
        h.controller.tick(h.at(10));
        assert!(h.controller.controls_visible());

        h.bind("M/b.mp4");
        h.controller.toggle_lock(h.start);
        h.controller.tick(h.at(10));
        assert!(h.controller.controls_visible());

        h.bind("M/c.mp4");
        h.event(MediaEvent::Failed("gone".to_string()));
        h.controller.tick(h.at(10));
        assert!(h.controller.controls_visible());
    }

    #[test]
    fn unbind_stops_and_ignores_late_events() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        let generation = h.controller.generation;
        h.media.take();

        h.controller.unbind(&mut h.media);

        assert_eq!(h.media.take(), [Call::Stop]);
        assert_eq!(h.controller.state(), PlayerState::Stopped);
        assert!(!h.controller.on_media_event(generation, MediaEvent::Ended, h.start));
    }

    #[test]
    fn volume_and_brightness_are_applied() {
        let mut h = Harness::new();
        h.bind("M/a.mp4");
        h.media.take();

        h.controller.adjust_volume(-0.25, &mut h.media, h.start);
        h.controller.adjust_brightness(-30, &mut h.media, h.start);

        assert_eq!(h.media.take(), [Call::Volume(0.75), Call::Brightness(70)]);
        assert_eq!(h.controller.brightness().percent(), 70);
    }
}
