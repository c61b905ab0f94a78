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

//! Player settings.
//!
//! Aspect ratio and playback speed are fixed cyclic orderings, each with a
//! pure successor function. Volume and brightness are clamped newtypes.

use std::fmt;

/// How the video is fitted to the player surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum AspectRatio {
    #[default]
    Fit,
    Stretch,
    Crop,
    Wide,
    Standard,
}

impl AspectRatio {
    pub(crate) const ALL: [AspectRatio; 5] = [
        AspectRatio::Fit,
        AspectRatio::Stretch,
        AspectRatio::Crop,
        AspectRatio::Wide,
        AspectRatio::Standard,
    ];

    /// Returns the next mode in the cycle, wrapping back to `Fit`.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        match self {
            AspectRatio::Fit => AspectRatio::Stretch,
            AspectRatio::Stretch => AspectRatio::Crop,
            AspectRatio::Crop => AspectRatio::Wide,
            AspectRatio::Wide => AspectRatio::Standard,
            AspectRatio::Standard => AspectRatio::Fit,
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            AspectRatio::Fit => "Fit",
            AspectRatio::Stretch => "Stretch",
            AspectRatio::Crop => "Crop",
            AspectRatio::Wide => "16:9",
            AspectRatio::Standard => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Playback rate, one of a small set of presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlaybackSpeed {
    Half,
    #[default]
    Normal,
    OneAndAQuarter,
    OneAndAHalf,
    Double,
}

impl PlaybackSpeed {
    pub(crate) const ALL: [PlaybackSpeed; 5] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndAQuarter,
        PlaybackSpeed::OneAndAHalf,
        PlaybackSpeed::Double,
    ];

    /// Returns the next preset, wrapping from 2x back to 0.5x.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        match self {
            PlaybackSpeed::Half => PlaybackSpeed::Normal,
            PlaybackSpeed::Normal => PlaybackSpeed::OneAndAQuarter,
            PlaybackSpeed::OneAndAQuarter => PlaybackSpeed::OneAndAHalf,
            PlaybackSpeed::OneAndAHalf => PlaybackSpeed::Double,
            PlaybackSpeed::Double => PlaybackSpeed::Half,
        }
    }

    pub(crate) const fn value(self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndAQuarter => 1.25,
            PlaybackSpeed::OneAndAHalf => 1.5,
            PlaybackSpeed::Double => 2.0,
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.value())
    }
}

/// Settings owned by the player, reset whenever a new entry is bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PlayerSettings {
    pub(crate) speed: PlaybackSpeed,
    pub(crate) aspect_ratio: AspectRatio,
    pub(crate) locked: bool,
}

/// Output volume, 0.0 (silent) to 1.0 (full).
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Volume(f32);

impl Volume {
    pub(crate) const MIN: f32 = 0.0;
    pub(crate) const MAX: f32 = 1.0;

    #[must_use]
    pub(crate) fn new(volume: f32) -> Self {
        Self(volume.clamp(Self::MIN, Self::MAX))
    }

    pub(crate) fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub(crate) fn adjust(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Volume on the 0-100 scale used by the playback backend.
    pub(crate) fn percent(self) -> f64 {
        (f64::from(self.0) * 100.0).round()
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

/// Brightness of the player surface as a percentage, 100 being unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Brightness(u16);

impl Brightness {
    pub(crate) const MAX: u16 = 200;

    #[must_use]
    pub(crate) fn new(percent: u16) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub(crate) fn percent(self) -> u16 {
        self.0
    }

    #[must_use]
    pub(crate) fn adjust(self, delta: i32) -> Self {
        let value = (i32::from(self.0) + delta).clamp(0, i32::from(Self::MAX));
        Self(value as u16)
    }

    /// Equaliser offset in the backend's -100..=100 range, 0 being unchanged.
    pub(crate) fn equaliser_offset(self) -> i64 {
        i64::from(self.0) - 100
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_cycles_in_order() {
        let mut ratio = AspectRatio::Fit;
        let mut seen = vec![];
        for _ in 0..5 {
            seen.push(ratio);
            ratio = ratio.next();
        }

        assert_eq!(seen, AspectRatio::ALL);
        assert_eq!(ratio, AspectRatio::Fit);
    }

    #[test]
    fn every_aspect_ratio_returns_after_five_steps() {
        for start in AspectRatio::ALL {
            let end = (0..5).fold(start, |r, _| r.next());
            assert_eq!(end, start);
        }
    }

    #[test]
    fn speed_cycles_in_order_and_wraps() {
        let values: Vec<f64> = PlaybackSpeed::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, [0.5, 1.0, 1.25, 1.5, 2.0]);

        assert_eq!(PlaybackSpeed::Double.next(), PlaybackSpeed::Half);
        for start in PlaybackSpeed::ALL {
            let end = (0..5).fold(start, |s, _| s.next());
            assert_eq!(end, start);
        }
    }

    #[test]
    fn defaults_are_normal_speed_fit_unlocked() {
        let settings = PlayerSettings::default();
        assert_eq!(settings.speed, PlaybackSpeed::Normal);
        assert_eq!(settings.aspect_ratio, AspectRatio::Fit);
        assert!(!settings.locked);
    }

    #[test]
    fn labels() {
        assert_eq!(AspectRatio::Wide.to_string(), "16:9");
        assert_eq!(AspectRatio::Standard.to_string(), "4:3");
        assert_eq!(PlaybackSpeed::OneAndAQuarter.to_string(), "1.25x");
        assert_eq!(PlaybackSpeed::Normal.to_string(), "1x");
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(Volume::new(2.0).value(), 1.0);
        assert_eq!(Volume::new(-1.0).value(), 0.0);
        assert_eq!(Volume::default().adjust(-0.25).percent(), 75.0);
    }

    #[test]
    fn brightness_is_clamped_and_offset() {
        assert_eq!(Brightness::default().equaliser_offset(), 0);
        assert_eq!(Brightness::new(500).percent(), 200);
        assert_eq!(Brightness::new(10).adjust(-50).percent(), 0);
        assert_eq!(Brightness::new(0).equaliser_offset(), -100);
        assert_eq!(Brightness::new(190).adjust(50).equaliser_offset(), 100);
    }
}
