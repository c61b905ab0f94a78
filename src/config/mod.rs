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

//! Application configuration.
//!
//! This module manages the application configuration file. Nothing about
//! the library or the player is written back, the file only supplies
//! startup locations and tuning.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "vidui";

const LOG_FILE: &str = "vidui.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Locations scanned at startup.
    pub media_dirs: Vec<String>,
    /// Folder label for files selected without a parent folder.
    pub fallback_folder: String,
    pub controls_timeout_ms: u64,
    pub seek_step_secs: f64,
    pub volume_step: f32,
    pub brightness_step: i32,
    /// MPV `vo` override, MPV's own choice when unset.
    pub video_output: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            media_dirs: vec![],
            fallback_folder: "Unsorted".to_string(),
            controls_timeout_ms: 3000,
            seek_step_secs: 10.0,
            volume_step: 0.05,
            brightness_step: 10,
            video_output: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn controls_timeout(&self) -> Duration {
        Duration::from_millis(self.controls_timeout_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Location of the log file, alongside the configuration file.
pub fn log_path() -> Option<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|p| p.parent().map(|dir| dir.join(LOG_FILE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.controls_timeout(), Duration::from_secs(3));
        assert_eq!(config.fallback_folder, "Unsorted");
        assert!(config.media_dirs.is_empty());
    }
}
