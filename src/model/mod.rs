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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, a discovered
//! file and the video entry it becomes once admitted to the library, along
//! with the library itself, its folder grouping, and the player settings.

pub(crate) mod catalog;
pub(crate) mod grouping;
pub(crate) mod library;
pub(crate) mod locator;
pub(crate) mod settings;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use xxhash_rust::xxh3::xxh3_64;

use crate::{model::locator::Locator, util::format::format_size};

/// Stable identifier of a video entry, derived from its absolute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EntryId(u64);

impl EntryId {
    pub(crate) fn for_path(path: &Path) -> Self {
        Self(xxh3_64(path.as_os_str().as_encoded_bytes()))
    }
}

/// A file found on disk, before it has been admitted to the library.
#[derive(Debug, Clone)]
pub(crate) struct DiscoveredFile {
    pub(crate) path: PathBuf,
    /// Path relative to the parent of the selected root, `/` separated, so
    /// that it begins with the selected folder's own name.
    pub(crate) relative_path: String,
    pub(crate) mime_type: String,
    pub(crate) size: u64,
    pub(crate) modified: Option<DateTime<Local>>,
}

/// One video file admitted to the library.
#[derive(Debug, Clone)]
pub(crate) struct VideoEntry {
    pub(crate) id: EntryId,
    pub(crate) name: String,
    pub(crate) size: String,
    pub(crate) locator: Locator,
    pub(crate) mime_type: String,
    pub(crate) modified: Option<DateTime<Local>>,
    pub(crate) folder: String,
    pub(crate) relative_path: String,
}

impl VideoEntry {
    pub(crate) fn new(file: DiscoveredFile, locator: Locator, fallback_folder: &str) -> Self {
        let name = file
            .relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&file.relative_path)
            .to_string();

        Self {
            id: EntryId::for_path(&file.path),
            name,
            size: format_size(file.size),
            locator,
            folder: folder_name(&file.relative_path, fallback_folder),
            mime_type: file.mime_type,
            modified: file.modified,
            relative_path: file.relative_path,
        }
    }
}

/// Returns the second-to-last segment of a relative path, or `fallback` if
/// the path has no parent segment.
pub(crate) fn folder_name(relative_path: &str, fallback: &str) -> String {
    let segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 | 1 => fallback.to_string(),
        n => segments[n - 2].to_string(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn discovered(relative_path: &str, mime_type: &str) -> DiscoveredFile {
        DiscoveredFile {
            path: PathBuf::from("/media").join(relative_path),
            relative_path: relative_path.to_string(),
            mime_type: mime_type.to_string(),
            size: 3 * 1024 * 1024,
            modified: None,
        }
    }

    pub(crate) fn video(relative_path: &str) -> DiscoveredFile {
        discovered(relative_path, "video/mp4")
    }
}
