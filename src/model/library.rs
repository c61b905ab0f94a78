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

//! The video library.
//!
//! Holds the flat list of admitted entries and the position of the entry
//! currently playing, if any. The library owns the locator registry, so an
//! entry's locator lives exactly as long as the entry does.

use std::{collections::HashSet, path::Path};

use crate::{
    error::PlayerError,
    model::{
        DiscoveredFile, EntryId, VideoEntry,
        grouping::FolderGroups,
        locator::{Locator, Locators},
    },
};

const VIDEO_MIME_PREFIX: &str = "video/";

/// Keeps only the files whose MIME type marks them as video.
pub(crate) fn retain_videos(batch: Vec<DiscoveredFile>) -> Vec<DiscoveredFile> {
    batch
        .into_iter()
        .filter(|f| f.mime_type.starts_with(VIDEO_MIME_PREFIX))
        .collect()
}

pub(crate) struct VideoLibrary {
    entries: Vec<VideoEntry>,
    ids: HashSet<EntryId>,
    current: Option<usize>,
    locators: Locators,
    fallback_folder: String,
}

impl VideoLibrary {
    pub(crate) fn new(fallback_folder: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            ids: HashSet::new(),
            current: None,
            locators: Locators::new(),
            fallback_folder: fallback_folder.into(),
        }
    }

    /// Admits a batch of discovered files, returning how many became entries.
    ///
    /// Non-video files are dropped, as are files already in the library.
    pub(crate) fn add_files(&mut self, batch: Vec<DiscoveredFile>) -> usize {
        let mut admitted = 0;

        for file in retain_videos(batch) {
            let id = EntryId::for_path(&file.path);
            if !self.ids.insert(id) {
                continue;
            }

            let locator = self.locators.create(file.path.clone());
            self.entries
                .push(VideoEntry::new(file, locator, &self.fallback_folder));
            admitted += 1;
        }

        admitted
    }

    pub(crate) fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn groups(&self) -> FolderGroups {
        FolderGroups::from_entries(&self.entries)
    }

    pub(crate) fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    #[cfg(test)]
    pub(crate) fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn current(&self) -> Option<&VideoEntry> {
        self.current.and_then(|i| self.entries.get(i))
    }

    /// Makes the entry at `index` current. Out of range requests are ignored.
    pub(crate) fn play_at(&mut self, index: usize) -> Option<&VideoEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.current = Some(index);
        self.entries.get(index)
    }

    pub(crate) fn back_to_library(&mut self) {
        self.current = None;
    }

    pub(crate) fn has_next(&self) -> bool {
        self.current.is_some_and(|i| i + 1 < self.entries.len())
    }

    pub(crate) fn has_previous(&self) -> bool {
        self.current.is_some_and(|i| i > 0)
    }

    /// Advances to the next entry, or returns `None` and leaves the current
    /// position unchanged at the end of the list.
    pub(crate) fn next(&mut self) -> Option<&VideoEntry> {
        if !self.has_next() {
            return None;
        }
        let index = self.current? + 1;
        self.play_at(index)
    }

    /// Steps back to the previous entry, or returns `None` and leaves the
    /// current position unchanged at the start of the list.
    pub(crate) fn previous(&mut self) -> Option<&VideoEntry> {
        if !self.has_previous() {
            return None;
        }
        let index = self.current? - 1;
        self.play_at(index)
    }

    pub(crate) fn resolve(&self, locator: Locator) -> Result<&Path, PlayerError> {
        self.locators.resolve(locator)
    }

    /// Evicts an entry and revokes its locator.
    ///
    /// The current position follows the entry it pointed at, or is cleared if
    /// that entry was the one removed.
    pub(crate) fn remove(&mut self, id: EntryId) -> bool {
        let Some(position) = self.position_of(id) else {
            return false;
        };

        let entry = self.entries.remove(position);
        self.ids.remove(&entry.id);
        self.locators.revoke(entry.locator);

        self.current = match self.current {
            Some(i) if i == position => None,
            Some(i) if i > position => Some(i - 1),
            other => other,
        };

        true
    }

    /// Evicts every entry, revoking all locators.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
        self.current = None;
        self.locators.revoke_all();
    }

    pub(crate) fn live_locators(&self) -> usize {
        self.locators.live_count()
    }
}
