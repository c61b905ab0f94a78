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

//! Library browser state management.
//!
//! This module provides state for the library view: the folder grouping of
//! the library, the folder drilled into (if any), and the list cursors for
//! the folder and file panes.

use ratatui::widgets::ListState;

use crate::model::{
    EntryId, VideoEntry,
    grouping::{FolderGroup, FolderGroups},
    library::VideoLibrary,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum LibraryPane {
    #[default]
    Folders,
    Files,
}

#[derive(Default)]
pub(crate) struct LibraryBrowser {
    groups: FolderGroups,
    selected_folder: Option<String>,

    pub(crate) folders_state: ListState,
    pub(crate) files_state: ListState,
}

impl LibraryBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Regroups after the library has changed, keeping the cursors in range.
    ///
    /// If the selected folder no longer exists the browser returns to the
    /// folder list.
    pub(crate) fn refresh(&mut self, library: &VideoLibrary) {
        self.groups = library.groups();

        if let Some(name) = &self.selected_folder {
            if self.groups.get(name).is_none() {
                self.selected_folder = None;
            }
        }

        Self::clamp(&mut self.folders_state, self.groups.len());
        let files = self.folder().map_or(0, |g| g.members.len());
        Self::clamp(&mut self.files_state, files);
    }

    pub(crate) fn pane(&self) -> LibraryPane {
        if self.selected_folder.is_some() {
            LibraryPane::Files
        } else {
            LibraryPane::Folders
        }
    }

    pub(crate) fn groups(&self) -> &FolderGroups {
        &self.groups
    }

    pub(crate) fn selected_folder(&self) -> Option<&str> {
        self.selected_folder.as_deref()
    }

    /// The group of the folder drilled into.
    pub(crate) fn folder(&self) -> Option<&FolderGroup> {
        self.selected_folder
            .as_deref()
            .and_then(|name| self.groups.get(name))
    }

    /// The entries of the folder drilled into, in library order.
    pub(crate) fn folder_entries<'a>(&self, library: &'a VideoLibrary) -> Vec<&'a VideoEntry> {
        self.folder()
            .map(|g| {
                g.members
                    .iter()
                    .filter_map(|&i| library.entries().get(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn next(&mut self) {
        match self.pane() {
            LibraryPane::Folders => Self::step_next(&mut self.folders_state, self.groups.len()),
            LibraryPane::Files => {
                let len = self.folder().map_or(0, |g| g.members.len());
                Self::step_next(&mut self.files_state, len);
            }
        }
    }

    pub(crate) fn previous(&mut self) {
        match self.pane() {
            LibraryPane::Folders => Self::step_previous(&mut self.folders_state, self.groups.len()),
            LibraryPane::Files => {
                let len = self.folder().map_or(0, |g| g.members.len());
                Self::step_previous(&mut self.files_state, len);
            }
        }
    }

    /// Activates the item under the cursor.
    ///
    /// On the folder list this drills into the folder and returns `None`. On
    /// a file list it returns the global list position of the entry, looked
    /// up by identifier.
    pub(crate) fn activate(&mut self, library: &VideoLibrary) -> Option<usize> {
        match self.pane() {
            LibraryPane::Folders => {
                let index = self.folders_state.selected()?;
                let name = self.groups.groups().get(index)?.name.clone();
                self.selected_folder = Some(name);
                self.files_state.select(Some(0));
                None
            }
            LibraryPane::Files => {
                let id = self.selected_entry_id(library)?;
                library.position_of(id)
            }
        }
    }

    pub(crate) fn selected_entry_id(&self, library: &VideoLibrary) -> Option<EntryId> {
        let index = self.files_state.selected()?;
        let position = *self.folder()?.members.get(index)?;
        library.entries().get(position).map(|e| e.id)
    }

    /// Returns from a file list to the folder list.
    pub(crate) fn back(&mut self) -> bool {
        self.selected_folder.take().is_some()
    }

    fn clamp(state: &mut ListState, len: usize) {
        match state.selected() {
            _ if len == 0 => state.select(None),
            Some(i) if i >= len => state.select(Some(len - 1)),
            None => state.select(Some(0)),
            _ => {}
        }
    }

    fn step_next(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.select(Some(i));
    }

    fn step_previous(state: &mut ListState, len: usize) {
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::video;

    fn library() -> VideoLibrary {
        let mut library = VideoLibrary::new("Unsorted");
        library.add_files(vec![
            video("Root/Cats/1.mp4"),
            video("Root/Dogs/2.mp4"),
            video("Root/Cats/3.mp4"),
            video("Root/Dogs/4.mp4"),
        ]);
        library
    }

    #[test]
    fn starts_on_folder_list() {
        let library = library();
        let mut browser = LibraryBrowser::new();
        browser.refresh(&library);

        assert_eq!(browser.pane(), LibraryPane::Folders);
        assert_eq!(browser.groups().len(), 2);
        assert_eq!(browser.folders_state.selected(), Some(0));
    }

    #[test]
    fn selecting_a_file_resolves_global_position() {
        let library = library();
        let mut browser = LibraryBrowser::new();
        browser.refresh(&library);

        browser.next();
        assert_eq!(browser.activate(&library), None);
        assert_eq!(browser.selected_folder(), Some("Dogs"));

        let names: Vec<&str> = browser
            .folder_entries(&library)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["2.mp4", "4.mp4"]);

        browser.next();
        assert_eq!(browser.activate(&library), Some(3));
        browser.next();
        assert_eq!(browser.activate(&library), Some(1));
    }

    #[test]
    fn cursor_wraps() {
        let library = library();
        let mut browser = LibraryBrowser::new();
        browser.refresh(&library);

        browser.previous();
        assert_eq!(browser.folders_state.selected(), Some(1));
        browser.next();
        assert_eq!(browser.folders_state.selected(), Some(0));
    }

    #[test]
    fn back_returns_to_folders() {
        let library = library();
        let mut browser = LibraryBrowser::new();
        browser.refresh(&library);
        browser.activate(&library);

        assert!(browser.back());
        assert_eq!(browser.pane(), LibraryPane::Folders);
        assert!(!browser.back());
    }

    #[test]
    fn refresh_drops_vanished_folder() {
        let mut library = library();
        let mut browser = LibraryBrowser::new();
        browser.refresh(&library);
        browser.activate(&library);
        assert_eq!(browser.selected_folder(), Some("Cats"));

        library.clear();
        browser.refresh(&library);

        assert_eq!(browser.pane(), LibraryPane::Folders);
        assert_eq!(browser.folders_state.selected(), None);
        assert!(browser.activate(&library).is_none());
    }
}
