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

//! Folder grouping.
//!
//! Partitions the library's entries by folder name. Groups are kept in the
//! order in which each folder was first seen, and hold global list
//! positions rather than copies of the entries.

use std::collections::HashMap;

use crate::model::VideoEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FolderGroup {
    pub(crate) name: String,
    pub(crate) members: Vec<usize>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FolderGroups {
    groups: Vec<FolderGroup>,
}

impl FolderGroups {
    pub(crate) fn from_entries(entries: &[VideoEntry]) -> Self {
        let mut groups: Vec<FolderGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            let slot = *index.entry(entry.folder.as_str()).or_insert_with(|| {
                groups.push(FolderGroup {
                    name: entry.folder.clone(),
                    members: vec![],
                });
                groups.len() - 1
            });
            groups[slot].members.push(position);
        }

        Self { groups }
    }

    pub(crate) fn groups(&self) -> &[FolderGroup] {
        &self.groups
    }

    pub(crate) fn get(&self, name: &str) -> Option<&FolderGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
