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

//! Scan progress.
//!
//! Tracks the state of the locations being scanned and how many files each
//! has produced so far, for display while a scan is running.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CatalogStatus {
    Idle,
    Scanning,
    Finished,
}

#[derive(Debug)]
pub(crate) struct DirectoryStatus {
    pub(crate) status: CatalogStatus,
    pub(crate) name: String,
    pub(crate) count: usize,
}

#[derive(Debug)]
pub(crate) struct Catalog {
    pub(crate) status: CatalogStatus,
    pub(crate) directory_status: Vec<DirectoryStatus>,
    current_directory_index: Option<usize>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            status: CatalogStatus::Idle,
            directory_status: vec![],
            current_directory_index: None,
        }
    }

    pub(crate) fn prepare_scan(&mut self, directories: &[String]) {
        self.status = CatalogStatus::Scanning;
        self.current_directory_index = None;
        self.directory_status = directories
            .iter()
            .map(|d| DirectoryStatus {
                status: CatalogStatus::Idle,
                name: d.clone(),
                count: 0,
            })
            .collect();
    }

    pub(crate) fn begin_scan_directory(&mut self, directory: &str) {
        self.current_directory_index = self
            .directory_status
            .iter()
            .position(|s| s.name == directory);

        if let Some(idx) = self.current_directory_index {
            self.directory_status[idx].status = CatalogStatus::Scanning;
        }
    }

    pub(crate) fn update_scan_directory(&mut self, count: usize) {
        if let Some(status) = self
            .current_directory_index
            .and_then(|idx| self.directory_status.get_mut(idx))
        {
            status.count = count;
        }
    }

    pub(crate) fn end_scan_directory(&mut self) {
        if let Some(status) = self
            .current_directory_index
            .and_then(|idx| self.directory_status.get_mut(idx))
        {
            status.status = CatalogStatus::Finished;
        }
        self.current_directory_index = None;
    }

    pub(crate) fn finish_scan(&mut self) {
        self.status = CatalogStatus::Finished;
        self.current_directory_index = None;
    }

    pub(crate) fn total_files(&self) -> usize {
        self.directory_status.iter().map(|d| d.count).sum()
    }

    /// One-line description of the scan for the status line.
    pub(crate) fn summary(&self) -> Option<String> {
        match self.status {
            CatalogStatus::Idle => None,
            CatalogStatus::Scanning => {
                let current = self
                    .current_directory_index
                    .and_then(|idx| self.directory_status.get(idx))
                    .map(|d| d.name.as_str())
                    .unwrap_or("");
                Some(format!("Scanning {} | {} files found", current, self.total_files()))
            }
            CatalogStatus::Finished => Some(format!(
                "Scan complete | {} files in {} locations",
                self.total_files(),
                self.directory_status.len()
            )),
        }
    }
}
