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

//! Media discovery on the local filesystem.
//!
//! This module walks a selected file or directory and describes every file
//! it finds as a [`DiscoveredFile`]. It utilizes `WalkDir` for directory
//! traversal and derives MIME types from file extensions.
//!
//! Filtering to video files happens when the batch is admitted to the
//! library, the scanner itself reports everything it can read.

mod mime;

use std::{
    fs,
    path::{Component, Path},
};

use chrono::{DateTime, Local};
use walkdir::WalkDir;

use crate::{error::ScanError, model::DiscoveredFile};

pub(crate) use mime::mime_type_for;

/// Scans a file or directory, returning every readable file beneath it.
///
/// Relative paths are taken from the parent of `root`, so they begin with
/// the selected folder's own name. A single selected file therefore has a
/// relative path of just its file name.
///
/// Entries that cannot be read are skipped and logged. `progress` is called
/// with the running count after each discovered file.
///
/// # Errors
///
/// Returns an error if `root` itself cannot be read.
pub(crate) fn scan_path(
    root: &Path,
    mut progress: impl FnMut(usize, &Path),
) -> Result<Vec<DiscoveredFile>, ScanError> {
    let root = fs::canonicalize(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;
    let base = root.parent().unwrap_or(&root).to_path_buf();

    let mut files = Vec::new();

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let relative_path = match relative_path(path, &base) {
            Ok(relative) => relative,
            Err(e) => {
                log::warn!("Skipping {}", e);
                continue;
            }
        };

        files.push(DiscoveredFile {
            path: path.to_path_buf(),
            relative_path,
            mime_type: mime_type_for(path).to_string(),
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        });

        progress(files.len(), path);
    }

    log::info!("Scanned {}: {} files", root.display(), files.len());

    Ok(files)
}

/// Joins the components of `path` below `base` with `/`.
fn relative_path(path: &Path, base: &Path) -> Result<String, ScanError> {
    let relative = path.strip_prefix(base).unwrap_or(path);

    let segments = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(
                segment
                    .to_str()
                    .ok_or_else(|| ScanError::InvalidPath(path.to_path_buf())),
            ),
            _ => None,
        })
        .collect::<Result<Vec<&str>, ScanError>>()?;

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path, bytes: usize) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![0u8; bytes]).unwrap();
    }

    #[test]
    fn relative_paths_start_at_selected_folder() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Movies");
        touch(&root.join("a.mp4"), 10);
        touch(&root.join("Holiday/b.mkv"), 20);
        touch(&root.join("Holiday/notes.txt"), 5);

        let files = scan_path(&root, |_, _| {}).unwrap();
        let relative: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();

        assert_eq!(
            relative,
            ["Movies/Holiday/b.mkv", "Movies/Holiday/notes.txt", "Movies/a.mp4"]
        );
        assert_eq!(files[0].mime_type, "video/x-matroska");
        assert_eq!(files[1].mime_type, "text/plain");
        assert_eq!(files[0].size, 20);
        assert!(files.iter().all(|f| f.path.is_absolute()));
        assert!(files[2].modified.is_some());
    }

    #[test]
    fn single_file_has_no_parent_segment() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("clip.webm");
        touch(&file, 1);

        let files = scan_path(&file, |_, _| {}).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "clip.webm");
        assert_eq!(files[0].mime_type, "video/webm");
    }

    #[test]
    fn reports_progress_for_every_file() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("v/1.mp4"), 1);
        touch(&dir.path().join("v/2.mp4"), 1);
        touch(&dir.path().join("v/3.mp3"), 1);

        let mut counts = vec![];
        scan_path(&dir.path().join("v"), |count, _| counts.push(count)).unwrap();

        assert_eq!(counts, [1, 2, 3]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let result = scan_path(&dir.path().join("nope"), |_, _| {});

        assert!(matches!(result, Err(ScanError::Unreadable { .. })));
    }
}
