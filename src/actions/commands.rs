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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload potentially
//! blocking filesystem work from the main UI thread. It provides a dedicated
//! worker loop that translates [`AppCommand`] requests into scans and
//! broadcasts the results back to the application via [`AppEvent`]s.

use std::{
    path::Path,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{
    actions::events::{AppEvent, CatalogEvent},
    scan,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    ScanPaths(Vec<String>),
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(command_rx: Receiver<AppCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(request, &event_tx) {
                log::error!("Command failed: {:?}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// Each location is scanned in turn and its files are delivered as one
/// batch. A location that cannot be read is reported and the rest of the
/// scan continues.
fn handle_command(command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
    match command {
        AppCommand::ScanPaths(paths) => {
            event_tx.send(AppEvent::Catalog(CatalogEvent::Started(paths.clone())))?;

            for path in paths {
                event_tx.send(AppEvent::Catalog(CatalogEvent::StartedDirectory(path.clone())))?;

                let result = scan::scan_path(Path::new(&path), |count, _| {
                    // Throttled, a large tree would otherwise flood the UI.
                    if count % 25 == 0 {
                        let _ = event_tx.send(AppEvent::Catalog(CatalogEvent::ProcessedFile(count)));
                    }
                });

                match result {
                    Ok(files) => {
                        event_tx.send(AppEvent::Catalog(CatalogEvent::ProcessedFile(files.len())))?;
                        event_tx.send(AppEvent::FilesDiscovered(files))?;
                    }
                    Err(e) => {
                        log::warn!("Scan failed: {}", e);
                        event_tx.send(AppEvent::Error(e.to_string()))?;
                    }
                }

                event_tx.send(AppEvent::Catalog(CatalogEvent::FinishedDirectory(path)))?;
            }

            event_tx.send(AppEvent::Catalog(CatalogEvent::Finished))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn scan_reports_progress_and_batch() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Clips");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.mp4"), b"x").unwrap();
        fs::write(root.join("b.txt"), b"x").unwrap();
        let root = root.to_string_lossy().to_string();

        let (event_tx, event_rx) = mpsc::channel();
        handle_command(AppCommand::ScanPaths(vec![root.clone()]), &event_tx).unwrap();
        drop(event_tx);

        let events: Vec<AppEvent> = event_rx.iter().collect();
        assert!(matches!(&events[0], AppEvent::Catalog(CatalogEvent::Started(p)) if *p == [root.clone()]));
        assert!(matches!(&events[1], AppEvent::Catalog(CatalogEvent::StartedDirectory(p)) if *p == root));
        assert!(matches!(&events[2], AppEvent::Catalog(CatalogEvent::ProcessedFile(2))));
        assert!(matches!(&events[3], AppEvent::FilesDiscovered(files) if files.len() == 2));
        assert!(matches!(&events[4], AppEvent::Catalog(CatalogEvent::FinishedDirectory(_))));
        assert!(matches!(&events[5], AppEvent::Catalog(CatalogEvent::Finished)));
    }

    #[test]
    fn unreadable_location_is_reported_and_scan_continues() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").to_string_lossy().to_string();

        let (event_tx, event_rx) = mpsc::channel();
        handle_command(AppCommand::ScanPaths(vec![missing]), &event_tx).unwrap();
        drop(event_tx);

        let events: Vec<AppEvent> = event_rx.iter().collect();
        assert!(events.iter().any(|e| matches!(e, AppEvent::Error(_))));
        assert!(matches!(events.last(), Some(AppEvent::Catalog(CatalogEvent::Finished))));
    }
}
