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

//! Application event handlers.
//!
//! One function per [`AppEvent`] variant, each applying the event to the
//! [`App`] state.

use std::time::Instant;

use anyhow::Result;

use crate::{
    App, MainView,
    actions::{commands::AppCommand, events::CatalogEvent},
    model::{DiscoveredFile, EntryId},
    player::{MediaEvent, controller::Navigation},
};

pub(super) fn handle_catalog_event(app: &mut App, catalog_event: CatalogEvent) {
    match catalog_event {
        CatalogEvent::Started(paths) => {
            for path in &paths {
                if !app.scan_roots.contains(path) {
                    app.scan_roots.push(path.clone());
                }
            }
            app.catalog.prepare_scan(&paths);
        }
        CatalogEvent::StartedDirectory(dir) => app.catalog.begin_scan_directory(&dir),
        CatalogEvent::ProcessedFile(count) => app.catalog.update_scan_directory(count),
        CatalogEvent::FinishedDirectory(dir) => {
            log::debug!("Finished scanning {}", dir);
            app.catalog.end_scan_directory();
        }
        CatalogEvent::Finished => app.catalog.finish_scan(),
    }
}

pub(super) fn handle_files_discovered(app: &mut App, files: Vec<DiscoveredFile>) {
    let found = files.len();
    let admitted = app.library.add_files(files);
    log::info!(
        "Admitted {} of {} discovered files, {} locators live",
        admitted,
        found,
        app.library.live_locators()
    );

    app.browser.refresh(&app.library);
    app.player.set_navigation(navigation(app));
    app.status = Some(format!("Added {} videos ({} in library)", admitted, app.library.len()));
}

fn navigation(app: &App) -> Navigation {
    Navigation {
        has_next: app.library.has_next(),
        has_previous: app.library.has_previous(),
    }
}

pub(super) fn handle_remove_entry(app: &mut App, id: EntryId) {
    let name = app
        .library
        .entries()
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.clone());

    if app.library.remove(id) {
        app.browser.refresh(&app.library);
        app.player.set_navigation(navigation(app));
        if let Some(name) = name {
            app.status = Some(format!("Removed {} from the library", name));
        }
    }
}

/// Binds the library's current entry to the player and shows the player.
fn bind_current(app: &mut App) {
    let Some(entry) = app.library.current().cloned() else {
        return;
    };

    let navigation = navigation(app);
    let source = app.library.resolve(entry.locator);
    app.player
        .bind(&entry, source, navigation, &mut app.video_player, Instant::now());
    app.main_view = MainView::Player;
}

pub(super) fn handle_play_index(app: &mut App, index: usize) {
    if app.library.play_at(index).is_some() {
        bind_current(app);
    }
}

pub(super) fn handle_play_next(app: &mut App) {
    if app.player.can_go_next() && app.library.next().is_some() {
        bind_current(app);
    }
}

pub(super) fn handle_play_previous(app: &mut App) {
    if app.player.can_go_previous() && app.library.previous().is_some() {
        bind_current(app);
    }
}

pub(super) fn handle_back_to_library(app: &mut App) {
    if app.main_view != MainView::Player || !app.player.can_go_back() {
        return;
    }

    app.player.unbind(&mut app.video_player);
    app.library.back_to_library();
    app.main_view = MainView::Library;
}

pub(super) fn handle_rescan(app: &mut App) -> Result<()> {
    if app.scan_roots.is_empty() {
        app.status = Some("Nothing to rescan, use :open <path>".to_string());
        return Ok(());
    }

    app.command_tx
        .send(AppCommand::ScanPaths(app.scan_roots.clone()))?;

    Ok(())
}

pub(super) fn handle_clear_library(app: &mut App) {
    if app.player.entry().is_some() && !app.player.can_go_back() {
        app.status = Some("Unlock the player before clearing the library".to_string());
        return;
    }

    app.player.unbind(&mut app.video_player);
    app.library.clear();
    app.browser.refresh(&app.library);
    app.main_view = MainView::Library;
    app.status = Some("Library cleared".to_string());
}

pub(super) fn handle_media_event(app: &mut App, generation: u64, event: MediaEvent) {
    app.player.on_media_event(generation, event, Instant::now());
}

pub(super) fn handle_tick(app: &mut App) {
    app.player.tick(Instant::now());
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.status = Some(message);
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    log::error!("{}", message);
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc};

    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::{
        browser::LibraryBrowser,
        commander::Commander,
        config::AppConfig,
        model::{catalog::Catalog, library::VideoLibrary},
        player::{VideoPlayer, commands::PlayerCommand, controller::PlayerController},
        scan,
        theme::Theme,
    };

    struct Fixture {
        app: App,
        player_rx: mpsc::Receiver<PlayerCommand>,
        command_rx: mpsc::Receiver<AppCommand>,
        _dir: TempDir,
    }

    /// An application with `names` admitted from a real folder and a player
    /// that only records its commands.
    fn fixture(names: &[&str]) -> Fixture {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Clips");
        fs::create_dir_all(&root).unwrap();
        for name in names {
            fs::write(root.join(name), b"x").unwrap();
        }

        let config = AppConfig::default();
        let (event_tx, event_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel();
        let (video_player, player_rx) = VideoPlayer::detached();

        let mut app = App {
            theme: Theme::default(),
            main_view: MainView::Library,
            event_tx,
            event_rx,
            command_tx,
            video_player,
            library: VideoLibrary::new(config.fallback_folder.clone()),
            browser: LibraryBrowser::new(),
            player: PlayerController::new(config.controls_timeout()),
            catalog: Catalog::new(),
            commander: Commander::new(),
            status: None,
            scan_roots: vec![],
            config,
        };

        let files = scan::scan_path(&root, |_, _| {}).unwrap();
        handle_files_discovered(&mut app, files);

        Fixture {
            app,
            player_rx,
            command_rx,
            _dir: dir,
        }
    }

    fn bound_name(app: &App) -> Option<&str> {
        app.player.entry().map(|e| e.name.as_str())
    }

    #[test]
    fn discovered_files_are_admitted_and_grouped() {
        let f = fixture(&["a.mp4", "b.mkv", "notes.txt"]);

        assert_eq!(f.app.library.len(), 2);
        assert_eq!(f.app.browser.groups().len(), 1);
        assert_eq!(f.app.status.as_deref(), Some("Added 2 videos (2 in library)"));
    }

    #[test]
    fn play_index_binds_and_shows_player() {
        let mut f = fixture(&["a.mp4", "b.mp4"]);
        handle_play_index(&mut f.app, 1);

        assert_eq!(f.app.main_view, MainView::Player);
        assert_eq!(bound_name(&f.app), Some("b.mp4"));
        assert!(f.app.player.is_playing());

        let commands: Vec<PlayerCommand> = f.player_rx.try_iter().collect();
        assert!(commands.iter().any(|c| matches!(c, PlayerCommand::Load { generation: 1, .. })));
        assert!(matches!(commands.last(), Some(PlayerCommand::Play)));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut f = fixture(&["a.mp4"]);
        handle_play_index(&mut f.app, 5);

        assert_eq!(f.app.main_view, MainView::Library);
        assert_eq!(bound_name(&f.app), None);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        let mut f = fixture(&["a.mp4", "b.mp4"]);
        handle_play_index(&mut f.app, 0);

        handle_play_previous(&mut f.app);
        assert_eq!(bound_name(&f.app), Some("a.mp4"));

        handle_play_next(&mut f.app);
        assert_eq!(bound_name(&f.app), Some("b.mp4"));
        assert!(!f.app.player.navigation().has_next);

        handle_play_next(&mut f.app);
        assert_eq!(bound_name(&f.app), Some("b.mp4"));
        assert_eq!(f.app.library.current().unwrap().name, "b.mp4");
    }

    #[test]
    fn back_is_refused_while_locked() {
        let mut f = fixture(&["a.mp4", "b.mp4"]);
        handle_play_index(&mut f.app, 0);
        f.app.player.toggle_lock(Instant::now());

        handle_back_to_library(&mut f.app);
        handle_play_next(&mut f.app);
        assert_eq!(f.app.main_view, MainView::Player);
        assert_eq!(bound_name(&f.app), Some("a.mp4"));

        f.app.player.toggle_lock(Instant::now());
        handle_back_to_library(&mut f.app);
        assert_eq!(f.app.main_view, MainView::Library);
        assert_eq!(bound_name(&f.app), None);
        assert!(f.app.library.current().is_none());
    }

    #[test]
    fn back_is_available_on_error() {
        let mut f = fixture(&["a.mp4"]);
        handle_play_index(&mut f.app, 0);
        let generation = f.app.player.generation();
        handle_media_event(&mut f.app, generation, MediaEvent::Failed("broken".to_string()));
        assert!(f.app.player.error().is_some());

        handle_back_to_library(&mut f.app);
        assert_eq!(f.app.main_view, MainView::Library);
    }

    #[test]
    fn clear_revokes_every_locator() {
        let mut f = fixture(&["a.mp4", "b.mp4"]);
        handle_play_index(&mut f.app, 0);
        assert_eq!(f.app.library.live_locators(), 2);

        handle_clear_library(&mut f.app);

        assert_eq!(f.app.library.live_locators(), 0);
        assert!(f.app.library.is_empty());
        assert!(f.app.browser.groups().is_empty());
        assert_eq!(f.app.main_view, MainView::Library);
        assert_eq!(bound_name(&f.app), None);
    }

    #[test]
    fn clear_is_refused_while_locked() {
        let mut f = fixture(&["a.mp4"]);
        handle_play_index(&mut f.app, 0);
        f.app.player.toggle_lock(Instant::now());

        handle_clear_library(&mut f.app);

        assert_eq!(f.app.library.len(), 1);
        assert_eq!(f.app.main_view, MainView::Player);
        assert_eq!(bound_name(&f.app), Some("a.mp4"));
    }

    #[test]
    fn remove_entry_revokes_its_locator() {
        let mut f = fixture(&["a.mp4", "b.mp4"]);
        let id = f.app.library.entries()[0].id;

        handle_remove_entry(&mut f.app, id);

        assert_eq!(f.app.library.len(), 1);
        assert_eq!(f.app.library.live_locators(), 1);
        assert_eq!(f.app.status.as_deref(), Some("Removed a.mp4 from the library"));
    }

    #[test]
    fn rescan_requests_every_root() {
        let mut f = fixture(&[]);
        handle_catalog_event(&mut f.app, CatalogEvent::Started(vec!["/a".to_string()]));
        handle_catalog_event(&mut f.app, CatalogEvent::Started(vec!["/a".to_string(), "/b".to_string()]));

        handle_rescan(&mut f.app).unwrap();

        match f.command_rx.try_recv() {
            Ok(AppCommand::ScanPaths(paths)) => assert_eq!(paths, ["/a", "/b"]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
