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

//! Playable resource locators.
//!
//! Entries never hand their file path straight to the player, instead each
//! admitted entry is issued a [`Locator`] by the library's [`Locators`]
//! registry. The registry is the single owner of the mapping, so evicting an
//! entry (or ending the session) revokes the locator and any later attempt
//! to play it fails instead of silently touching a stale path.

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
};

use crate::error::PlayerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Locator(u64);

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "media:{}", self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct Locators {
    next: u64,
    live: HashMap<Locator, PathBuf>,
}

impl Locators {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Issues a new locator for `path`.
    ///
    /// Locators are never reused, even after being revoked.
    pub(crate) fn create(&mut self, path: PathBuf) -> Locator {
        self.next += 1;
        let locator = Locator(self.next);
        self.live.insert(locator, path);
        locator
    }

    /// Resolves a locator to the file it refers to.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::LocatorRevoked`] if the locator has been
    /// revoked (or was never issued by this registry).
    pub(crate) fn resolve(&self, locator: Locator) -> Result<&Path, PlayerError> {
        self.live
            .get(&locator)
            .map(PathBuf::as_path)
            .ok_or(PlayerError::LocatorRevoked(locator))
    }

    /// Revokes a locator, returning `true` if it was still live.
    pub(crate) fn revoke(&mut self, locator: Locator) -> bool {
        self.live.remove(&locator).is_some()
    }

    pub(crate) fn revoke_all(&mut self) {
        self.live.clear();
    }

    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl Drop for Locators {
    fn drop(&mut self) {
        if !self.live.is_empty() {
            log::debug!("Revoking {} media locators at session end", self.live.len());
            self.revoke_all();
        }
    }
}
