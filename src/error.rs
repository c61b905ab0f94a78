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

//! Domain error types.
//!
//! Application plumbing uses `anyhow`, these are the errors that the player
//! and scanner need to tell apart.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::locator::Locator;

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("player worker is no longer running")]
    WorkerGone,

    #[error("media locator {0} has been revoked")]
    LocatorRevoked(Locator),

    #[error("media backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub(crate) enum ScanError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),
}
