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

//! Terminal background control.
//!
//! The player surface is a separate window, the terminal hosts the library
//! and the on-screen controls. The background is painted with OSC 11 so the
//! theme reaches the edges of the terminal, and reset with OSC 111 on exit.

use std::io::{self, Write};

/// Writes the OSC 11 sequence that sets the background to `hex_colour`.
pub(crate) fn write_bg(out: &mut impl Write, hex_colour: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_colour)?;
    out.flush()
}

/// Writes the OSC 111 sequence that restores the user's background.
pub(crate) fn write_bg_reset(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1b]111\x07")?;
    out.flush()
}

pub(crate) fn set_terminal_bg(hex_colour: &str) {
    if let Err(e) = write_bg(&mut io::stdout(), hex_colour) {
        log::debug!("Failed to set terminal background: {}", e);
    }
}

pub(crate) fn reset_terminal_bg() {
    if let Err(e) = write_bg_reset(&mut io::stdout()) {
        log::debug!("Failed to reset terminal background: {}", e);
    }
}
