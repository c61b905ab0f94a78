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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) dim_colour: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_size_fg: Color,
    pub(crate) table_modified_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 24, 40),
            accent_colour: Color::Rgb(102, 204, 255),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(34, 40, 62),
            highlight_colour: Color::Rgb(38, 79, 120),
            commander_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(239, 83, 80),
            dim_colour: Color::Rgb(130, 134, 150),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_size_fg: Color::Rgb(162, 161, 166),
            table_modified_fg: Color::Rgb(179, 157, 219),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via
    /// escape sequences. Non-RGB colours have no hex form and yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(20, 24, 255)).as_deref(), Some("#1418ff"));
    }

    #[test]
    fn named_colour_has_no_hex() {
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
