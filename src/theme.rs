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

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) label_fg: Color,
    pub(crate) input_fg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_genre_fg: Color,
    pub(crate) table_meta_fg: Color,

    pub(crate) selected_bg: Color,
    pub(crate) selected_fg: Color,

    pub(crate) success_fg: Color,
    pub(crate) error_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),

            label_fg: Color::Rgb(162, 161, 166),
            input_fg: Color::Rgb(255, 255, 255),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_genre_fg: Color::Rgb(179, 157, 219),
            table_meta_fg: Color::Rgb(162, 161, 166),

            selected_bg: Color::Blue,
            selected_fg: Color::White,

            success_fg: Color::Rgb(152, 195, 121),
            error_fg: Color::Rgb(224, 108, 117),
        }
    }
}
