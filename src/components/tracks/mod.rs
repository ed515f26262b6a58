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

//! The tracks section.

mod render;

use ratatui::widgets::TableState;

use crate::model::Track;

pub(crate) struct TracksView {
    pub(crate) tracks: Vec<Track>,
    pub(crate) state: TableState,
}

impl TracksView {
    pub(crate) fn new() -> Self {
        Self {
            tracks: Vec::new(),
            state: TableState::default(),
        }
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.state.select((!self.tracks.is_empty()).then_some(0));
    }

    pub(crate) fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.tracks.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub(crate) fn selected(&self) -> Option<&Track> {
        self.state.selected().and_then(|i| self.tracks.get(i))
    }
}
