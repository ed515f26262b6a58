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

//! The artists section.

mod render;

use ratatui::widgets::TableState;

use crate::model::Artist;

pub(crate) struct ArtistsView {
    pub(crate) artists: Vec<Artist>,
    pub(crate) state: TableState,
}

impl ArtistsView {
    pub(crate) fn new() -> Self {
        Self {
            artists: Vec::new(),
            state: TableState::default(),
        }
    }

    pub(crate) fn set_artists(&mut self, artists: Vec<Artist>) {
        self.artists = artists;
        self.state
            .select((!self.artists.is_empty()).then_some(0));
    }

    pub(crate) fn next(&mut self) {
        if self.artists.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.artists.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        if self.artists.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub(crate) fn selected(&self) -> Option<&Artist> {
        self.state.selected().and_then(|i| self.artists.get(i))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn artists() -> Vec<Artist> {
        vec![
            Artist {
                artist_id: 1,
                name: "Orbital".to_string(),
            },
            Artist {
                artist_id: 2,
                name: "Aphex Twin".to_string(),
            },
        ]
    }

    #[test]
    fn setting_artists_selects_the_first_row() {
        let mut view = ArtistsView::new();
        view.set_artists(artists());
        assert_eq!(view.selected().map(|a| a.artist_id), Some(1));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut view = ArtistsView::new();
        view.set_artists(artists());

        view.previous();
        assert_eq!(view.selected().map(|a| a.artist_id), Some(1));

        view.next();
        view.next();
        assert_eq!(view.selected().map(|a| a.artist_id), Some(2));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut view = ArtistsView::new();
        view.set_artists(Vec::new());
        view.next();
        assert!(view.selected().is_none());
    }
}
