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

//! The track search section.
//!
//! Five optional filters over the shared catalog: title, artist, genre, bpm
//! and duration. Empty filters are omitted from the request entirely, and
//! resetting the form clears filters and results locally without issuing a
//! request.

mod event;
mod render;

use ratatui::widgets::TableState;
use tui_input::Input;

use crate::model::{Genre, Track, TrackQuery};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SearchField {
    Title,
    Artist,
    Genre,
    Bpm,
    Duration,
}

impl SearchField {
    fn next(self) -> Self {
        match self {
            SearchField::Title => SearchField::Artist,
            SearchField::Artist => SearchField::Genre,
            SearchField::Genre => SearchField::Bpm,
            SearchField::Bpm => SearchField::Duration,
            SearchField::Duration => SearchField::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            SearchField::Title => SearchField::Duration,
            SearchField::Artist => SearchField::Title,
            SearchField::Genre => SearchField::Artist,
            SearchField::Bpm => SearchField::Genre,
            SearchField::Duration => SearchField::Bpm,
        }
    }
}

/// What the caller should do after a key was handled in filter-editing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SearchAction {
    None,
    Run,
}

pub(crate) struct SearchView {
    pub(crate) title: Input,
    pub(crate) artist: Input,
    pub(crate) bpm: Input,
    pub(crate) duration: Input,

    pub(crate) genres: Vec<Genre>,
    /// Index into `genres`; `None` means no genre constraint.
    pub(crate) genre_selected: Option<usize>,

    pub(crate) editing: bool,
    pub(crate) field: SearchField,

    pub(crate) results: Vec<Track>,
    pub(crate) state: TableState,
    searched: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            title: Input::default(),
            artist: Input::default(),
            bpm: Input::default(),
            duration: Input::default(),
            genres: Vec::new(),
            genre_selected: None,
            editing: false,
            field: SearchField::Title,
            results: Vec::new(),
            state: TableState::default(),
            searched: false,
        }
    }

    pub(crate) fn set_genres(&mut self, genres: &[Genre]) {
        // Keep the constraint pointing at the same genre across reloads.
        let selected_id = self.query().genre_id;
        self.genres = genres.to_vec();
        self.genre_selected =
            selected_id.and_then(|id| self.genres.iter().position(|g| g.genre_id == id));
    }

    pub(crate) fn query(&self) -> TrackQuery {
        TrackQuery {
            title: self.title.value().to_string(),
            artist: self.artist.value().to_string(),
            genre_id: self
                .genre_selected
                .and_then(|i| self.genres.get(i))
                .map(|g| g.genre_id),
            bpm: self.bpm.value().to_string(),
            duration: self.duration.value().to_string(),
        }
    }

    /// Clears all filters and results. Purely local.
    pub(crate) fn reset(&mut self) {
        self.title.reset();
        self.artist.reset();
        self.bpm.reset();
        self.duration.reset();
        self.genre_selected = None;
        self.field = SearchField::Title;
        self.results.clear();
        self.state.select(None);
        self.searched = false;
    }

    pub(crate) fn set_results(&mut self, results: Vec<Track>) {
        self.results = results;
        self.state.select((!self.results.is_empty()).then_some(0));
        self.searched = true;
    }

    /// Whether a search has run since the last reset. Distinguishes "no
    /// results" from "not searched yet".
    pub(crate) fn has_searched(&self) -> bool {
        self.searched
    }

    pub(crate) fn next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub(crate) fn selected(&self) -> Option<&Track> {
        self.state.selected().and_then(|i| self.results.get(i))
    }

    pub(crate) fn cycle_genre_forward(&mut self) {
        self.genre_selected = match self.genre_selected {
            None if self.genres.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.genres.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub(crate) fn cycle_genre_back(&mut self) {
        self.genre_selected = match self.genre_selected {
            None if self.genres.is_empty() => None,
            None => Some(self.genres.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn genres() -> Vec<Genre> {
        vec![
            Genre {
                genre_id: 1,
                name: "Electronic".to_string(),
            },
            Genre {
                genre_id: 2,
                name: "Rock".to_string(),
            },
        ]
    }

    #[test]
    fn genre_cycles_through_any_and_back() {
        let mut view = SearchView::new();
        view.set_genres(&genres());

        assert_eq!(view.query().genre_id, None);

        view.cycle_genre_forward();
        assert_eq!(view.query().genre_id, Some(1));

        view.cycle_genre_forward();
        view.cycle_genre_forward();
        assert_eq!(view.query().genre_id, None);

        view.cycle_genre_back();
        assert_eq!(view.query().genre_id, Some(2));
    }

    #[test]
    fn genre_reload_preserves_the_selected_constraint() {
        let mut view = SearchView::new();
        view.set_genres(&genres());
        view.cycle_genre_forward();
        view.cycle_genre_forward();
        assert_eq!(view.query().genre_id, Some(2));

        // A reload with the list reordered keeps pointing at the same genre.
        let reordered: Vec<Genre> = genres().into_iter().rev().collect();
        view.set_genres(&reordered);
        assert_eq!(view.query().genre_id, Some(2));
    }

    #[test]
    fn reset_clears_filters_and_results_locally() {
        let mut view = SearchView::new();
        view.set_genres(&genres());
        view.cycle_genre_forward();
        view.set_results(vec![]);

        view.reset();
        assert!(view.query().params().is_empty());
        assert!(view.results.is_empty());
        assert!(!view.has_searched());
    }
}
