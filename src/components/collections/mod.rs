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

//! The collections section.
//!
//! Two panes: the collection list on the left, the selected collection's
//! member tracks on the right. Changing the collection selection resets the
//! member selection.

mod render;

use ratatui::widgets::ListState;

use crate::model::{Collection, CollectionTrack};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CollectionsPane {
    Collections,
    Tracks,
}

pub(crate) struct CollectionsView {
    pub(crate) collections: Vec<Collection>,
    pub(crate) pane: CollectionsPane,
    pub(crate) state: ListState,
    pub(crate) track_state: ListState,
}

impl CollectionsView {
    pub(crate) fn new() -> Self {
        Self {
            collections: Vec::new(),
            pane: CollectionsPane::Collections,
            state: ListState::default(),
            track_state: ListState::default(),
        }
    }

    pub(crate) fn set_collections(&mut self, collections: Vec<Collection>) {
        self.collections = collections;
        self.state
            .select((!self.collections.is_empty()).then_some(0));
        self.reset_track_selection();
    }

    fn reset_track_selection(&mut self) {
        let has_tracks = self
            .selected_collection()
            .is_some_and(|c| !c.tracks.is_empty());
        self.track_state.select(has_tracks.then_some(0));
    }

    pub(crate) fn next(&mut self) {
        match self.pane {
            CollectionsPane::Collections => {
                if self.collections.is_empty() {
                    return;
                }
                let i = match self.state.selected() {
                    Some(i) if i + 1 < self.collections.len() => i + 1,
                    Some(i) => i,
                    None => 0,
                };
                self.state.select(Some(i));
                self.reset_track_selection();
            }
            CollectionsPane::Tracks => {
                let len = self.selected_collection().map_or(0, |c| c.tracks.len());
                if len == 0 {
                    return;
                }
                let i = match self.track_state.selected() {
                    Some(i) if i + 1 < len => i + 1,
                    Some(i) => i,
                    None => 0,
                };
                self.track_state.select(Some(i));
            }
        }
    }

    pub(crate) fn previous(&mut self) {
        match self.pane {
            CollectionsPane::Collections => {
                if self.collections.is_empty() {
                    return;
                }
                let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
                self.state.select(Some(i));
                self.reset_track_selection();
            }
            CollectionsPane::Tracks => {
                if self.selected_collection().is_none_or(|c| c.tracks.is_empty()) {
                    return;
                }
                let i = self
                    .track_state
                    .selected()
                    .map_or(0, |i| i.saturating_sub(1));
                self.track_state.select(Some(i));
            }
        }
    }

    pub(crate) fn selected_collection(&self) -> Option<&Collection> {
        self.state.selected().and_then(|i| self.collections.get(i))
    }

    pub(crate) fn selected_track(&self) -> Option<&CollectionTrack> {
        let collection = self.selected_collection()?;
        self.track_state
            .selected()
            .and_then(|i| collection.tracks.get(i))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn collections() -> Vec<Collection> {
        vec![
            Collection {
                collection_id: 1,
                name: "Favourites".to_string(),
                is_favorite: true,
                created_at: String::new(),
                tracks: vec![
                    CollectionTrack {
                        track_id: 10,
                        title: "A".to_string(),
                        artist_name: "X".to_string(),
                    },
                    CollectionTrack {
                        track_id: 11,
                        title: "B".to_string(),
                        artist_name: "Y".to_string(),
                    },
                ],
            },
            Collection {
                collection_id: 2,
                name: "Empty".to_string(),
                is_favorite: false,
                created_at: String::new(),
                tracks: Vec::new(),
            },
        ]
    }

    #[test]
    fn selecting_a_collection_selects_its_first_member() {
        let mut view = CollectionsView::new();
        view.set_collections(collections());

        assert_eq!(view.selected_collection().map(|c| c.collection_id), Some(1));
        assert_eq!(view.selected_track().map(|t| t.track_id), Some(10));
    }

    #[test]
    fn changing_collection_resets_the_member_selection() {
        let mut view = CollectionsView::new();
        view.set_collections(collections());

        view.pane = CollectionsPane::Tracks;
        view.next();
        assert_eq!(view.selected_track().map(|t| t.track_id), Some(11));

        view.pane = CollectionsPane::Collections;
        view.next();
        assert_eq!(view.selected_collection().map(|c| c.collection_id), Some(2));
        assert!(view.selected_track().is_none());
    }

    #[test]
    fn member_navigation_in_an_empty_collection_is_a_no_op() {
        let mut view = CollectionsView::new();
        view.set_collections(collections());

        view.next();
        view.pane = CollectionsPane::Tracks;
        view.next();
        assert!(view.selected_track().is_none());
    }
}
