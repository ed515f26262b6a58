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

//! The modal dialog.
//!
//! At most one modal is open at a time; while open it captures all keyboard
//! input. There is a single submit path that reads the modal's explicit mode,
//! so what a form submits can never depend on which handler happened to be
//! attached last. Create and edit share one form per resource, distinguished
//! only by the presence of the record id in the mode.

mod event;
mod render;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::{
    actions::commands::AppCommand,
    model::{Artist, Collection, CollectionFields, Genre, Track, TrackFields},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DeleteTarget {
    Artist { artist_id: i64, name: String },
    Track { track_id: i64, title: String },
    Collection { collection_id: i64, name: String },
}

impl DeleteTarget {
    pub(crate) fn describe(&self) -> String {
        match self {
            DeleteTarget::Artist { name, .. } => {
                format!("Delete artist '{name}'? Their tracks are deleted too.")
            }
            DeleteTarget::Track { title, .. } => format!("Delete track '{title}'?"),
            DeleteTarget::Collection { name, .. } => {
                format!("Delete collection '{name}'? Its tracks are kept.")
            }
        }
    }

    fn command(&self) -> AppCommand {
        match self {
            DeleteTarget::Artist { artist_id, .. } => AppCommand::DeleteArtist {
                artist_id: *artist_id,
            },
            DeleteTarget::Track { track_id, .. } => AppCommand::DeleteTrack {
                track_id: *track_id,
            },
            DeleteTarget::Collection { collection_id, .. } => AppCommand::DeleteCollection {
                collection_id: *collection_id,
            },
        }
    }
}

/// What the open modal is for. Submit behaviour is derived from this and
/// nothing else.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ModalMode {
    ArtistForm { artist_id: Option<i64> },
    TrackForm { track_id: Option<i64> },
    CollectionForm { collection_id: Option<i64> },
    PickCollection { track_id: i64 },
    PickTrack { collection_id: i64 },
    ConfirmDelete(DeleteTarget),
}

pub(crate) enum FieldValue {
    Text(Input),
    Select {
        options: Vec<(i64, String)>,
        selected: Option<usize>,
    },
    Flag(bool),
}

pub(crate) struct FormField {
    pub(crate) label: &'static str,
    pub(crate) value: FieldValue,
    pub(crate) required: bool,
}

impl FormField {
    fn text(label: &'static str, value: &str, required: bool) -> Self {
        Self {
            label,
            value: FieldValue::Text(Input::new(value.to_string())),
            required,
        }
    }

    fn select(label: &'static str, options: Vec<(i64, String)>, selected_id: Option<i64>) -> Self {
        let selected = selected_id.and_then(|id| options.iter().position(|(o, _)| *o == id));
        Self {
            label,
            value: FieldValue::Select { options, selected },
            required: true,
        }
    }

    fn flag(label: &'static str, value: bool) -> Self {
        Self {
            label,
            value: FieldValue::Flag(value),
            required: false,
        }
    }

    fn text_value(&self) -> String {
        match &self.value {
            FieldValue::Text(input) => input.value().trim().to_string(),
            _ => String::new(),
        }
    }

    fn selected_id(&self) -> Option<i64> {
        match &self.value {
            FieldValue::Select { options, selected } => {
                selected.and_then(|i| options.get(i)).map(|(id, _)| *id)
            }
            _ => None,
        }
    }

    fn flag_value(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    fn is_missing(&self) -> bool {
        if !self.required {
            return false;
        }
        match &self.value {
            FieldValue::Text(input) => input.value().trim().is_empty(),
            FieldValue::Select { selected, .. } => selected.is_none(),
            FieldValue::Flag(_) => false,
        }
    }
}

pub(crate) struct PickerItem {
    pub(crate) id: i64,
    pub(crate) label: String,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ModalAction {
    None,
    Close,
    Submit(AppCommand),
}

pub(crate) struct Modal {
    pub(crate) title: String,
    pub(crate) mode: ModalMode,
    pub(crate) fields: Vec<FormField>,
    pub(crate) focus: usize,
    pub(crate) picker: Vec<PickerItem>,
    pub(crate) picker_state: ListState,
    pub(crate) error: Option<String>,
}

impl Modal {
    fn new(title: impl Into<String>, mode: ModalMode, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            mode,
            fields,
            focus: 0,
            picker: Vec::new(),
            picker_state: ListState::default(),
            error: None,
        }
    }

    fn with_picker(
        title: impl Into<String>,
        mode: ModalMode,
        picker: Vec<PickerItem>,
    ) -> Self {
        let mut picker_state = ListState::default();
        picker_state.select((!picker.is_empty()).then_some(0));
        Self {
            title: title.into(),
            mode,
            fields: Vec::new(),
            focus: 0,
            picker,
            picker_state,
            error: None,
        }
    }

    pub(crate) fn artist_form(artist: Option<&Artist>) -> Self {
        let title = if artist.is_some() {
            "Edit artist"
        } else {
            "Add artist"
        };
        Self::new(
            title,
            ModalMode::ArtistForm {
                artist_id: artist.map(|a| a.artist_id),
            },
            vec![FormField::text(
                "Name",
                artist.map(|a| a.name.as_str()).unwrap_or_default(),
                true,
            )],
        )
    }

    pub(crate) fn track_form(track: Option<&Track>, artists: &[Artist], genres: &[Genre]) -> Self {
        let title = if track.is_some() {
            "Edit track"
        } else {
            "Add track"
        };

        let artist_options = artists
            .iter()
            .map(|a| (a.artist_id, a.name.clone()))
            .collect();
        let genre_options = genres
            .iter()
            .map(|g| (g.genre_id, g.name.clone()))
            .collect();

        let bpm = track
            .and_then(|t| t.bpm)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let duration = track
            .and_then(|t| t.duration_sec)
            .map(|v| v.to_string())
            .unwrap_or_default();

        Self::new(
            title,
            ModalMode::TrackForm {
                track_id: track.map(|t| t.track_id),
            },
            vec![
                FormField::text(
                    "Title",
                    track.map(|t| t.title.as_str()).unwrap_or_default(),
                    true,
                ),
                FormField::select("Artist", artist_options, track.map(|t| t.artist_id)),
                FormField::select("Genre", genre_options, track.map(|t| t.genre_id)),
                FormField::text("BPM", &bpm, false),
                FormField::text("Duration (sec)", &duration, false),
            ],
        )
    }

    pub(crate) fn collection_form(collection: Option<&Collection>) -> Self {
        let title = if collection.is_some() {
            "Edit collection"
        } else {
            "New collection"
        };
        Self::new(
            title,
            ModalMode::CollectionForm {
                collection_id: collection.map(|c| c.collection_id),
            },
            vec![
                FormField::text(
                    "Name",
                    collection.map(|c| c.name.as_str()).unwrap_or_default(),
                    true,
                ),
                FormField::flag("Favorite", collection.is_some_and(|c| c.is_favorite)),
            ],
        )
    }

    pub(crate) fn pick_collection(track_id: i64, collections: &[Collection]) -> Self {
        let picker = collections
            .iter()
            .map(|c| PickerItem {
                id: c.collection_id,
                label: c.name.clone(),
            })
            .collect();
        Self::with_picker(
            "Add to collection",
            ModalMode::PickCollection { track_id },
            picker,
        )
    }

    pub(crate) fn pick_track(collection_id: i64, tracks: &[Track]) -> Self {
        let picker = tracks
            .iter()
            .map(|t| PickerItem {
                id: t.track_id,
                label: format!("{} / {}", t.title, t.artist_name),
            })
            .collect();
        Self::with_picker(
            "Add track",
            ModalMode::PickTrack { collection_id },
            picker,
        )
    }

    pub(crate) fn confirm_delete(target: DeleteTarget) -> Self {
        Self::new(
            "Confirm delete",
            ModalMode::ConfirmDelete(target),
            Vec::new(),
        )
    }

    fn selected_picker_id(&self) -> Option<i64> {
        self.picker_state
            .selected()
            .and_then(|i| self.picker.get(i))
            .map(|item| item.id)
    }

    /// The one submit path. Validates required fields, then builds the
    /// command this modal's mode stands for.
    fn submit(&mut self) -> ModalAction {
        if let Some(field) = self.fields.iter().find(|f| f.is_missing()) {
            self.error = Some(format!("{} is required", field.label));
            return ModalAction::None;
        }

        let command = match &self.mode {
            ModalMode::ArtistForm { artist_id } => {
                let name = self.fields[0].text_value();
                match artist_id {
                    Some(artist_id) => AppCommand::UpdateArtist {
                        artist_id: *artist_id,
                        name,
                    },
                    None => AppCommand::CreateArtist { name },
                }
            }

            ModalMode::TrackForm { track_id } => {
                let fields = TrackFields {
                    title: self.fields[0].text_value(),
                    // The selects are required, so the ids are present here.
                    artist_id: self.fields[1].selected_id().unwrap_or_default(),
                    genre_id: self.fields[2].selected_id().unwrap_or_default(),
                    bpm: self.fields[3].text_value().parse().ok(),
                    duration_sec: self.fields[4].text_value().parse().ok(),
                };
                match track_id {
                    Some(track_id) => AppCommand::UpdateTrack {
                        track_id: *track_id,
                        fields,
                    },
                    None => AppCommand::CreateTrack(fields),
                }
            }

            ModalMode::CollectionForm { collection_id } => {
                let fields = CollectionFields {
                    name: self.fields[0].text_value(),
                    is_favorite: self.fields[1].flag_value(),
                };
                match collection_id {
                    Some(collection_id) => AppCommand::UpdateCollection {
                        collection_id: *collection_id,
                        fields,
                    },
                    None => AppCommand::CreateCollection(fields),
                }
            }

            ModalMode::PickCollection { track_id } => match self.selected_picker_id() {
                Some(collection_id) => AppCommand::AddTrackToCollection {
                    collection_id,
                    track_id: *track_id,
                },
                None => return ModalAction::None,
            },

            ModalMode::PickTrack { collection_id } => match self.selected_picker_id() {
                Some(track_id) => AppCommand::AddTrackToCollection {
                    collection_id: *collection_id,
                    track_id,
                },
                None => return ModalAction::None,
            },

            ModalMode::ConfirmDelete(target) => target.command(),
        };

        ModalAction::Submit(command)
    }
}

#[cfg(test)]
mod tests {

    use crossterm::event::{KeyCode, KeyEvent};

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

    fn genres() -> Vec<Genre> {
        vec![
            Genre {
                genre_id: 1,
                name: "Electronic".to_string(),
            },
            Genre {
                genre_id: 6,
                name: "Ambient".to_string(),
            },
        ]
    }

    fn track() -> Track {
        Track {
            track_id: 7,
            title: "Belfast".to_string(),
            artist_id: 1,
            genre_id: 6,
            bpm: Some(120),
            duration_sec: Some(512),
            artist_name: "Orbital".to_string(),
            genre_name: "Ambient".to_string(),
            created_at: String::new(),
        }
    }

    fn backspace_all(modal: &mut Modal) {
        for _ in 0..16 {
            modal.process_event(KeyEvent::from(KeyCode::Backspace));
        }
    }

    #[test]
    fn missing_required_field_blocks_submit() {
        let mut modal = Modal::artist_form(None);
        let action = modal.process_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(action, ModalAction::None);
        assert_eq!(modal.error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn artist_form_distinguishes_create_and_edit() {
        let mut create = Modal::artist_form(None);
        create.process_event(KeyEvent::from(KeyCode::Char('X')));
        assert_eq!(
            create.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::Submit(AppCommand::CreateArtist {
                name: "X".to_string()
            })
        );

        let artist = Artist {
            artist_id: 3,
            name: "Plaid".to_string(),
        };
        let mut edit = Modal::artist_form(Some(&artist));
        assert_eq!(
            edit.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::Submit(AppCommand::UpdateArtist {
                artist_id: 3,
                name: "Plaid".to_string()
            })
        );
    }

    #[test]
    fn clearing_bpm_submits_none_and_keeps_other_fields() {
        let track = track();
        let mut modal = Modal::track_form(Some(&track), &artists(), &genres());

        // Focus the bpm field and clear it.
        modal.process_event(KeyEvent::from(KeyCode::Tab));
        modal.process_event(KeyEvent::from(KeyCode::Tab));
        modal.process_event(KeyEvent::from(KeyCode::Tab));
        backspace_all(&mut modal);

        assert_eq!(
            modal.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::Submit(AppCommand::UpdateTrack {
                track_id: 7,
                fields: TrackFields {
                    title: "Belfast".to_string(),
                    artist_id: 1,
                    genre_id: 6,
                    bpm: None,
                    duration_sec: Some(512),
                },
            })
        );
    }

    #[test]
    fn non_numeric_bpm_is_coerced_to_none() {
        let track = track();
        let mut modal = Modal::track_form(Some(&track), &artists(), &genres());

        modal.process_event(KeyEvent::from(KeyCode::Tab));
        modal.process_event(KeyEvent::from(KeyCode::Tab));
        modal.process_event(KeyEvent::from(KeyCode::Tab));
        backspace_all(&mut modal);
        modal.process_event(KeyEvent::from(KeyCode::Char('f')));

        match modal.process_event(KeyEvent::from(KeyCode::Enter)) {
            ModalAction::Submit(AppCommand::UpdateTrack { fields, .. }) => {
                assert_eq!(fields.bpm, None);
                assert_eq!(fields.duration_sec, Some(512));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn confirm_delete_submits_on_enter_and_cancels_on_escape() {
        let target = DeleteTarget::Track {
            track_id: 9,
            title: "X".to_string(),
        };

        let mut modal = Modal::confirm_delete(target.clone());
        assert_eq!(
            modal.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::Submit(AppCommand::DeleteTrack { track_id: 9 })
        );

        let mut modal = Modal::confirm_delete(target);
        assert_eq!(
            modal.process_event(KeyEvent::from(KeyCode::Esc)),
            ModalAction::Close
        );
    }

    #[test]
    fn picker_submits_the_highlighted_item() {
        let collections = vec![
            Collection {
                collection_id: 1,
                name: "A".to_string(),
                is_favorite: false,
                created_at: String::new(),
                tracks: Vec::new(),
            },
            Collection {
                collection_id: 2,
                name: "B".to_string(),
                is_favorite: false,
                created_at: String::new(),
                tracks: Vec::new(),
            },
        ];

        let mut modal = Modal::pick_collection(7, &collections);
        modal.process_event(KeyEvent::from(KeyCode::Down));

        assert_eq!(
            modal.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::Submit(AppCommand::AddTrackToCollection {
                collection_id: 2,
                track_id: 7,
            })
        );
    }

    #[test]
    fn empty_picker_cannot_submit() {
        let mut modal = Modal::pick_collection(7, &[]);
        assert_eq!(
            modal.process_event(KeyEvent::from(KeyCode::Enter)),
            ModalAction::None
        );
    }
}
