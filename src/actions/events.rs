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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog calls) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the key reader, the tick thread and the command worker.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    dispatches commands to the worker, and manages section navigation.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! List results carry the load generation they were requested under; a result
//! from a superseded generation is dropped, so switching sections quickly can
//! never leave a stale list on screen.

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::warn;

use crate::{
    App, Section,
    actions::commands::AppCommand,
    api::AuthSession,
    components::{CollectionsPane, SearchAction},
    modal::{DeleteTarget, Modal, ModalAction},
    model::{
        AdminTrack, Artist, AuditEntry, Collection, Genre, ProfileFields, Track, User,
    },
    render::draw,
    session,
};

/// The operation an outcome event refers to. Used to pick the user-facing
/// message and the list that needs reloading afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Operation {
    SaveProfile,

    CreateArtist,
    UpdateArtist,
    DeleteArtist,

    CreateTrack,
    UpdateTrack,
    DeleteTrack,

    CreateCollection,
    UpdateCollection,
    DeleteCollection,
    AddCollectionTrack,
    RemoveCollectionTrack,

    LoadGenres,
    LoadArtists,
    LoadTracks,
    LoadCollections,
    Search,
    LoadAdmin,
    FetchTrack,
    FetchCollection,
    LoadPicker,
}

impl Operation {
    pub(crate) fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::SaveProfile => Some("Profile updated"),
            Operation::CreateArtist => Some("Artist added"),
            Operation::UpdateArtist => Some("Artist updated"),
            Operation::DeleteArtist => Some("Artist deleted"),
            Operation::CreateTrack => Some("Track added"),
            Operation::UpdateTrack => Some("Track updated"),
            Operation::DeleteTrack => Some("Track deleted"),
            Operation::CreateCollection => Some("Collection created"),
            Operation::UpdateCollection => Some("Collection updated"),
            Operation::DeleteCollection => Some("Collection deleted"),
            Operation::AddCollectionTrack => Some("Track added to collection"),
            Operation::RemoveCollectionTrack => Some("Track removed from collection"),
            _ => None,
        }
    }

    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            Operation::SaveProfile => "Could not save the profile",
            Operation::CreateArtist | Operation::UpdateArtist => "Could not save the artist",
            Operation::DeleteArtist => "Could not delete the artist",
            Operation::CreateTrack | Operation::UpdateTrack => "Could not save the track",
            Operation::DeleteTrack => "Could not delete the track",
            Operation::CreateCollection | Operation::UpdateCollection => {
                "Could not save the collection"
            }
            Operation::DeleteCollection => "Could not delete the collection",
            Operation::AddCollectionTrack => "Could not add the track to the collection",
            Operation::RemoveCollectionTrack => "Could not remove the track from the collection",
            Operation::LoadGenres => "Could not load genres",
            Operation::LoadArtists => "Could not load artists",
            Operation::LoadTracks => "Could not load tracks",
            Operation::LoadCollections => "Could not load collections",
            Operation::Search => "Search failed",
            Operation::LoadAdmin => "Could not load admin data",
            Operation::FetchTrack => "Could not load the track",
            Operation::FetchCollection => "Could not load the collection",
            Operation::LoadPicker => "Could not load the picker choices",
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    LoggedIn(AuthSession),
    LoginFailed(String),
    LoggedOut,
    ProfileSaved(ProfileFields),

    GenresLoaded { generation: u64, genres: Vec<Genre> },
    ArtistsLoaded { generation: u64, artists: Vec<Artist> },
    TracksLoaded { generation: u64, tracks: Vec<Track> },
    CollectionsLoaded { generation: u64, collections: Vec<Collection> },
    SearchResults { generation: u64, tracks: Vec<Track> },
    AdminUsersLoaded { generation: u64, users: Vec<User> },
    AdminTracksLoaded { generation: u64, tracks: Vec<AdminTrack> },
    AdminAuditLoaded { generation: u64, entries: Vec<AuditEntry> },

    TrackFetched(Track),
    CollectionFetched(Collection),
    PickerTracks { collection_id: i64, tracks: Vec<Track> },
    PickerCollections { track_id: i64, collections: Vec<Collection> },

    MutationDone { op: Operation },
    OperationFailed { op: Operation, error: String },

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::Tick => app.notifications.prune_at(Instant::now()),

            AppEvent::LoggedIn(auth) => {
                app.session.token = Some(auth.token);
                app.session.user = Some(auth.user);
                if let Err(e) = session::save_session(&app.session) {
                    warn!("failed to persist session: {e}");
                }

                app.login_view.reset();
                load_genres(app)?;
                show_section(app, Section::Tracks)?;
            }
            AppEvent::LoginFailed(message) => {
                app.login_view.error = Some(message);
            }
            AppEvent::LoggedOut => {
                if let Err(e) = session::clear_session() {
                    warn!("failed to clear persisted session: {e}");
                }
                app.reset_to_login();
            }
            AppEvent::ProfileSaved(fields) => {
                if let Some(user) = app.session.user.as_mut() {
                    user.first_name = Some(fields.first_name).filter(|s| !s.is_empty());
                    user.last_name = Some(fields.last_name).filter(|s| !s.is_empty());
                    user.email = Some(fields.email).filter(|s| !s.is_empty());
                }
                if let Err(e) = session::save_session(&app.session) {
                    warn!("failed to persist session: {e}");
                }

                app.profile_view.editing = false;
                app.notifications.success("Profile updated");
            }

            AppEvent::GenresLoaded { generation, genres } => {
                if app.generations.genres.is_current(generation) {
                    app.search_view.set_genres(&genres);
                    app.genres = genres;
                }
            }
            AppEvent::ArtistsLoaded { generation, artists } => {
                if app.generations.artists.is_current(generation) {
                    app.artists_view.set_artists(artists);
                }
            }
            AppEvent::TracksLoaded { generation, tracks } => {
                if app.generations.tracks.is_current(generation) {
                    app.tracks_view.set_tracks(tracks);
                }
            }
            AppEvent::CollectionsLoaded {
                generation,
                collections,
            } => {
                if app.generations.collections.is_current(generation) {
                    app.collections_view.set_collections(collections);
                }
            }
            AppEvent::SearchResults { generation, tracks } => {
                if app.generations.search.is_current(generation) {
                    app.search_view.set_results(tracks);
                }
            }
            AppEvent::AdminUsersLoaded { generation, users } => {
                if app.generations.admin.is_current(generation) {
                    app.admin_view.set_users(users);
                }
            }
            AppEvent::AdminTracksLoaded { generation, tracks } => {
                if app.generations.admin.is_current(generation) {
                    app.admin_view.set_tracks(tracks);
                }
            }
            AppEvent::AdminAuditLoaded {
                generation,
                entries,
            } => {
                if app.generations.admin.is_current(generation) {
                    app.admin_view.set_audit(entries);
                }
            }

            AppEvent::TrackFetched(track) => {
                app.modal = Some(Modal::track_form(
                    Some(&track),
                    &app.artists_view.artists,
                    &app.genres,
                ));
            }
            AppEvent::CollectionFetched(collection) => {
                app.modal = Some(Modal::collection_form(Some(&collection)));
            }
            AppEvent::PickerTracks {
                collection_id,
                tracks,
            } => open_track_picker(app, collection_id, &tracks),
            AppEvent::PickerCollections {
                track_id,
                collections,
            } => open_collection_picker(app, track_id, &collections),

            AppEvent::MutationDone { op } => {
                app.modal = None;
                if let Some(message) = op.success_message() {
                    app.notifications.success(message);
                }
                reload_after(app, op)?;
            }
            AppEvent::OperationFailed { op, .. } => {
                // The modal, if any, stays open so the input is not lost.
                app.notifications.error(op.failure_message());
            }

            AppEvent::Error(message) => {
                app.notifications.error(message);
            }

            AppEvent::ExitApplication => unreachable!(),
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Switches the active section and triggers the loads it depends on.
///
/// Every entry issues fresh load requests rather than trusting cached lists,
/// matching the always-refetch behaviour of the section router.
pub(crate) fn show_section(app: &mut App, section: Section) -> Result<()> {
    if section == Section::Admin && !app.session.is_admin() {
        return Ok(());
    }

    app.section = section;

    match section {
        Section::Login => {}
        Section::Profile => {
            app.profile_view.load_from(app.session.user.as_ref());
        }
        Section::Tracks => {
            load_tracks(app)?;
            // The add/edit forms need the artist and genre options.
            load_artists(app)?;
        }
        Section::Collections => {
            load_collections(app)?;
        }
        Section::Search => {
            if app.genres.is_empty() {
                load_genres(app)?;
            }
        }
        Section::Artists => {
            load_artists(app)?;
        }
        Section::Admin => {
            app.admin_view.reset();
            let generation = app.generations.admin.begin();
            app.command_tx.send(AppCommand::LoadAdminUsers { generation })?;
        }
    }

    Ok(())
}

fn load_genres(app: &mut App) -> Result<()> {
    let generation = app.generations.genres.begin();
    app.command_tx.send(AppCommand::LoadGenres { generation })?;
    Ok(())
}

fn load_artists(app: &mut App) -> Result<()> {
    let generation = app.generations.artists.begin();
    app.command_tx.send(AppCommand::LoadArtists { generation })?;
    Ok(())
}

fn load_tracks(app: &mut App) -> Result<()> {
    let generation = app.generations.tracks.begin();
    app.command_tx.send(AppCommand::LoadTracks { generation })?;
    Ok(())
}

fn load_collections(app: &mut App) -> Result<()> {
    let generation = app.generations.collections.begin();
    app.command_tx
        .send(AppCommand::LoadCollections { generation })?;
    Ok(())
}

/// Reloads the list a completed mutation belongs to.
fn reload_after(app: &mut App, op: Operation) -> Result<()> {
    match op {
        Operation::CreateArtist | Operation::UpdateArtist | Operation::DeleteArtist => {
            load_artists(app)?;
            // Deleting an artist cascades to its tracks.
            if op == Operation::DeleteArtist {
                load_tracks(app)?;
            }
        }
        Operation::CreateTrack | Operation::UpdateTrack | Operation::DeleteTrack => {
            load_tracks(app)?;
        }
        Operation::CreateCollection
        | Operation::UpdateCollection
        | Operation::DeleteCollection
        | Operation::AddCollectionTrack
        | Operation::RemoveCollectionTrack => {
            load_collections(app)?;
        }
        _ => {}
    }

    Ok(())
}

/// Opens the track picker for a collection. A picker fetch carries no
/// generation, so a slow response may arrive after the user has moved on;
/// it must not pop a modal over another section or over an open dialog.
fn open_track_picker(app: &mut App, collection_id: i64, tracks: &[Track]) {
    if app.section == Section::Collections && app.modal.is_none() {
        app.modal = Some(Modal::pick_track(collection_id, tracks));
    }
}

/// Opens the collection picker for a track, requested from the tracks list
/// or the search results. Same staleness rules as the track picker.
fn open_collection_picker(app: &mut App, track_id: i64, collections: &[Collection]) {
    if matches!(app.section, Section::Tracks | Section::Search) && app.modal.is_none() {
        app.modal = Some(Modal::pick_collection(track_id, collections));
    }
}

fn run_search(app: &mut App) -> Result<()> {
    let generation = app.generations.search.begin();
    app.command_tx.send(AppCommand::SearchTracks {
        generation,
        query: app.search_view.query(),
    })?;
    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Routing order matters: an open modal captures everything, then the login
/// screen, then text-editing contexts, and only then the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if let Some(modal) = app.modal.as_mut() {
        match modal.process_event(key) {
            ModalAction::Close => app.modal = None,
            ModalAction::Submit(command) => app.command_tx.send(command)?,
            ModalAction::None => {}
        }
        return Ok(());
    }

    if app.section == Section::Login {
        if let Some(command) = app.login_view.process_event(key) {
            app.command_tx.send(command)?;
        }
        return Ok(());
    }

    if app.section == Section::Profile && app.profile_view.editing {
        if let Some(command) = app.profile_view.process_event(key) {
            app.command_tx.send(command)?;
        }
        return Ok(());
    }

    if app.section == Section::Search && app.search_view.editing {
        if app.search_view.process_event(key) == SearchAction::Run {
            run_search(app)?;
        }
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        // Quit goes via the worker so any in-flight catalog call finishes
        // first; the Ctrl+q binding bypasses the worker entirely.
        (KeyCode::Char('q'), _) => {
            app.command_tx.send(AppCommand::ExitApplication)?;
            return Ok(());
        }

        (KeyCode::Char('d'), modifiers) if modifiers == KeyModifiers::CONTROL => {
            app.command_tx.send(AppCommand::Logout)?;
            return Ok(());
        }

        (KeyCode::Char('1'), _) => return show_section(app, Section::Tracks),
        (KeyCode::Char('2'), _) => return show_section(app, Section::Collections),
        (KeyCode::Char('3'), _) => return show_section(app, Section::Search),
        (KeyCode::Char('4'), _) => return show_section(app, Section::Artists),
        (KeyCode::Char('5'), _) => return show_section(app, Section::Profile),
        (KeyCode::Char('6'), _) => return show_section(app, Section::Admin),

        _ => {}
    }

    match app.section {
        Section::Login => Ok(()),
        Section::Profile => process_profile_key_event(app, key),
        Section::Tracks => process_tracks_key_event(app, key),
        Section::Collections => process_collections_key_event(app, key),
        Section::Search => process_search_key_event(app, key),
        Section::Artists => process_artists_key_event(app, key),
        Section::Admin => process_admin_key_event(app, key),
    }
}

fn process_profile_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('i') {
        app.profile_view.load_from(app.session.user.as_ref());
        app.profile_view.editing = true;
    }
    Ok(())
}

fn process_artists_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.artists_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.artists_view.previous(),

        KeyCode::Char('a') => app.modal = Some(Modal::artist_form(None)),
        KeyCode::Char('e') => {
            if let Some(artist) = app.artists_view.selected() {
                app.modal = Some(Modal::artist_form(Some(artist)));
            }
        }
        KeyCode::Char('d') => {
            if let Some(artist) = app.artists_view.selected() {
                app.modal = Some(Modal::confirm_delete(DeleteTarget::Artist {
                    artist_id: artist.artist_id,
                    name: artist.name.clone(),
                }));
            }
        }
        KeyCode::Char('r') => load_artists(app)?,

        _ => {}
    }

    Ok(())
}

fn process_tracks_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.tracks_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.tracks_view.previous(),

        KeyCode::Char('a') => {
            app.modal = Some(Modal::track_form(
                None,
                &app.artists_view.artists,
                &app.genres,
            ));
        }
        KeyCode::Char('e') => {
            // Always edit the fresh record, not the cached row.
            if let Some(track) = app.tracks_view.selected() {
                app.command_tx.send(AppCommand::FetchTrackForEdit {
                    track_id: track.track_id,
                })?;
            }
        }
        KeyCode::Char('d') => {
            if let Some(track) = app.tracks_view.selected() {
                app.modal = Some(Modal::confirm_delete(DeleteTarget::Track {
                    track_id: track.track_id,
                    title: track.title.clone(),
                }));
            }
        }
        KeyCode::Char('c') => {
            if let Some(track) = app.tracks_view.selected() {
                app.command_tx.send(AppCommand::FetchCollectionsForPicker {
                    track_id: track.track_id,
                })?;
            }
        }
        KeyCode::Char('r') => load_tracks(app)?,

        _ => {}
    }

    Ok(())
}

fn process_collections_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.collections_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.collections_view.previous(),
        KeyCode::Char('h') | KeyCode::Left => {
            app.collections_view.pane = CollectionsPane::Collections
        }
        KeyCode::Char('l') | KeyCode::Right => app.collections_view.pane = CollectionsPane::Tracks,

        KeyCode::Char('a') => app.modal = Some(Modal::collection_form(None)),
        KeyCode::Char('e') => {
            if let Some(collection) = app.collections_view.selected_collection() {
                app.command_tx.send(AppCommand::FetchCollectionForEdit {
                    collection_id: collection.collection_id,
                })?;
            }
        }
        KeyCode::Char('d') => {
            if let Some(collection) = app.collections_view.selected_collection() {
                app.modal = Some(Modal::confirm_delete(DeleteTarget::Collection {
                    collection_id: collection.collection_id,
                    name: collection.name.clone(),
                }));
            }
        }
        KeyCode::Char('t') => {
            if let Some(collection) = app.collections_view.selected_collection() {
                app.command_tx.send(AppCommand::FetchTracksForPicker {
                    collection_id: collection.collection_id,
                })?;
            }
        }
        KeyCode::Char('x') => {
            if let (Some(collection), Some(member)) = (
                app.collections_view.selected_collection(),
                app.collections_view.selected_track(),
            ) {
                app.command_tx.send(AppCommand::RemoveTrackFromCollection {
                    collection_id: collection.collection_id,
                    track_id: member.track_id,
                })?;
            }
        }
        KeyCode::Char('r') => load_collections(app)?,

        _ => {}
    }

    Ok(())
}

fn process_search_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('i'), _) | (KeyCode::Char('/'), _) => app.search_view.editing = true,

        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.search_view.next(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.search_view.previous(),

        (KeyCode::Enter, _) => run_search(app)?,

        // Reset clears the filters and results without issuing a request.
        (KeyCode::Char('R'), _) => app.search_view.reset(),
        (KeyCode::Char('r'), modifiers) if modifiers == KeyModifiers::CONTROL => {
            app.search_view.reset();
        }

        (KeyCode::Char('c'), _) => {
            if let Some(track) = app.search_view.selected() {
                app.command_tx.send(AppCommand::FetchCollectionsForPicker {
                    track_id: track.track_id,
                })?;
            }
        }

        _ => {}
    }

    Ok(())
}

fn process_admin_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    use crate::components::AdminTab;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.admin_view.next(),
        KeyCode::Char('k') | KeyCode::Up => app.admin_view.previous(),

        KeyCode::Char('u') => switch_admin_tab(app, AdminTab::Users)?,
        KeyCode::Char('t') => switch_admin_tab(app, AdminTab::Tracks)?,
        KeyCode::Char('l') => switch_admin_tab(app, AdminTab::Audit)?,
        KeyCode::Char('r') => {
            let tab = app.admin_view.tab;
            switch_admin_tab(app, tab)?;
        }

        _ => {}
    }

    Ok(())
}

/// Activates an admin tab. The tab's data is refetched on every switch, never
/// served from what was loaded the last time the tab was open.
fn switch_admin_tab(app: &mut App, tab: crate::components::AdminTab) -> Result<()> {
    use crate::components::AdminTab;

    app.admin_view.switch_tab(tab);
    let generation = app.generations.admin.begin();

    let command = match tab {
        AdminTab::Users => AppCommand::LoadAdminUsers { generation },
        AdminTab::Tracks => AppCommand::LoadAdminTracks { generation },
        AdminTab::Audit => AppCommand::LoadAdminAudit { generation },
    };
    app.command_tx.send(command)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{components::AdminTab, config::AppConfig, modal::ModalMode, session::Session};

    fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let app = App::new(AppConfig::default(), Session::default(), command_tx);
        (app, command_rx)
    }

    #[test]
    fn reactivating_the_same_admin_tab_refetches() {
        let (mut app, command_rx) = test_app();

        switch_admin_tab(&mut app, AdminTab::Tracks).unwrap();
        switch_admin_tab(&mut app, AdminTab::Tracks).unwrap();

        let (
            AppCommand::LoadAdminTracks { generation: first },
            AppCommand::LoadAdminTracks { generation: second },
        ) = (
            command_rx.try_recv().unwrap(),
            command_rx.try_recv().unwrap(),
        )
        else {
            panic!("expected two admin track loads");
        };
        assert_ne!(first, second);
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn each_admin_tab_requests_its_own_data() {
        let (mut app, command_rx) = test_app();

        switch_admin_tab(&mut app, AdminTab::Users).unwrap();
        switch_admin_tab(&mut app, AdminTab::Audit).unwrap();

        assert!(matches!(
            command_rx.try_recv(),
            Ok(AppCommand::LoadAdminUsers { .. })
        ));
        assert!(matches!(
            command_rx.try_recv(),
            Ok(AppCommand::LoadAdminAudit { .. })
        ));
    }

    #[test]
    fn the_track_picker_opens_on_the_collections_section() {
        let (mut app, _command_rx) = test_app();
        app.section = Section::Collections;

        open_track_picker(&mut app, 1, &[]);

        assert!(app.modal.is_some());
    }

    #[test]
    fn a_late_track_picker_does_not_open_over_another_section() {
        let (mut app, _command_rx) = test_app();
        app.section = Section::Search;

        open_track_picker(&mut app, 1, &[]);

        assert!(app.modal.is_none());
    }

    #[test]
    fn a_late_collection_picker_does_not_replace_an_open_dialog() {
        let (mut app, _command_rx) = test_app();
        app.section = Section::Tracks;
        app.modal = Some(Modal::artist_form(None));

        open_collection_picker(&mut app, 1, &[]);

        let modal = app.modal.expect("the artist form should still be open");
        assert!(matches!(modal.mode, ModalMode::ArtistForm { .. }));
    }
}
