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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! catalog calls from the main UI thread. A dedicated worker loop translates
//! [`AppCommand`] requests into catalog operations and broadcasts the results
//! back to the application via [`AppEvent`]s.
//!
//! The worker owns the catalog backend. Commands arrive on one channel and
//! are processed strictly in order, so there is never more than one catalog
//! call in flight.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::warn;

use crate::{
    actions::events::{AppEvent, Operation},
    api::{self, ApiResult, CatalogApi},
    config::AppConfig,
    model::{CollectionFields, ProfileFields, TrackFields, TrackQuery},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppCommand {
    Login { login: String, password: String },
    Logout,
    UpdateProfile(ProfileFields),

    LoadGenres { generation: u64 },
    LoadArtists { generation: u64 },
    LoadTracks { generation: u64 },
    LoadCollections { generation: u64 },
    SearchTracks { generation: u64, query: TrackQuery },
    LoadAdminUsers { generation: u64 },
    LoadAdminTracks { generation: u64 },
    LoadAdminAudit { generation: u64 },

    CreateArtist { name: String },
    UpdateArtist { artist_id: i64, name: String },
    DeleteArtist { artist_id: i64 },

    FetchTrackForEdit { track_id: i64 },
    CreateTrack(TrackFields),
    UpdateTrack { track_id: i64, fields: TrackFields },
    DeleteTrack { track_id: i64 },

    FetchCollectionForEdit { collection_id: i64 },
    CreateCollection(CollectionFields),
    UpdateCollection { collection_id: i64, fields: CollectionFields },
    DeleteCollection { collection_id: i64 },
    AddTrackToCollection { collection_id: i64, track_id: i64 },
    RemoveTrackFromCollection { collection_id: i64, track_id: i64 },

    FetchTracksForPicker { collection_id: i64 },
    FetchCollectionsForPicker { track_id: i64 },

    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// The worker thread builds its own catalog backend from the configuration
/// and enters a blocking loop, listening for incoming [`AppCommand`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `token` - The persisted session token, replayed on catalog calls.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    token: Option<String>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut catalog =
            api::build_backend(&config, token).expect("Failed to initialise catalog backend");

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(catalog.as_mut(), request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Sends the typed success event for a completed call, or [`OperationFailed`]
/// tagged with the originating operation.
///
/// [`OperationFailed`]: AppEvent::OperationFailed
fn dispatch<T>(
    op: Operation,
    result: ApiResult<T>,
    on_success: impl FnOnce(T) -> AppEvent,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match result {
        Ok(value) => event_tx.send(on_success(value))?,
        Err(e) => {
            warn!("{op:?} failed: {e}");
            event_tx.send(AppEvent::OperationFailed {
                op,
                error: e.to_string(),
            })?;
        }
    }

    Ok(())
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(
    catalog: &mut dyn CatalogApi,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Login { login, password } => match catalog.login(&login, &password) {
            Ok(auth) => event_tx.send(AppEvent::LoggedIn(auth))?,
            Err(e) => {
                warn!("login failed: {e}");
                event_tx.send(AppEvent::LoginFailed(e.login_message()))?;
            }
        },
        AppCommand::Logout => {
            catalog.authenticate(None);
            event_tx.send(AppEvent::LoggedOut)?;
        }
        AppCommand::UpdateProfile(fields) => {
            let result = catalog.update_profile(&fields);
            dispatch(
                Operation::SaveProfile,
                result.map(|()| fields),
                AppEvent::ProfileSaved,
                event_tx,
            )?;
        }

        AppCommand::LoadGenres { generation } => {
            dispatch(
                Operation::LoadGenres,
                catalog.genres(),
                |genres| AppEvent::GenresLoaded { generation, genres },
                event_tx,
            )?;
        }
        AppCommand::LoadArtists { generation } => {
            dispatch(
                Operation::LoadArtists,
                catalog.artists(),
                |artists| AppEvent::ArtistsLoaded {
                    generation,
                    artists,
                },
                event_tx,
            )?;
        }
        AppCommand::LoadTracks { generation } => {
            dispatch(
                Operation::LoadTracks,
                catalog.tracks(),
                |tracks| AppEvent::TracksLoaded { generation, tracks },
                event_tx,
            )?;
        }
        AppCommand::LoadCollections { generation } => {
            dispatch(
                Operation::LoadCollections,
                catalog.collections(),
                |collections| AppEvent::CollectionsLoaded {
                    generation,
                    collections,
                },
                event_tx,
            )?;
        }
        AppCommand::SearchTracks { generation, query } => {
            dispatch(
                Operation::Search,
                catalog.search_tracks(&query),
                |tracks| AppEvent::SearchResults { generation, tracks },
                event_tx,
            )?;
        }
        AppCommand::LoadAdminUsers { generation } => {
            dispatch(
                Operation::LoadAdmin,
                catalog.admin_users(),
                |users| AppEvent::AdminUsersLoaded { generation, users },
                event_tx,
            )?;
        }
        AppCommand::LoadAdminTracks { generation } => {
            dispatch(
                Operation::LoadAdmin,
                catalog.admin_tracks(),
                |tracks| AppEvent::AdminTracksLoaded { generation, tracks },
                event_tx,
            )?;
        }
        AppCommand::LoadAdminAudit { generation } => {
            dispatch(
                Operation::LoadAdmin,
                catalog.admin_audit(),
                |entries| AppEvent::AdminAuditLoaded {
                    generation,
                    entries,
                },
                event_tx,
            )?;
        }

        AppCommand::CreateArtist { name } => {
            let result = catalog.create_artist(&name);
            dispatch(
                Operation::CreateArtist,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::CreateArtist,
                },
                event_tx,
            )?;
        }
        AppCommand::UpdateArtist { artist_id, name } => {
            let result = catalog.update_artist(artist_id, &name);
            dispatch(
                Operation::UpdateArtist,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::UpdateArtist,
                },
                event_tx,
            )?;
        }
        AppCommand::DeleteArtist { artist_id } => {
            let result = catalog.delete_artist(artist_id);
            dispatch(
                Operation::DeleteArtist,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::DeleteArtist,
                },
                event_tx,
            )?;
        }

        AppCommand::FetchTrackForEdit { track_id } => {
            dispatch(
                Operation::FetchTrack,
                catalog.track(track_id),
                AppEvent::TrackFetched,
                event_tx,
            )?;
        }
        AppCommand::CreateTrack(fields) => {
            let result = catalog.create_track(&fields);
            dispatch(
                Operation::CreateTrack,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::CreateTrack,
                },
                event_tx,
            )?;
        }
        AppCommand::UpdateTrack { track_id, fields } => {
            let result = catalog.update_track(track_id, &fields);
            dispatch(
                Operation::UpdateTrack,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::UpdateTrack,
                },
                event_tx,
            )?;
        }
        AppCommand::DeleteTrack { track_id } => {
            let result = catalog.delete_track(track_id);
            dispatch(
                Operation::DeleteTrack,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::DeleteTrack,
                },
                event_tx,
            )?;
        }

        AppCommand::FetchCollectionForEdit { collection_id } => {
            dispatch(
                Operation::FetchCollection,
                catalog.collection(collection_id),
                AppEvent::CollectionFetched,
                event_tx,
            )?;
        }
        AppCommand::CreateCollection(fields) => {
            let result = catalog.create_collection(&fields);
            dispatch(
                Operation::CreateCollection,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::CreateCollection,
                },
                event_tx,
            )?;
        }
        AppCommand::UpdateCollection {
            collection_id,
            fields,
        } => {
            let result = catalog.update_collection(collection_id, &fields);
            dispatch(
                Operation::UpdateCollection,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::UpdateCollection,
                },
                event_tx,
            )?;
        }
        AppCommand::DeleteCollection { collection_id } => {
            let result = catalog.delete_collection(collection_id);
            dispatch(
                Operation::DeleteCollection,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::DeleteCollection,
                },
                event_tx,
            )?;
        }
        AppCommand::AddTrackToCollection {
            collection_id,
            track_id,
        } => {
            let result = catalog.add_collection_track(collection_id, track_id);
            dispatch(
                Operation::AddCollectionTrack,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::AddCollectionTrack,
                },
                event_tx,
            )?;
        }
        AppCommand::RemoveTrackFromCollection {
            collection_id,
            track_id,
        } => {
            let result = catalog.remove_collection_track(collection_id, track_id);
            dispatch(
                Operation::RemoveCollectionTrack,
                result,
                |()| AppEvent::MutationDone {
                    op: Operation::RemoveCollectionTrack,
                },
                event_tx,
            )?;
        }

        AppCommand::FetchTracksForPicker { collection_id } => {
            dispatch(
                Operation::LoadPicker,
                catalog.tracks(),
                |tracks| AppEvent::PickerTracks {
                    collection_id,
                    tracks,
                },
                event_tx,
            )?;
        }
        AppCommand::FetchCollectionsForPicker { track_id } => {
            dispatch(
                Operation::LoadPicker,
                catalog.collections(),
                |collections| AppEvent::PickerCollections {
                    track_id,
                    collections,
                },
                event_tx,
            )?;
        }

        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::api::LocalCatalog;

    #[test]
    fn exit_is_acknowledged_back_through_the_event_channel() {
        let mut catalog = LocalCatalog::in_memory().unwrap();
        let (event_tx, event_rx) = mpsc::channel();

        handle_command(&mut catalog, AppCommand::ExitApplication, &event_tx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
