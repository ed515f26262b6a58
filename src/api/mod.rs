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

//! Catalog data access.
//!
//! This module defines the [`CatalogApi`] seam between the UI and the data it
//! manages. There are two implementations, selected at startup from the
//! application configuration:
//!
//! * [`RemoteCatalog`] issues bearer-token REST calls against a catalog
//!   server.
//! * [`LocalCatalog`] serves the same contract from an in-memory SQLite
//!   store seeded with demo data.
//!
//! The command worker owns a `Box<dyn CatalogApi>`, so the rest of the
//! application never knows which variant it is talking to.

mod http;
mod local;

pub(crate) use http::RemoteCatalog;
pub(crate) use local::LocalCatalog;

use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::{AppConfig, Backend},
    model::{
        AdminTrack, Artist, AuditEntry, Collection, CollectionFields, Genre, ProfileFields,
        Track, TrackFields, TrackQuery, User,
    },
};

/// Failure taxonomy for catalog operations.
///
/// Transport failures, non-success statuses and success responses missing an
/// expected field all collapse to the same user-visible outcome; the variants
/// exist for diagnostics.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl ApiError {
    /// The message shown on a failed login: the server-provided one when the
    /// server answered, a generic one otherwise.
    pub(crate) fn login_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            _ => "Could not reach the catalog server".to_string(),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthSession {
    pub token: String,
    pub user: User,
}

/// The data-access contract shared by the remote and local backends.
pub(crate) trait CatalogApi: Send {
    /// Exchanges credentials for a token and user record. The implementation
    /// is left authenticated on success.
    fn login(&mut self, login: &str, password: &str) -> ApiResult<AuthSession>;

    /// Replaces the bearer token replayed on subsequent calls. `None` drops
    /// authentication.
    fn authenticate(&mut self, token: Option<String>);

    fn update_profile(&mut self, fields: &ProfileFields) -> ApiResult<()>;

    fn genres(&mut self) -> ApiResult<Vec<Genre>>;

    fn artists(&mut self) -> ApiResult<Vec<Artist>>;
    fn create_artist(&mut self, name: &str) -> ApiResult<()>;
    fn update_artist(&mut self, artist_id: i64, name: &str) -> ApiResult<()>;
    fn delete_artist(&mut self, artist_id: i64) -> ApiResult<()>;

    fn tracks(&mut self) -> ApiResult<Vec<Track>>;
    fn track(&mut self, track_id: i64) -> ApiResult<Track>;
    fn create_track(&mut self, fields: &TrackFields) -> ApiResult<()>;
    fn update_track(&mut self, track_id: i64, fields: &TrackFields) -> ApiResult<()>;
    fn delete_track(&mut self, track_id: i64) -> ApiResult<()>;

    fn search_tracks(&mut self, query: &TrackQuery) -> ApiResult<Vec<Track>>;

    fn collections(&mut self) -> ApiResult<Vec<Collection>>;
    fn collection(&mut self, collection_id: i64) -> ApiResult<Collection>;
    fn create_collection(&mut self, fields: &CollectionFields) -> ApiResult<()>;
    fn update_collection(&mut self, collection_id: i64, fields: &CollectionFields)
    -> ApiResult<()>;
    fn delete_collection(&mut self, collection_id: i64) -> ApiResult<()>;
    fn add_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()>;
    fn remove_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()>;

    fn admin_users(&mut self) -> ApiResult<Vec<User>>;
    fn admin_tracks(&mut self) -> ApiResult<Vec<AdminTrack>>;
    fn admin_audit(&mut self) -> ApiResult<Vec<AuditEntry>>;
}

/// Builds the configured backend, already authenticated with the persisted
/// session token when one exists.
pub(crate) fn build_backend(
    config: &AppConfig,
    token: Option<String>,
) -> anyhow::Result<Box<dyn CatalogApi>> {
    match config.backend {
        Backend::Remote => Ok(Box::new(RemoteCatalog::new(&config.server_url, token))),
        Backend::Local => {
            let mut catalog = LocalCatalog::open()?;
            catalog.authenticate(token);
            Ok(Box::new(catalog))
        }
    }
}
