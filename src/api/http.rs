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

//! REST catalog backend.
//!
//! Implements [`CatalogApi`] over HTTP with JSON bodies and a bearer token.
//! All calls are blocking; they run on the command worker thread, never on
//! the UI thread. Mutation responses signal success by shape: the server
//! answers with a `message` or the created record id, and a success status
//! missing both is treated as a logical failure.

use reqwest::{Method, blocking::Client, blocking::RequestBuilder, blocking::Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    api::{ApiError, ApiResult, AuthSession, CatalogApi},
    model::{
        AdminTrack, Artist, AuditEntry, Collection, CollectionFields, Genre, ProfileFields,
        Track, TrackFields, TrackQuery, User,
    },
};

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The confirmation shape returned by mutation endpoints.
#[derive(serde::Deserialize)]
struct Ack {
    message: Option<String>,
    artist_id: Option<i64>,
    track_id: Option<i64>,
    collection_id: Option<i64>,
}

impl Ack {
    fn confirms(&self) -> bool {
        self.message.is_some()
            || self.artist_id.is_some()
            || self.track_id.is_some()
            || self.collection_id.is_some()
    }
}

pub(crate) struct RemoteCatalog {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteCatalog {
    pub(crate) fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Decodes a response body, translating non-success statuses into
    /// [`ApiError::Status`] with the server-provided message when present.
    fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            return Err(ApiError::Status {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .map_err(|e| ApiError::UnexpectedResponse(e.to_string()))
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send()?;
        Self::decode(response)
    }

    fn expect_ack(response: Response) -> ApiResult<()> {
        let ack: Ack = Self::decode(response)?;
        if ack.confirms() {
            Ok(())
        } else {
            Err(ApiError::UnexpectedResponse(
                "missing confirmation field".to_string(),
            ))
        }
    }
}

impl CatalogApi for RemoteCatalog {
    fn login(&mut self, login: &str, password: &str) -> ApiResult<AuthSession> {
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&json!({ "login": login, "password": password }))
            .send()?;

        let auth: AuthSession = Self::decode(response)?;
        self.token = Some(auth.token.clone());
        Ok(auth)
    }

    fn authenticate(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn update_profile(&mut self, fields: &ProfileFields) -> ApiResult<()> {
        let response = self.request(Method::PUT, "/profile").json(fields).send()?;
        Self::expect_ack(response)
    }

    fn genres(&mut self) -> ApiResult<Vec<Genre>> {
        self.fetch("/genres")
    }

    fn artists(&mut self) -> ApiResult<Vec<Artist>> {
        self.fetch("/artists")
    }

    fn create_artist(&mut self, name: &str) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/artists")
            .json(&json!({ "name": name }))
            .send()?;
        Self::expect_ack(response)
    }

    fn update_artist(&mut self, artist_id: i64, name: &str) -> ApiResult<()> {
        let response = self
            .request(Method::PUT, &format!("/artists/{artist_id}"))
            .json(&json!({ "name": name }))
            .send()?;
        Self::expect_ack(response)
    }

    fn delete_artist(&mut self, artist_id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/artists/{artist_id}"))
            .send()?;
        Self::expect_ack(response)
    }

    fn tracks(&mut self) -> ApiResult<Vec<Track>> {
        self.fetch("/tracks")
    }

    fn track(&mut self, track_id: i64) -> ApiResult<Track> {
        self.fetch(&format!("/tracks/{track_id}"))
    }

    fn create_track(&mut self, fields: &TrackFields) -> ApiResult<()> {
        let response = self.request(Method::POST, "/tracks").json(fields).send()?;
        Self::expect_ack(response)
    }

    fn update_track(&mut self, track_id: i64, fields: &TrackFields) -> ApiResult<()> {
        let response = self
            .request(Method::PUT, &format!("/tracks/{track_id}"))
            .json(fields)
            .send()?;
        Self::expect_ack(response)
    }

    fn delete_track(&mut self, track_id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/tracks/{track_id}"))
            .send()?;
        Self::expect_ack(response)
    }

    fn search_tracks(&mut self, query: &TrackQuery) -> ApiResult<Vec<Track>> {
        let response = self
            .request(Method::GET, "/search/tracks")
            .query(&query.params())
            .send()?;
        Self::decode(response)
    }

    fn collections(&mut self) -> ApiResult<Vec<Collection>> {
        self.fetch("/collections")
    }

    fn collection(&mut self, collection_id: i64) -> ApiResult<Collection> {
        self.fetch(&format!("/collections/{collection_id}"))
    }

    fn create_collection(&mut self, fields: &CollectionFields) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/collections")
            .json(fields)
            .send()?;
        Self::expect_ack(response)
    }

    fn update_collection(
        &mut self,
        collection_id: i64,
        fields: &CollectionFields,
    ) -> ApiResult<()> {
        let response = self
            .request(Method::PUT, &format!("/collections/{collection_id}"))
            .json(fields)
            .send()?;
        Self::expect_ack(response)
    }

    fn delete_collection(&mut self, collection_id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/collections/{collection_id}"))
            .send()?;
        Self::expect_ack(response)
    }

    fn add_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::POST, &format!("/collections/{collection_id}/tracks"))
            .json(&json!({ "track_id": track_id }))
            .send()?;
        Self::expect_ack(response)
    }

    fn remove_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/collections/{collection_id}/tracks/{track_id}"),
            )
            .send()?;
        Self::expect_ack(response)
    }

    fn admin_users(&mut self) -> ApiResult<Vec<User>> {
        self.fetch("/admin/users")
    }

    fn admin_tracks(&mut self) -> ApiResult<Vec<AdminTrack>> {
        self.fetch("/admin/tracks")
    }

    fn admin_audit(&mut self) -> ApiResult<Vec<AuditEntry>> {
        self.fetch("/admin/audit")
    }
}
