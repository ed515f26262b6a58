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

//! Domain models and core data structures.
//!
//! This module defines the records exchanged with the catalog backend: users,
//! artists, genres, tracks, collections and audit log entries. They are plain
//! serde records, passed through verbatim; the client performs no validation
//! beyond required-field presence checks in the forms.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Preferred display name, falling back to the login when no first name
    /// has been set.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or(&self.login);
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", first, last).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub artist_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub track_id: i64,
    pub title: String,
    pub artist_id: i64,
    pub genre_id: i64,
    #[serde(default)]
    pub bpm: Option<u32>,
    #[serde(default)]
    pub duration_sec: Option<u32>,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub genre_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// The editable subset of a track, used as the write payload for create and
/// update calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFields {
    pub title: String,
    pub artist_id: i64,
    pub genre_id: i64,
    pub bpm: Option<u32>,
    pub duration_sec: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionTrack {
    pub track_id: i64,
    pub title: String,
    #[serde(default)]
    pub artist_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: i64,
    pub name: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tracks: Vec<CollectionTrack>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionFields {
    pub name: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A track row in the admin system-wide listing, carrying the owning-user
/// attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminTrack {
    pub track_id: i64,
    pub title: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub genre_name: String,
    #[serde(default)]
    pub bpm: Option<u32>,
    #[serde(default)]
    pub duration_sec: Option<u32>,
    #[serde(default)]
    pub user_login: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

impl AdminTrack {
    pub fn owner_label(&self) -> String {
        match (&self.user_login, self.user_id) {
            (Some(login), _) => login.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub log_id: i64,
    #[serde(default)]
    pub user_login: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub operation_type: String,
    pub table_name: String,
    #[serde(default)]
    pub record_id: Option<i64>,
    #[serde(default)]
    pub operation_time: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn user_label(&self) -> String {
        match (&self.user_login, self.user_id) {
            (Some(login), _) => login.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => String::new(),
        }
    }

    /// The free-form details payload rendered as serialized text, or an empty
    /// string when absent.
    pub fn details_text(&self) -> String {
        self.details
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

/// The five optional search filters. An empty field means "no constraint",
/// never "match empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackQuery {
    pub title: String,
    pub artist: String,
    pub genre_id: Option<i64>,
    pub bpm: String,
    pub duration: String,
}

impl TrackQuery {
    /// Builds the query parameter list, containing only the filters with
    /// non-empty values. All filters empty yields an empty list, so the
    /// endpoint returns its unfiltered result set.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let title = self.title.trim();
        if !title.is_empty() {
            params.push(("title", title.to_string()));
        }

        let artist = self.artist.trim();
        if !artist.is_empty() {
            params.push(("artist", artist.to_string()));
        }

        if let Some(genre_id) = self.genre_id {
            params.push(("genre_id", genre_id.to_string()));
        }

        let bpm = self.bpm.trim();
        if !bpm.is_empty() {
            params.push(("bpm", bpm.to_string()));
        }

        let duration = self.duration.trim();
        if !duration.is_empty() {
            params.push(("duration", duration.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_query_has_no_params() {
        let query = TrackQuery::default();
        assert!(query.params().is_empty());
    }

    #[test]
    fn blank_filters_are_skipped() {
        let query = TrackQuery {
            title: "  ".to_string(),
            artist: "Orbital".to_string(),
            genre_id: None,
            bpm: String::new(),
            duration: " 355 ".to_string(),
        };

        let params = query.params();
        assert_eq!(
            params,
            vec![
                ("artist", "Orbital".to_string()),
                ("duration", "355".to_string()),
            ]
        );
    }

    #[test]
    fn all_filters_present() {
        let query = TrackQuery {
            title: "Halcyon".to_string(),
            artist: "Orbital".to_string(),
            genre_id: Some(3),
            bpm: "120".to_string(),
            duration: "355".to_string(),
        };

        assert_eq!(query.params().len(), 5);
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let user = User {
            user_id: 1,
            login: "demo".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            avatar_url: None,
            is_admin: false,
            created_at: None,
        };

        assert_eq!(user.display_name(), "demo");
    }

    #[test]
    fn audit_details_serialized_when_present() {
        let entry = AuditEntry {
            log_id: 1,
            user_login: Some("demo".to_string()),
            user_id: Some(1),
            operation_type: "INSERT".to_string(),
            table_name: "artists".to_string(),
            record_id: Some(7),
            operation_time: "2026-01-01 00:00:00".to_string(),
            details: Some(serde_json::json!({ "name": "Orbital" })),
        };

        assert_eq!(entry.details_text(), r#"{"name":"Orbital"}"#);
        assert_eq!(entry.user_label(), "demo");
    }
}
