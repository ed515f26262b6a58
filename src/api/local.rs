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

//! Local catalog backend.
//!
//! Implements [`CatalogApi`] against an in-memory SQLite store, so the
//! application is fully usable without a server. The store is seeded with
//! demo users, genres, artists, tracks and collections on startup; the
//! artist list is additionally persisted in its own configuration slot and
//! restored on the next start.
//!
//! Any non-empty credentials are accepted. Tokens are derived from the login
//! with xxh3, so a persisted session from a previous run matches the
//! reseeded store. Every mutation appends an audit log entry, visible in the
//! admin audit view.

use rusqlite::{Connection, OptionalExtension, params, params_from_iter, types::Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use xxhash_rust::xxh3::xxh3_64;

use crate::{
    api::{ApiError, ApiResult, AuthSession, CatalogApi},
    config::APP_NAME,
    model::{
        AdminTrack, Artist, AuditEntry, Collection, CollectionFields, CollectionTrack, Genre,
        ProfileFields, Track, TrackFields, TrackQuery, User,
    },
};

const ARTISTS_SLOT: &str = "artists";

/// The artist list persisted between runs, mirroring the store's extra
/// storage slot in the mocked variant of the original application.
#[derive(Serialize, Deserialize, Default)]
struct SavedArtists {
    artists: Vec<Artist>,
}

pub(crate) struct LocalCatalog {
    conn: Connection,
    token: Option<String>,
    persist_artists: bool,
}

fn derive_token(login: &str) -> String {
    format!("local-{:016x}", xxh3_64(login.as_bytes()))
}

impl LocalCatalog {
    /// Opens the demo store with artist persistence enabled.
    pub(crate) fn open() -> ApiResult<Self> {
        let saved = confy::load::<SavedArtists>(APP_NAME, Some(ARTISTS_SLOT))
            .map(|s| s.artists)
            .unwrap_or_default();
        Self::build(saved, true)
    }

    /// Opens a throwaway store that never touches the filesystem.
    #[cfg(test)]
    pub(crate) fn in_memory() -> ApiResult<Self> {
        Self::build(Vec::new(), false)
    }

    fn build(saved_artists: Vec<Artist>, persist_artists: bool) -> ApiResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.set_prepared_statement_cache_capacity(100);

        create_schema(&conn)?;
        seed(&conn, &saved_artists)?;

        Ok(Self {
            conn,
            token: None,
            persist_artists,
        })
    }

    fn current_user_id(&self) -> ApiResult<i64> {
        let token = self.token.as_deref().ok_or(ApiError::Status {
            code: 401,
            message: "not authenticated".to_string(),
        })?;

        self.conn
            .prepare_cached("SELECT user_id FROM users WHERE token = ?1")?
            .query_row([token], |row| row.get(0))
            .optional()?
            .ok_or(ApiError::Status {
                code: 401,
                message: "unknown session token".to_string(),
            })
    }

    fn require_admin(&self) -> ApiResult<i64> {
        let user_id = self.current_user_id()?;
        let is_admin: bool = self
            .conn
            .prepare_cached("SELECT is_admin FROM users WHERE user_id = ?1")?
            .query_row([user_id], |row| row.get(0))?;

        if is_admin {
            Ok(user_id)
        } else {
            Err(ApiError::Status {
                code: 403,
                message: "admin access required".to_string(),
            })
        }
    }

    fn audit(
        &self,
        user_id: i64,
        operation: &str,
        table: &str,
        record_id: i64,
        details: serde_json::Value,
    ) -> ApiResult<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO audit_log (user_id, operation_type, table_name, record_id, details)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?
            .execute(params![user_id, operation, table, record_id, details.to_string()])?;
        Ok(())
    }

    /// Dumps the artists table into its configuration slot. Failures are
    /// logged, never surfaced: persistence is best-effort.
    fn store_artists(&self) {
        if !self.persist_artists {
            return;
        }

        let artists = self
            .conn
            .prepare_cached("SELECT artist_id, name FROM artists ORDER BY artist_id")
            .and_then(|mut stmt| {
                stmt.query_map([], |row| {
                    Ok(Artist {
                        artist_id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()
            });

        match artists {
            Ok(artists) => {
                if let Err(e) = confy::store(APP_NAME, Some(ARTISTS_SLOT), SavedArtists { artists })
                {
                    warn!("failed to persist artist list: {e}");
                }
            }
            Err(e) => warn!("failed to read artist list for persistence: {e}"),
        }
    }

    fn user_by_id(&self, user_id: i64) -> ApiResult<User> {
        self.conn
            .prepare_cached(
                "SELECT user_id, login, first_name, last_name, email, avatar_url, is_admin,
                        created_at
                 FROM users WHERE user_id = ?1",
            )?
            .query_row([user_id], row_to_user)
            .optional()?
            .ok_or(ApiError::Status {
                code: 404,
                message: "user not found".to_string(),
            })
    }

    fn collection_members(&self, collection_id: i64) -> ApiResult<Vec<CollectionTrack>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT ct.track_id, t.title, a.name
             FROM collection_tracks ct
             JOIN tracks t ON t.track_id = ct.track_id
             JOIN artists a ON a.artist_id = t.artist_id
             WHERE ct.collection_id = ?1
             ORDER BY ct.rowid",
        )?;

        let members = stmt
            .query_map([collection_id], |row| {
                Ok(CollectionTrack {
                    track_id: row.get(0)?,
                    title: row.get(1)?,
                    artist_name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(members)
    }
}

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        user_id: row.get(0)?,
        login: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        avatar_url: row.get(5)?,
        is_admin: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn row_to_track(row: &rusqlite::Row<'_>) -> rusqlite::Result<Track> {
    Ok(Track {
        track_id: row.get(0)?,
        title: row.get(1)?,
        artist_id: row.get(2)?,
        genre_id: row.get(3)?,
        bpm: row.get(4)?,
        duration_sec: row.get(5)?,
        artist_name: row.get(6)?,
        genre_name: row.get(7)?,
        created_at: row.get(8)?,
    })
}

const TRACK_COLUMNS: &str = "t.track_id, t.title, t.artist_id, t.genre_id, t.bpm,
        t.duration_sec, a.name, g.name, t.created_at
     FROM tracks t
     JOIN artists a ON a.artist_id = t.artist_id
     JOIN genres g ON g.genre_id = t.genre_id";

/// Create the store schema.
///
/// Mirrors the entities the catalog server exposes: users, genres, artists,
/// tracks, collections with their membership table, and the audit log.
/// Foreign keys cascade so deleting an artist removes its tracks, matching
/// the warning shown in the delete confirmation.
fn create_schema(conn: &Connection) -> ApiResult<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            login TEXT NOT NULL UNIQUE,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            avatar_url TEXT,
            is_admin INTEGER NOT NULL DEFAULT 0,
            token TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS genres (
            genre_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS artists (
            artist_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users (user_id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_artists_user_id ON artists (user_id);

        CREATE TABLE IF NOT EXISTS tracks (
            track_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            artist_id INTEGER NOT NULL,
            genre_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            bpm INTEGER,
            duration_sec INTEGER,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users (user_id) ON DELETE CASCADE,
            FOREIGN KEY (artist_id) REFERENCES artists (artist_id) ON DELETE CASCADE,
            FOREIGN KEY (genre_id) REFERENCES genres (genre_id)
        );

        CREATE INDEX IF NOT EXISTS idx_tracks_user_id ON tracks (user_id);
        CREATE INDEX IF NOT EXISTS idx_tracks_artist_id ON tracks (artist_id);

        CREATE TABLE IF NOT EXISTS collections (
            collection_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users (user_id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS collection_tracks (
            collection_id INTEGER NOT NULL,
            track_id INTEGER NOT NULL,
            UNIQUE (collection_id, track_id),
            FOREIGN KEY (collection_id) REFERENCES collections (collection_id)
                ON DELETE CASCADE,
            FOREIGN KEY (track_id) REFERENCES tracks (track_id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS audit_log (
            log_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            operation_type TEXT NOT NULL,
            table_name TEXT NOT NULL,
            record_id INTEGER,
            operation_time TEXT NOT NULL DEFAULT (datetime('now')),
            details TEXT
        );

        COMMIT;",
    )?;

    Ok(())
}

/// Seeds the demo data: two users (one admin), the genre reference list,
/// artists (restored from the persisted slot when available), a handful of
/// tracks and two collections.
fn seed(conn: &Connection, saved_artists: &[Artist]) -> ApiResult<()> {
    conn.execute(
        "INSERT INTO users (login, first_name, last_name, email, avatar_url, is_admin, token)
         VALUES ('demo', 'Demo', 'User', 'demo@example.com', NULL, 1, ?1)",
        [derive_token("demo")],
    )?;
    conn.execute(
        "INSERT INTO users (login, first_name, last_name, email, avatar_url, is_admin, token)
         VALUES ('guest', NULL, NULL, NULL, NULL, 0, ?1)",
        [derive_token("guest")],
    )?;

    for name in [
        "Electronic",
        "Rock",
        "Jazz",
        "Hip-Hop",
        "Classical",
        "Ambient",
        "House",
        "Techno",
    ] {
        conn.execute("INSERT INTO genres (name) VALUES (?1)", [name])?;
    }

    if saved_artists.is_empty() {
        for name in ["Orbital", "Boards of Canada", "Aphex Twin"] {
            conn.execute(
                "INSERT INTO artists (user_id, name) VALUES (1, ?1)",
                [name],
            )?;
        }
    } else {
        for artist in saved_artists {
            conn.execute(
                "INSERT OR IGNORE INTO artists (artist_id, user_id, name) VALUES (?1, 1, ?2)",
                params![artist.artist_id, artist.name],
            )?;
        }
    }

    let seed_tracks: [(&str, i64, i64, Option<i64>, Option<i64>); 4] = [
        ("Halcyon + On + On", 1, 1, Some(120), Some(565)),
        ("Roygbiv", 2, 6, Some(85), Some(148)),
        ("Windowlicker", 3, 1, Some(126), Some(365)),
        ("Belfast", 1, 6, None, Some(512)),
    ];

    for (title, artist_id, genre_id, bpm, duration_sec) in seed_tracks {
        let artist_exists: Option<i64> = conn
            .prepare("SELECT artist_id FROM artists WHERE artist_id = ?1")?
            .query_row([artist_id], |row| row.get(0))
            .optional()?;
        if artist_exists.is_none() {
            continue;
        }

        conn.execute(
            "INSERT INTO tracks (user_id, artist_id, genre_id, title, bpm, duration_sec)
             VALUES (1, ?1, ?2, ?3, ?4, ?5)",
            params![artist_id, genre_id, title, bpm, duration_sec],
        )?;
    }

    conn.execute(
        "INSERT INTO collections (user_id, name, is_favorite) VALUES (1, 'Favourites', 1)",
        [],
    )?;
    conn.execute(
        "INSERT INTO collections (user_id, name, is_favorite) VALUES (1, 'Late Night', 0)",
        [],
    )?;
    conn.execute(
        "INSERT OR IGNORE INTO collection_tracks (collection_id, track_id)
         SELECT 1, track_id FROM tracks WHERE track_id IN (1, 3)",
        [],
    )?;

    Ok(())
}

impl CatalogApi for LocalCatalog {
    fn login(&mut self, login: &str, password: &str) -> ApiResult<AuthSession> {
        let login = login.trim();
        if login.is_empty() || password.trim().is_empty() {
            return Err(ApiError::Status {
                code: 400,
                message: "Login and password are required".to_string(),
            });
        }

        let existing: Option<i64> = self
            .conn
            .prepare_cached("SELECT user_id FROM users WHERE login = ?1")?
            .query_row([login], |row| row.get(0))
            .optional()?;

        let user_id = match existing {
            Some(id) => id,
            None => {
                self.conn.execute(
                    "INSERT INTO users (login, is_admin) VALUES (?1, 0)",
                    [login],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        let token = derive_token(login);
        self.conn.execute(
            "UPDATE users SET token = ?1 WHERE user_id = ?2",
            params![token, user_id],
        )?;

        self.token = Some(token.clone());
        self.audit(user_id, "LOGIN", "users", user_id, json!({ "login": login }))?;

        Ok(AuthSession {
            token,
            user: self.user_by_id(user_id)?,
        })
    }

    fn authenticate(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn update_profile(&mut self, fields: &ProfileFields) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        self.conn.execute(
            "UPDATE users SET first_name = ?1, last_name = ?2, email = ?3 WHERE user_id = ?4",
            params![fields.first_name, fields.last_name, fields.email, user_id],
        )?;
        self.audit(
            user_id,
            "UPDATE",
            "users",
            user_id,
            json!({ "email": fields.email }),
        )?;
        Ok(())
    }

    fn genres(&mut self) -> ApiResult<Vec<Genre>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT genre_id, name FROM genres ORDER BY genre_id")?;

        let genres = stmt
            .query_map([], |row| {
                Ok(Genre {
                    genre_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn artists(&mut self) -> ApiResult<Vec<Artist>> {
        let user_id = self.current_user_id()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT artist_id, name FROM artists WHERE user_id = ?1 ORDER BY name COLLATE NOCASE",
        )?;

        let artists = stmt
            .query_map([user_id], |row| {
                Ok(Artist {
                    artist_id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(artists)
    }

    fn create_artist(&mut self, name: &str) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        self.conn.execute(
            "INSERT INTO artists (user_id, name) VALUES (?1, ?2)",
            params![user_id, name],
        )?;
        let artist_id = self.conn.last_insert_rowid();
        self.audit(user_id, "INSERT", "artists", artist_id, json!({ "name": name }))?;
        self.store_artists();
        Ok(())
    }

    fn update_artist(&mut self, artist_id: i64, name: &str) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "UPDATE artists SET name = ?1 WHERE artist_id = ?2 AND user_id = ?3",
            params![name, artist_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "artist not found".to_string(),
            });
        }
        self.audit(user_id, "UPDATE", "artists", artist_id, json!({ "name": name }))?;
        self.store_artists();
        Ok(())
    }

    fn delete_artist(&mut self, artist_id: i64) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "DELETE FROM artists WHERE artist_id = ?1 AND user_id = ?2",
            params![artist_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "artist not found".to_string(),
            });
        }
        self.audit(user_id, "DELETE", "artists", artist_id, json!({}))?;
        self.store_artists();
        Ok(())
    }

    fn tracks(&mut self) -> ApiResult<Vec<Track>> {
        let user_id = self.current_user_id()?;
        let sql = format!(
            "SELECT {TRACK_COLUMNS} WHERE t.user_id = ?1 ORDER BY t.created_at DESC, t.track_id DESC"
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;

        let tracks = stmt
            .query_map([user_id], row_to_track)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tracks)
    }

    fn track(&mut self, track_id: i64) -> ApiResult<Track> {
        let user_id = self.current_user_id()?;
        let sql = format!("SELECT {TRACK_COLUMNS} WHERE t.user_id = ?1 AND t.track_id = ?2");

        self.conn
            .prepare_cached(&sql)?
            .query_row(params![user_id, track_id], row_to_track)
            .optional()?
            .ok_or(ApiError::Status {
                code: 404,
                message: "track not found".to_string(),
            })
    }

    fn create_track(&mut self, fields: &TrackFields) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        self.conn.execute(
            "INSERT INTO tracks (user_id, artist_id, genre_id, title, bpm, duration_sec)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                user_id,
                fields.artist_id,
                fields.genre_id,
                fields.title,
                fields.bpm,
                fields.duration_sec
            ],
        )?;
        let track_id = self.conn.last_insert_rowid();
        self.audit(
            user_id,
            "INSERT",
            "tracks",
            track_id,
            json!({ "title": fields.title }),
        )?;
        Ok(())
    }

    fn update_track(&mut self, track_id: i64, fields: &TrackFields) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "UPDATE tracks SET title = ?1, artist_id = ?2, genre_id = ?3, bpm = ?4,
                    duration_sec = ?5
             WHERE track_id = ?6 AND user_id = ?7",
            params![
                fields.title,
                fields.artist_id,
                fields.genre_id,
                fields.bpm,
                fields.duration_sec,
                track_id,
                user_id
            ],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "track not found".to_string(),
            });
        }
        self.audit(
            user_id,
            "UPDATE",
            "tracks",
            track_id,
            json!({ "title": fields.title }),
        )?;
        Ok(())
    }

    fn delete_track(&mut self, track_id: i64) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "DELETE FROM tracks WHERE track_id = ?1 AND user_id = ?2",
            params![track_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "track not found".to_string(),
            });
        }
        self.audit(user_id, "DELETE", "tracks", track_id, json!({}))?;
        Ok(())
    }

    /// Searches the shared catalog across all users. Filters with no value
    /// add no constraint; non-numeric bpm or duration input is ignored
    /// rather than rejected.
    fn search_tracks(&mut self, query: &TrackQuery) -> ApiResult<Vec<Track>> {
        self.current_user_id()?;

        let mut sql = format!("SELECT {TRACK_COLUMNS} WHERE 1=1");
        let mut values: Vec<Value> = Vec::new();

        let title = query.title.trim();
        if !title.is_empty() {
            sql.push_str(&format!(" AND t.title LIKE ?{}", values.len() + 1));
            values.push(Value::Text(format!("%{title}%")));
        }

        let artist = query.artist.trim();
        if !artist.is_empty() {
            sql.push_str(&format!(" AND a.name LIKE ?{}", values.len() + 1));
            values.push(Value::Text(format!("%{artist}%")));
        }

        if let Some(genre_id) = query.genre_id {
            sql.push_str(&format!(" AND t.genre_id = ?{}", values.len() + 1));
            values.push(Value::Integer(genre_id));
        }

        if let Ok(bpm) = query.bpm.trim().parse::<i64>() {
            sql.push_str(&format!(" AND t.bpm = ?{}", values.len() + 1));
            values.push(Value::Integer(bpm));
        }

        if let Ok(duration) = query.duration.trim().parse::<i64>() {
            sql.push_str(&format!(" AND t.duration_sec = ?{}", values.len() + 1));
            values.push(Value::Integer(duration));
        }

        sql.push_str(" ORDER BY t.title COLLATE NOCASE");

        let mut stmt = self.conn.prepare(&sql)?;
        let tracks = stmt
            .query_map(params_from_iter(values), row_to_track)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tracks)
    }

    fn collections(&mut self) -> ApiResult<Vec<Collection>> {
        let user_id = self.current_user_id()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT collection_id, name, is_favorite, created_at
             FROM collections WHERE user_id = ?1 ORDER BY created_at, collection_id",
        )?;

        let mut collections = stmt
            .query_map([user_id], |row| {
                Ok(Collection {
                    collection_id: row.get(0)?,
                    name: row.get(1)?,
                    is_favorite: row.get(2)?,
                    created_at: row.get(3)?,
                    tracks: Vec::new(),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        for collection in &mut collections {
            collection.tracks = self.collection_members(collection.collection_id)?;
        }

        Ok(collections)
    }

    fn collection(&mut self, collection_id: i64) -> ApiResult<Collection> {
        let user_id = self.current_user_id()?;
        let mut collection = self
            .conn
            .prepare_cached(
                "SELECT collection_id, name, is_favorite, created_at
                 FROM collections WHERE collection_id = ?1 AND user_id = ?2",
            )?
            .query_row(params![collection_id, user_id], |row| {
                Ok(Collection {
                    collection_id: row.get(0)?,
                    name: row.get(1)?,
                    is_favorite: row.get(2)?,
                    created_at: row.get(3)?,
                    tracks: Vec::new(),
                })
            })
            .optional()?
            .ok_or(ApiError::Status {
                code: 404,
                message: "collection not found".to_string(),
            })?;

        collection.tracks = self.collection_members(collection.collection_id)?;
        Ok(collection)
    }

    fn create_collection(&mut self, fields: &CollectionFields) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        self.conn.execute(
            "INSERT INTO collections (user_id, name, is_favorite) VALUES (?1, ?2, ?3)",
            params![user_id, fields.name, fields.is_favorite],
        )?;
        let collection_id = self.conn.last_insert_rowid();
        self.audit(
            user_id,
            "INSERT",
            "collections",
            collection_id,
            json!({ "name": fields.name }),
        )?;
        Ok(())
    }

    fn update_collection(
        &mut self,
        collection_id: i64,
        fields: &CollectionFields,
    ) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "UPDATE collections SET name = ?1, is_favorite = ?2
             WHERE collection_id = ?3 AND user_id = ?4",
            params![fields.name, fields.is_favorite, collection_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "collection not found".to_string(),
            });
        }
        self.audit(
            user_id,
            "UPDATE",
            "collections",
            collection_id,
            json!({ "name": fields.name }),
        )?;
        Ok(())
    }

    fn delete_collection(&mut self, collection_id: i64) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "DELETE FROM collections WHERE collection_id = ?1 AND user_id = ?2",
            params![collection_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "collection not found".to_string(),
            });
        }
        self.audit(user_id, "DELETE", "collections", collection_id, json!({}))?;
        Ok(())
    }

    fn add_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let owned: Option<i64> = self
            .conn
            .prepare_cached(
                "SELECT collection_id FROM collections WHERE collection_id = ?1 AND user_id = ?2",
            )?
            .query_row(params![collection_id, user_id], |row| row.get(0))
            .optional()?;
        if owned.is_none() {
            return Err(ApiError::Status {
                code: 404,
                message: "collection not found".to_string(),
            });
        }

        self.conn.execute(
            "INSERT OR IGNORE INTO collection_tracks (collection_id, track_id) VALUES (?1, ?2)",
            params![collection_id, track_id],
        )?;
        self.audit(
            user_id,
            "INSERT",
            "collection_tracks",
            collection_id,
            json!({ "track_id": track_id }),
        )?;
        Ok(())
    }

    fn remove_collection_track(&mut self, collection_id: i64, track_id: i64) -> ApiResult<()> {
        let user_id = self.current_user_id()?;
        let changed = self.conn.execute(
            "DELETE FROM collection_tracks
             WHERE collection_id = ?1 AND track_id = ?2
               AND collection_id IN
                   (SELECT collection_id FROM collections WHERE user_id = ?3)",
            params![collection_id, track_id, user_id],
        )?;
        if changed == 0 {
            return Err(ApiError::Status {
                code: 404,
                message: "track not in collection".to_string(),
            });
        }
        self.audit(
            user_id,
            "DELETE",
            "collection_tracks",
            collection_id,
            json!({ "track_id": track_id }),
        )?;
        Ok(())
    }

    fn admin_users(&mut self) -> ApiResult<Vec<User>> {
        self.require_admin()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT user_id, login, first_name, last_name, email, avatar_url, is_admin,
                    created_at
             FROM users ORDER BY user_id",
        )?;

        let users = stmt
            .query_map([], row_to_user)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    fn admin_tracks(&mut self) -> ApiResult<Vec<AdminTrack>> {
        self.require_admin()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT t.track_id, t.title, a.name, g.name, t.bpm, t.duration_sec,
                    u.login, u.user_id, t.created_at
             FROM tracks t
             JOIN artists a ON a.artist_id = t.artist_id
             JOIN genres g ON g.genre_id = t.genre_id
             JOIN users u ON u.user_id = t.user_id
             ORDER BY t.track_id",
        )?;

        let tracks = stmt
            .query_map([], |row| {
                Ok(AdminTrack {
                    track_id: row.get(0)?,
                    title: row.get(1)?,
                    artist_name: row.get(2)?,
                    genre_name: row.get(3)?,
                    bpm: row.get(4)?,
                    duration_sec: row.get(5)?,
                    user_login: row.get(6)?,
                    user_id: row.get(7)?,
                    created_at: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tracks)
    }

    fn admin_audit(&mut self) -> ApiResult<Vec<AuditEntry>> {
        self.require_admin()?;
        let mut stmt = self.conn.prepare_cached(
            "SELECT l.log_id, u.login, l.user_id, l.operation_type, l.table_name,
                    l.record_id, l.operation_time, l.details
             FROM audit_log l
             LEFT JOIN users u ON u.user_id = l.user_id
             ORDER BY l.log_id DESC",
        )?;

        let entries = stmt
            .query_map([], |row| {
                let details: Option<String> = row.get(7)?;
                Ok(AuditEntry {
                    log_id: row.get(0)?,
                    user_login: row.get(1)?,
                    user_id: row.get(2)?,
                    operation_type: row.get(3)?,
                    table_name: row.get(4)?,
                    record_id: row.get(5)?,
                    operation_time: row.get(6)?,
                    details: details.and_then(|d| serde_json::from_str(&d).ok()),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn logged_in(login: &str) -> LocalCatalog {
        let mut catalog = LocalCatalog::in_memory().unwrap();
        catalog.login(login, "secret").unwrap();
        catalog
    }

    #[test]
    fn login_requires_credentials() {
        let mut catalog = LocalCatalog::in_memory().unwrap();
        let err = catalog.login("", "secret").unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 400, .. }));
    }

    #[test]
    fn login_token_is_deterministic() {
        let mut first = LocalCatalog::in_memory().unwrap();
        let mut second = LocalCatalog::in_memory().unwrap();

        let a = first.login("demo", "secret").unwrap();
        let b = second.login("demo", "other").unwrap();

        assert_eq!(a.token, b.token);
        assert!(a.user.is_admin);
    }

    #[test]
    fn persisted_token_survives_restart() {
        let token = {
            let mut catalog = LocalCatalog::in_memory().unwrap();
            catalog.login("demo", "secret").unwrap().token
        };

        // A fresh store reseeds the demo users with the same derived token.
        let mut catalog = LocalCatalog::in_memory().unwrap();
        catalog.authenticate(Some(token));
        assert!(!catalog.artists().unwrap().is_empty());
    }

    #[test]
    fn unknown_login_gets_a_fresh_account() {
        let mut catalog = logged_in("newcomer");
        assert!(catalog.artists().unwrap().is_empty());
        assert!(catalog.tracks().unwrap().is_empty());
    }

    #[test]
    fn unauthenticated_calls_are_rejected() {
        let mut catalog = LocalCatalog::in_memory().unwrap();
        let err = catalog.artists().unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 401, .. }));
    }

    #[test]
    fn artist_crud_round_trip() {
        let mut catalog = logged_in("demo");

        catalog.create_artist("Autechre").unwrap();
        let artists = catalog.artists().unwrap();
        let created = artists.iter().find(|a| a.name == "Autechre").unwrap();

        catalog.update_artist(created.artist_id, "Plaid").unwrap();
        let artists = catalog.artists().unwrap();
        assert!(artists.iter().any(|a| a.name == "Plaid"));
        assert!(!artists.iter().any(|a| a.name == "Autechre"));

        let plaid_id = artists.iter().find(|a| a.name == "Plaid").unwrap().artist_id;
        catalog.delete_artist(plaid_id).unwrap();
        assert!(!catalog.artists().unwrap().iter().any(|a| a.name == "Plaid"));

        let err = catalog.delete_artist(plaid_id).unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 404, .. }));
    }

    #[test]
    fn track_edit_keeps_other_fields_when_bpm_cleared() {
        let mut catalog = logged_in("demo");

        catalog
            .create_track(&TrackFields {
                title: "X".to_string(),
                artist_id: 1,
                genre_id: 2,
                bpm: Some(120),
                duration_sec: Some(200),
            })
            .unwrap();

        let created = catalog
            .tracks()
            .unwrap()
            .into_iter()
            .find(|t| t.title == "X")
            .unwrap();

        catalog
            .update_track(
                created.track_id,
                &TrackFields {
                    title: "X".to_string(),
                    artist_id: 1,
                    genre_id: 2,
                    bpm: None,
                    duration_sec: Some(200),
                },
            )
            .unwrap();

        let edited = catalog.track(created.track_id).unwrap();
        assert_eq!(edited.title, "X");
        assert_eq!(edited.artist_id, 1);
        assert_eq!(edited.genre_id, 2);
        assert_eq!(edited.bpm, None);
        assert_eq!(edited.duration_sec, Some(200));
        assert!(!edited.artist_name.is_empty());
    }

    #[test]
    fn deleting_an_artist_cascades_to_tracks() {
        let mut catalog = logged_in("demo");

        let before = catalog.tracks().unwrap();
        assert!(before.iter().any(|t| t.artist_id == 1));

        catalog.delete_artist(1).unwrap();

        let after = catalog.tracks().unwrap();
        assert!(!after.iter().any(|t| t.artist_id == 1));
    }

    #[test]
    fn collection_membership_round_trip() {
        let mut catalog = logged_in("demo");

        let collections = catalog.collections().unwrap();
        let late_night = collections.iter().find(|c| c.name == "Late Night").unwrap();
        let collection_id = late_night.collection_id;
        assert!(late_night.tracks.is_empty());

        catalog.add_collection_track(collection_id, 2).unwrap();
        let collection = catalog.collection(collection_id).unwrap();
        assert_eq!(collection.tracks.len(), 1);
        assert_eq!(collection.tracks[0].track_id, 2);

        // Adding the same track again is a no-op, not a duplicate.
        catalog.add_collection_track(collection_id, 2).unwrap();
        assert_eq!(catalog.collection(collection_id).unwrap().tracks.len(), 1);

        catalog.remove_collection_track(collection_id, 2).unwrap();
        assert!(catalog.collection(collection_id).unwrap().tracks.is_empty());

        let err = catalog.remove_collection_track(collection_id, 2).unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 404, .. }));
    }

    #[test]
    fn favorite_flag_is_not_unique() {
        let mut catalog = logged_in("demo");

        catalog
            .create_collection(&CollectionFields {
                name: "Also Favourites".to_string(),
                is_favorite: true,
            })
            .unwrap();

        let favorites = catalog
            .collections()
            .unwrap()
            .into_iter()
            .filter(|c| c.is_favorite)
            .count();
        assert_eq!(favorites, 2);
    }

    #[test]
    fn search_without_filters_returns_everything() {
        let mut catalog = logged_in("demo");

        let all = catalog.search_tracks(&TrackQuery::default()).unwrap();
        assert_eq!(all.len(), catalog.tracks().unwrap().len());
    }

    #[test]
    fn search_filters_combine() {
        let mut catalog = logged_in("demo");

        let by_title = catalog
            .search_tracks(&TrackQuery {
                title: "halcyon".to_string(),
                ..TrackQuery::default()
            })
            .unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Halcyon + On + On");

        let by_bpm = catalog
            .search_tracks(&TrackQuery {
                bpm: "126".to_string(),
                ..TrackQuery::default()
            })
            .unwrap();
        assert_eq!(by_bpm.len(), 1);
        assert_eq!(by_bpm[0].title, "Windowlicker");

        // Non-numeric bpm input adds no constraint.
        let lenient = catalog
            .search_tracks(&TrackQuery {
                bpm: "fast".to_string(),
                ..TrackQuery::default()
            })
            .unwrap();
        assert!(lenient.len() > 1);
    }

    #[test]
    fn search_spans_all_users() {
        let mut catalog = logged_in("demo");
        let shared = catalog.search_tracks(&TrackQuery::default()).unwrap().len();

        catalog.login("guest", "secret").unwrap();
        let seen_by_guest = catalog.search_tracks(&TrackQuery::default()).unwrap().len();
        assert_eq!(shared, seen_by_guest);
    }

    #[test]
    fn admin_views_require_the_admin_flag() {
        let mut catalog = logged_in("guest");
        let err = catalog.admin_users().unwrap_err();
        assert!(matches!(err, ApiError::Status { code: 403, .. }));
    }

    #[test]
    fn mutations_append_audit_entries() {
        let mut catalog = logged_in("demo");
        let before = catalog.admin_audit().unwrap().len();

        catalog.create_artist("Plaid").unwrap();
        catalog
            .create_collection(&CollectionFields {
                name: "New".to_string(),
                is_favorite: false,
            })
            .unwrap();

        let entries = catalog.admin_audit().unwrap();
        assert_eq!(entries.len(), before + 2);
        assert_eq!(entries[0].table_name, "collections");
        assert_eq!(entries[0].operation_type, "INSERT");
        assert_eq!(entries[0].user_label(), "demo");
        assert_eq!(entries[1].details_text(), r#"{"name":"Plaid"}"#);
    }

    #[test]
    fn profile_update_is_reflected() {
        let mut catalog = logged_in("guest");

        catalog
            .update_profile(&ProfileFields {
                first_name: "Gloria".to_string(),
                last_name: "Guest".to_string(),
                email: "gloria@example.com".to_string(),
            })
            .unwrap();

        catalog.login("demo", "secret").unwrap();
        let users = catalog.admin_users().unwrap();
        let guest = users.iter().find(|u| u.login == "guest").unwrap();
        assert_eq!(guest.first_name.as_deref(), Some("Gloria"));
        assert_eq!(guest.email.as_deref(), Some("gloria@example.com"));
    }
}
