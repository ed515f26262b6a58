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

//! Persisted user session.
//!
//! The session holds the bearer token and the current-user record, stored in
//! a dedicated configuration slot next to the application config. It gates
//! startup: without a token the application lands on the login screen. There
//! is no expiry check and no refresh; logout simply clears the slot.

use serde::{Deserialize, Serialize};

use crate::{config::APP_NAME, model::User};

const SESSION_SLOT: &str = "session";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Loads the persisted session, falling back to an empty (unauthenticated)
/// one when the slot is missing or unreadable.
pub fn load_session() -> Session {
    confy::load(APP_NAME, Some(SESSION_SLOT)).unwrap_or_default()
}

pub fn save_session(session: &Session) -> Result<(), confy::ConfyError> {
    confy::store(APP_NAME, Some(SESSION_SLOT), session)
}

/// Clears the persisted token and user record, so the next start redirects
/// to login. The token is not invalidated server-side from this layer.
pub fn clear_session() -> Result<(), confy::ConfyError> {
    confy::store(APP_NAME, Some(SESSION_SLOT), Session::default())
}

#[cfg(test)]
mod tests {

    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            user_id: 1,
            login: "demo".to_string(),
            first_name: None,
            last_name: None,
            email: None,
            avatar_url: None,
            is_admin,
            created_at: None,
        }
    }

    #[test]
    fn empty_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn token_alone_is_not_enough() {
        let session = Session {
            token: Some("abc".to_string()),
            user: None,
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn admin_flag_follows_user_record() {
        let session = Session {
            token: Some("abc".to_string()),
            user: Some(user(true)),
        };
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }
}
