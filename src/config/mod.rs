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

//! Application configuration.
//!
//! This module manages the application configuration file, most notably the
//! catalog backend selection: a remote REST server or the built-in local
//! store.

use serde::{Deserialize, Serialize};

pub(crate) const APP_NAME: &str = "trackdeck";

/// Which catalog backend the command worker talks to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// REST calls against a catalog server.
    Remote,
    /// The in-memory demo store, no server required.
    #[default]
    Local,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub backend: Backend,
    pub server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend: Backend::default(),
            server_url: "http://localhost:5000/api".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(APP_NAME, None).unwrap_or_default()
}
