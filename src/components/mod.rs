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

//! The section views.
//!
//! One component per section: login, profile, the three resource browsers,
//! search and the admin tabs. Each component owns its list data and selection
//! state; loading and mutation go through the command worker, never from
//! here.

mod admin;
mod artists;
mod collections;
mod login;
mod profile;
mod search;
mod tracks;

pub(crate) use admin::{AdminTab, AdminView};
pub(crate) use artists::ArtistsView;
pub(crate) use collections::{CollectionsPane, CollectionsView};
pub(crate) use login::LoginView;
pub(crate) use profile::ProfileView;
pub(crate) use search::{SearchAction, SearchView};
pub(crate) use tracks::TracksView;
