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

//! Key handling for profile editing.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::commands::AppCommand,
    components::profile::{ProfileField, ProfileView},
};

impl ProfileView {
    /// Handles one key event while in edit mode, returning the save command
    /// when the form is submitted.
    pub(crate) fn process_event(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Enter => {
                return Some(AppCommand::UpdateProfile(self.fields()));
            }

            KeyCode::Esc => self.editing = false,

            KeyCode::Tab | KeyCode::Down => {
                self.focus = match self.focus {
                    ProfileField::FirstName => ProfileField::LastName,
                    ProfileField::LastName => ProfileField::Email,
                    ProfileField::Email => ProfileField::FirstName,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = match self.focus {
                    ProfileField::FirstName => ProfileField::Email,
                    ProfileField::LastName => ProfileField::FirstName,
                    ProfileField::Email => ProfileField::LastName,
                };
            }

            _ => {
                let event = Event::Key(key);
                match self.focus {
                    ProfileField::FirstName => self.first_name.handle_event(&event),
                    ProfileField::LastName => self.last_name.handle_event(&event),
                    ProfileField::Email => self.email.handle_event(&event),
                };
            }
        }

        None
    }
}
