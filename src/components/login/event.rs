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

//! Key handling for the login screen.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::commands::AppCommand,
    components::login::{LoginField, LoginView},
};

impl LoginView {
    /// Handles one key event, returning the login command when the form is
    /// submitted.
    pub(crate) fn process_event(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Enter => {
                return Some(AppCommand::Login {
                    login: self.login.value().to_string(),
                    password: self.password.value().to_string(),
                });
            }

            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    LoginField::Login => LoginField::Password,
                    LoginField::Password => LoginField::Login,
                };
            }

            KeyCode::Esc => self.error = None,

            _ => {
                self.error = None;
                let event = Event::Key(key);
                match self.focus {
                    LoginField::Login => self.login.handle_event(&event),
                    LoginField::Password => self.password.handle_event(&event),
                };
            }
        }

        None
    }
}
