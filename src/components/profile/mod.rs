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

//! The profile section.
//!
//! Shows the signed-in user's record and lets them edit the name and email
//! fields. The login itself is immutable; the admin flag is display-only.

mod event;
mod render;

use tui_input::Input;

use crate::model::{ProfileFields, User};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ProfileField {
    FirstName,
    LastName,
    Email,
}

pub(crate) struct ProfileView {
    pub(crate) user: Option<User>,
    pub(crate) first_name: Input,
    pub(crate) last_name: Input,
    pub(crate) email: Input,
    pub(crate) focus: ProfileField,
    pub(crate) editing: bool,
}

impl ProfileView {
    pub(crate) fn new() -> Self {
        Self {
            user: None,
            first_name: Input::default(),
            last_name: Input::default(),
            email: Input::default(),
            focus: ProfileField::FirstName,
            editing: false,
        }
    }

    /// Fills the display copy and the edit fields from the session's user
    /// record.
    pub(crate) fn load_from(&mut self, user: Option<&User>) {
        self.user = user.cloned();
        self.first_name = field_input(user.and_then(|u| u.first_name.as_deref()));
        self.last_name = field_input(user.and_then(|u| u.last_name.as_deref()));
        self.email = field_input(user.and_then(|u| u.email.as_deref()));
        self.focus = ProfileField::FirstName;
    }

    pub(crate) fn fields(&self) -> ProfileFields {
        ProfileFields {
            first_name: self.first_name.value().trim().to_string(),
            last_name: self.last_name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
        }
    }
}

fn field_input(value: Option<&str>) -> Input {
    Input::new(value.unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {

    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;
    use crate::actions::commands::AppCommand;

    fn user() -> User {
        User {
            user_id: 1,
            login: "demo".to_string(),
            first_name: Some("Demo".to_string()),
            last_name: None,
            email: Some("demo@example.com".to_string()),
            avatar_url: None,
            is_admin: true,
            created_at: None,
        }
    }

    #[test]
    fn load_from_prefills_the_edit_fields() {
        let mut view = ProfileView::new();
        view.load_from(Some(&user()));

        assert_eq!(view.first_name.value(), "Demo");
        assert_eq!(view.last_name.value(), "");
        assert_eq!(view.email.value(), "demo@example.com");
    }

    #[test]
    fn enter_submits_the_edited_fields() {
        let mut view = ProfileView::new();
        view.load_from(Some(&user()));
        view.editing = true;

        view.process_event(KeyEvent::from(KeyCode::Tab));
        for c in "User".chars() {
            view.process_event(KeyEvent::from(KeyCode::Char(c)));
        }

        let command = view.process_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            command,
            Some(AppCommand::UpdateProfile(ProfileFields {
                first_name: "Demo".to_string(),
                last_name: "User".to_string(),
                email: "demo@example.com".to_string(),
            }))
        );
    }

    #[test]
    fn escape_cancels_editing_without_submitting() {
        let mut view = ProfileView::new();
        view.load_from(Some(&user()));
        view.editing = true;

        let command = view.process_event(KeyEvent::from(KeyCode::Esc));
        assert_eq!(command, None);
        assert!(!view.editing);
    }
}
