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

//! The login screen.
//!
//! Two text fields and an error line. Credential validation is entirely
//! server-side; submitting sends the values as-is and any rejection message
//! comes back through the login-failed event.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum LoginField {
    Login,
    Password,
}

pub(crate) struct LoginView {
    pub(crate) login: Input,
    pub(crate) password: Input,
    pub(crate) focus: LoginField,
    pub(crate) error: Option<String>,
}

impl LoginView {
    pub(crate) fn new() -> Self {
        Self {
            login: Input::default(),
            password: Input::default(),
            focus: LoginField::Login,
            error: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.login.reset();
        self.password.reset();
        self.focus = LoginField::Login;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {

    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;
    use crate::actions::commands::AppCommand;

    fn type_text(view: &mut LoginView, text: &str) {
        for c in text.chars() {
            view.process_event(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn enter_submits_the_credentials() {
        let mut view = LoginView::new();
        type_text(&mut view, "demo");
        view.process_event(KeyEvent::from(KeyCode::Tab));
        type_text(&mut view, "secret");

        let command = view.process_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(
            command,
            Some(AppCommand::Login {
                login: "demo".to_string(),
                password: "secret".to_string(),
            })
        );
    }

    #[test]
    fn empty_credentials_are_still_submitted() {
        // Presence checks are the server's job; the rejection message is
        // surfaced via the error line.
        let mut view = LoginView::new();
        let command = view.process_event(KeyEvent::from(KeyCode::Enter));
        assert!(matches!(command, Some(AppCommand::Login { .. })));
    }

    #[test]
    fn tab_toggles_the_focused_field() {
        let mut view = LoginView::new();
        assert_eq!(view.focus, LoginField::Login);

        view.process_event(KeyEvent::from(KeyCode::Tab));
        assert_eq!(view.focus, LoginField::Password);

        view.process_event(KeyEvent::from(KeyCode::Tab));
        assert_eq!(view.focus, LoginField::Login);
    }

    #[test]
    fn typing_clears_the_previous_error() {
        let mut view = LoginView::new();
        view.error = Some("Invalid credentials".to_string());

        type_text(&mut view, "d");
        assert!(view.error.is_none());
    }
}
