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

//! Key handling for the search filter form.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::components::search::{SearchAction, SearchField, SearchView};

impl SearchView {
    /// Handles one key event while editing the filters.
    pub(crate) fn process_event(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                return SearchAction::Run;
            }

            KeyCode::Esc => self.editing = false,

            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.previous(),

            _ if self.field == SearchField::Genre => match key.code {
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_genre_forward(),
                KeyCode::Left => self.cycle_genre_back(),
                _ => {}
            },

            _ => {
                let event = Event::Key(key);
                match self.field {
                    SearchField::Title => self.title.handle_event(&event),
                    SearchField::Artist => self.artist.handle_event(&event),
                    SearchField::Bpm => self.bpm.handle_event(&event),
                    SearchField::Duration => self.duration.handle_event(&event),
                    SearchField::Genre => None,
                };
            }
        }

        SearchAction::None
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn enter_leaves_editing_and_requests_a_run() {
        let mut view = SearchView::new();
        view.editing = true;

        let action = view.process_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(action, SearchAction::Run);
        assert!(!view.editing);
    }

    #[test]
    fn typed_text_lands_in_the_focused_field() {
        let mut view = SearchView::new();
        view.editing = true;

        view.process_event(KeyEvent::from(KeyCode::Char('a')));
        view.process_event(KeyEvent::from(KeyCode::Tab));
        view.process_event(KeyEvent::from(KeyCode::Char('b')));

        assert_eq!(view.title.value(), "a");
        assert_eq!(view.artist.value(), "b");
    }
}
