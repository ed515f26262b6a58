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

//! Key handling for the modal dialog.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::modal::{FieldValue, Modal, ModalAction, ModalMode};

impl Modal {
    /// Handles one key event. The modal consumes every key while open.
    pub(crate) fn process_event(&mut self, key: KeyEvent) -> ModalAction {
        if key.code == KeyCode::Esc {
            return ModalAction::Close;
        }

        match &self.mode {
            ModalMode::ConfirmDelete(_) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.submit(),
                KeyCode::Char('n') => ModalAction::Close,
                _ => ModalAction::None,
            },

            ModalMode::PickCollection { .. } | ModalMode::PickTrack { .. } => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Char('j') | KeyCode::Down => {
                    self.picker_next();
                    ModalAction::None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.picker_previous();
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            _ => self.process_form_event(key),
        }
    }

    fn process_form_event(&mut self, key: KeyEvent) -> ModalAction {
        match key.code {
            KeyCode::Enter => return self.submit(),

            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }

            _ => {
                self.error = None;
                match &mut self.fields[self.focus].value {
                    FieldValue::Text(input) => {
                        input.handle_event(&Event::Key(key));
                    }
                    FieldValue::Select { options, selected } => match key.code {
                        KeyCode::Right | KeyCode::Char(' ') => {
                            *selected = match *selected {
                                None if options.is_empty() => None,
                                None => Some(0),
                                Some(i) if i + 1 < options.len() => Some(i + 1),
                                Some(i) => Some(i),
                            };
                        }
                        KeyCode::Left => {
                            *selected = selected.map(|i| i.saturating_sub(1));
                        }
                        _ => {}
                    },
                    FieldValue::Flag(value) => {
                        if matches!(
                            key.code,
                            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
                        ) {
                            *value = !*value;
                        }
                    }
                }
            }
        }

        ModalAction::None
    }

    fn picker_next(&mut self) {
        if self.picker.is_empty() {
            return;
        }
        let i = match self.picker_state.selected() {
            Some(i) if i + 1 < self.picker.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.picker_state.select(Some(i));
    }

    fn picker_previous(&mut self) {
        if self.picker.is_empty() {
            return;
        }
        let i = self
            .picker_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.picker_state.select(Some(i));
    }
}
