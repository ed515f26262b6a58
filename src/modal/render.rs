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

//! Render the modal dialog over the active section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::{
    modal::{FieldValue, Modal, ModalMode},
    render::centered_rect,
    theme::Theme,
};

impl Modal {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let height = match &self.mode {
            ModalMode::ConfirmDelete(_) => 8,
            ModalMode::PickCollection { .. } | ModalMode::PickTrack { .. } => 14,
            _ => self.fields.len() as u16 * 3 + 4,
        };
        let panel = centered_rect(area, 52, height);

        f.render_widget(Clear, panel);
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.background_colour));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        match &self.mode {
            ModalMode::ConfirmDelete(target) => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(2), Constraint::Length(1)])
                    .horizontal_margin(1)
                    .split(inner);

                f.render_widget(
                    Paragraph::new(target.describe())
                        .style(Style::default().fg(theme.input_fg))
                        .wrap(Wrap { trim: true }),
                    rows[0],
                );
                f.render_widget(
                    Paragraph::new("Enter/y delete · Esc/n cancel")
                        .style(Style::default().fg(theme.label_fg)),
                    rows[1],
                );
            }

            ModalMode::PickCollection { .. } | ModalMode::PickTrack { .. } => {
                self.draw_picker(f, inner, theme);
            }

            _ => self.draw_form(f, inner, theme),
        }
    }

    fn draw_picker(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .horizontal_margin(1)
            .split(area);

        let items: Vec<ListItem> = self
            .picker
            .iter()
            .map(|item| {
                ListItem::new(Line::from(item.label.clone()))
                    .style(Style::default().fg(theme.input_fg))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg));
        f.render_stateful_widget(list, rows[0], &mut self.picker_state);

        f.render_widget(
            Paragraph::new("Enter add · j/k move · Esc cancel")
                .style(Style::default().fg(theme.label_fg)),
            rows[1],
        );
    }

    fn draw_form(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .horizontal_margin(1)
            .split(area);

        for (i, field) in self.fields.iter().enumerate() {
            let focused = i == self.focus;
            let border = if focused {
                theme.accent_colour
            } else {
                theme.border_colour
            };

            let value = match &field.value {
                FieldValue::Text(input) => input.value().to_string(),
                FieldValue::Select { options, selected } => selected
                    .and_then(|s| options.get(s))
                    .map(|(_, name)| format!("◂ {name} ▸"))
                    .unwrap_or_else(|| "◂ select ▸".to_string()),
                FieldValue::Flag(value) => if *value { "[x]" } else { "[ ]" }.to_string(),
            };

            f.render_widget(
                Paragraph::new(value)
                    .style(Style::default().fg(theme.input_fg))
                    .block(
                        Block::default()
                            .title(format!(" {} ", field.label))
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(border)),
                    ),
                rows[i],
            );

            if focused && let FieldValue::Text(input) = &field.value {
                f.set_cursor_position((
                    rows[i].x + 1 + input.visual_cursor() as u16,
                    rows[i].y + 1,
                ));
            }
        }

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error_fg)),
                rows[self.fields.len()],
            );
        }

        f.render_widget(
            Paragraph::new("Enter save · Tab next field · Esc cancel")
                .style(Style::default().fg(theme.label_fg)),
            rows[self.fields.len() + 1],
        );
    }
}
