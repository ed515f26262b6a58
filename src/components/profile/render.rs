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

//! Render the profile section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::profile::{ProfileField, ProfileView},
    render::Render,
    theme::Theme,
};

impl Render for ProfileView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.draw_summary(f, columns[0], theme);
        self.draw_form(f, columns[1], theme);
    }
}

impl ProfileView {
    fn draw_summary(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Account ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        let mut lines = Vec::new();
        if let Some(user) = &self.user {
            lines.push(Line::from(vec![
                Span::styled("Name   ", Style::default().fg(theme.label_fg)),
                Span::styled(user.display_name(), Style::default().fg(theme.input_fg)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Login  ", Style::default().fg(theme.label_fg)),
                Span::styled(user.login.clone(), Style::default().fg(theme.input_fg)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Email  ", Style::default().fg(theme.label_fg)),
                Span::styled(
                    user.email.clone().unwrap_or_default(),
                    Style::default().fg(theme.input_fg),
                ),
            ]));
            if user.is_admin {
                lines.push(Line::from(Span::styled(
                    "Administrator",
                    Style::default().fg(theme.accent_colour).bold(),
                )));
            }
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if self.editing {
                "Enter save · Esc cancel · Tab next field"
            } else {
                "i edit profile"
            },
            Style::default().fg(theme.label_fg),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_input(f, rows[0], "First name", &self.first_name, ProfileField::FirstName, theme);
        self.draw_input(f, rows[1], "Last name", &self.last_name, ProfileField::LastName, theme);
        self.draw_input(f, rows[2], "Email", &self.email, ProfileField::Email, theme);

        if self.editing {
            let (input, row) = match self.focus {
                ProfileField::FirstName => (&self.first_name, rows[0]),
                ProfileField::LastName => (&self.last_name, rows[1]),
                ProfileField::Email => (&self.email, rows[2]),
            };
            f.set_cursor_position((row.x + 1 + input.visual_cursor() as u16, row.y + 1));
        }
    }

    fn draw_input(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        input: &tui_input::Input,
        field: ProfileField,
        theme: &Theme,
    ) {
        let border = if self.editing && self.focus == field {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        f.render_widget(
            Paragraph::new(input.value())
                .style(Style::default().fg(theme.input_fg))
                .block(
                    Block::default()
                        .title(format!(" {label} "))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                ),
            area,
        );
    }
}
