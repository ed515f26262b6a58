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

//! Render the login screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::login::{LoginField, LoginView},
    render::{Render, centered_rect},
    theme::Theme,
};

impl Render for LoginView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let panel = centered_rect(area, 44, 11);

        let block = Block::default()
            .title(" Sign in ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour));
        let inner = block.inner(panel);
        f.render_widget(block, panel);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .horizontal_margin(1)
            .split(inner);

        draw_field(
            f,
            rows[0],
            "Login",
            self.login.value(),
            self.focus == LoginField::Login,
            theme,
        );

        let masked = "*".repeat(self.password.value().chars().count());
        draw_field(
            f,
            rows[1],
            "Password",
            &masked,
            self.focus == LoginField::Password,
            theme,
        );

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(theme.error_fg)),
                rows[2],
            );
        }

        f.render_widget(
            Paragraph::new("Enter sign in · Tab switch field")
                .style(Style::default().fg(theme.label_fg)),
            rows[3],
        );

        let (value, row) = match self.focus {
            LoginField::Login => (&self.login, rows[0]),
            LoginField::Password => (&self.password, rows[1]),
        };
        f.set_cursor_position((row.x + 1 + value.visual_cursor() as u16, row.y + 1));
    }
}

fn draw_field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, theme: &Theme) {
    let border = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    f.render_widget(
        Paragraph::new(value)
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
