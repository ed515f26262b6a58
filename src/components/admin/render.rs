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

//! Render the admin tabs.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::admin::{AdminTab, AdminView},
    render::Render,
    theme::Theme,
    util::format::{format_bpm, format_duration},
};

impl Render for AdminView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        self.draw_tab_bar(f, rows[0], theme);

        match self.tab {
            AdminTab::Users => self.draw_users(f, rows[1], theme),
            AdminTab::Tracks => self.draw_tracks(f, rows[1], theme),
            AdminTab::Audit => self.draw_audit(f, rows[1], theme),
        }
    }
}

impl AdminView {
    fn draw_tab_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let tab = |label: &str, key: &str, active: bool| {
            let style = if active {
                Style::default().fg(theme.accent_colour).bold()
            } else {
                Style::default().fg(theme.label_fg)
            };
            Span::styled(format!(" {label} ({key}) "), style)
        };

        let line = Line::from(vec![
            tab("Users", "u", self.tab == AdminTab::Users),
            tab("Tracks", "t", self.tab == AdminTab::Tracks),
            tab("Audit log", "l", self.tab == AdminTab::Audit),
        ]);

        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_users(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.users.iter().map(|user| {
            let admin = if user.is_admin { "yes" } else { "" };
            Row::new(vec![
                Cell::from(user.user_id.to_string())
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(user.login.as_str())
                    .style(Style::default().fg(theme.table_title_fg)),
                Cell::from(user.display_name()).style(Style::default().fg(theme.input_fg)),
                Cell::from(user.email.clone().unwrap_or_default())
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(admin).style(Style::default().fg(theme.accent_colour)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(20),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Id"),
                Cell::from("Login"),
                Cell::from("Name"),
                Cell::from("Email"),
                Cell::from("Admin"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
        .block(self.tab_block(" All users ", theme));

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn draw_tracks(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|track| {
            Row::new(vec![
                Cell::from(track.title.as_str())
                    .style(Style::default().fg(theme.table_title_fg)),
                Cell::from(track.artist_name.as_str())
                    .style(Style::default().fg(theme.table_artist_fg)),
                Cell::from(track.genre_name.as_str())
                    .style(Style::default().fg(theme.table_genre_fg)),
                Cell::from(format_bpm(track.bpm))
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(format_duration(track.duration_sec))
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(track.owner_label()).style(Style::default().fg(theme.input_fg)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(22),
                Constraint::Percentage(15),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(8),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Genre"),
                Cell::from("BPM"),
                Cell::from("Time"),
                Cell::from("Owner"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
        .block(self.tab_block(" All tracks ", theme));

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn draw_audit(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.entries.iter().map(|entry| {
            Row::new(vec![
                Cell::from(entry.operation_time.as_str())
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(entry.user_label()).style(Style::default().fg(theme.input_fg)),
                Cell::from(entry.operation_type.as_str())
                    .style(Style::default().fg(theme.accent_colour)),
                Cell::from(entry.table_name.as_str())
                    .style(Style::default().fg(theme.table_genre_fg)),
                Cell::from(entry.details_text())
                    .style(Style::default().fg(theme.table_meta_fg)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(18),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Time"),
                Cell::from("User"),
                Cell::from("Op"),
                Cell::from("Table"),
                Cell::from("Details"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
        .block(self.tab_block(" Audit log ", theme));

        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn tab_block(&self, title: &'static str, theme: &Theme) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
    }
}
