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

//! Render the tracks table.
//!
//! Column layout and value formatting for the track listing, including the
//! N/A placeholders for missing bpm and duration values.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{
    components::TracksView,
    render::Render,
    theme::Theme,
    util::format::{format_bpm, format_duration},
};

impl Render for TracksView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|track| {
            Row::new(vec![
                Cell::from(track.title.as_str())
                    .style(Style::default().fg(theme.table_title_fg)),
                Cell::from(track.artist_name.as_str())
                    .style(Style::default().fg(theme.table_artist_fg)),
                Cell::from(track.genre_name.as_str())
                    .style(Style::default().fg(theme.table_genre_fg)),
                Cell::from(
                    Line::from(format_bpm(track.bpm))
                        .style(Style::default().fg(theme.table_meta_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(format_duration(track.duration_sec))
                        .style(Style::default().fg(theme.table_meta_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(track.created_at.as_str())
                    .style(Style::default().fg(theme.table_meta_fg)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Genre"),
                Cell::from(Line::from("BPM").alignment(Alignment::Right)),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from("Added"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
        .block(
            Block::default()
                .title(" Tracks ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour)),
        );

        f.render_stateful_widget(table, area, &mut self.state);
    }
}
