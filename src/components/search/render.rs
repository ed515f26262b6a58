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

//! Render the search section: the filter strip and the result table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::search::{SearchField, SearchView},
    render::Render,
    theme::Theme,
    util::format::{format_bpm, format_duration},
};

impl Render for SearchView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_filters(f, rows[0], theme);
        self.draw_results(f, rows[1], theme);
    }
}

impl SearchView {
    fn field_border(&self, field: SearchField, theme: &Theme) -> Style {
        if self.editing && self.field == field {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        }
    }

    fn draw_filters(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(20),
                Constraint::Percentage(12),
                Constraint::Percentage(13),
            ])
            .split(area);

        let fields = [
            ("Title", self.title.value().to_string(), SearchField::Title),
            ("Artist", self.artist.value().to_string(), SearchField::Artist),
            ("Genre", self.genre_label(), SearchField::Genre),
            ("BPM", self.bpm.value().to_string(), SearchField::Bpm),
            ("Duration", self.duration.value().to_string(), SearchField::Duration),
        ];

        for (i, (label, value, field)) in fields.into_iter().enumerate() {
            f.render_widget(
                Paragraph::new(value)
                    .style(Style::default().fg(theme.input_fg))
                    .block(
                        Block::default()
                            .title(format!(" {label} "))
                            .borders(Borders::ALL)
                            .border_style(self.field_border(field, theme)),
                    ),
                cells[i],
            );
        }

        if self.editing && self.field != SearchField::Genre {
            let (input, cell) = match self.field {
                SearchField::Title => (&self.title, cells[0]),
                SearchField::Artist => (&self.artist, cells[1]),
                SearchField::Bpm => (&self.bpm, cells[3]),
                SearchField::Duration => (&self.duration, cells[4]),
                SearchField::Genre => unreachable!(),
            };
            f.set_cursor_position((cell.x + 1 + input.visual_cursor() as u16, cell.y + 1));
        }
    }

    fn genre_label(&self) -> String {
        self.genre_selected
            .and_then(|i| self.genres.get(i))
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "Any".to_string())
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.has_searched() {
            format!(" Results ({}) ", self.results.len())
        } else {
            " Results ".to_string()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));

        if self.has_searched() && self.results.is_empty() {
            f.render_widget(
                Paragraph::new("No tracks matched the filters")
                    .style(Style::default().fg(theme.label_fg))
                    .block(block),
                area,
            );
            return;
        }

        let rows = self.results.iter().map(|track| {
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
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(18),
                Constraint::Length(5),
                Constraint::Length(7),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Genre"),
                Cell::from(Line::from("BPM").alignment(Alignment::Right)),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.state);
    }
}
