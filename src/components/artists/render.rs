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

//! Render the artists table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{components::ArtistsView, render::Render, theme::Theme};

impl Render for ArtistsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.artists.iter().map(|artist| {
            Row::new(vec![
                Cell::from(artist.artist_id.to_string())
                    .style(Style::default().fg(theme.table_meta_fg)),
                Cell::from(artist.name.as_str())
                    .style(Style::default().fg(theme.table_artist_fg)),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(6), Constraint::Min(0)])
            .header(
                Row::new(vec![Cell::from("Id"), Cell::from("Name")])
                    .style(Style::default().bold().fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
            .block(
                Block::default()
                    .title(" Artists ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour)),
            );

        f.render_stateful_widget(table, area, &mut self.state);
    }
}
