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

//! Render the collections section.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{
    components::collections::{CollectionsPane, CollectionsView},
    render::Render,
    theme::Theme,
};

impl Render for CollectionsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.draw_collections(f, panes[0], theme);
        self.draw_members(f, panes[1], theme);
    }
}

impl CollectionsView {
    fn pane_border(&self, pane: CollectionsPane, theme: &Theme) -> Style {
        if self.pane == pane {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        }
    }

    fn draw_collections(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .collections
            .iter()
            .map(|collection| {
                let marker = if collection.is_favorite { "★ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent_colour)),
                    Span::styled(
                        collection.name.clone(),
                        Style::default().fg(theme.table_title_fg),
                    ),
                    Span::styled(
                        format!("  ({})", collection.tracks.len()),
                        Style::default().fg(theme.table_meta_fg),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
            .block(
                Block::default()
                    .title(" Collections ")
                    .borders(Borders::ALL)
                    .border_style(self.pane_border(CollectionsPane::Collections, theme)),
            );

        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn draw_members(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .selected_collection()
            .map(|collection| {
                collection
                    .tracks
                    .iter()
                    .map(|track| {
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                track.title.clone(),
                                Style::default().fg(theme.table_title_fg),
                            ),
                            Span::styled(
                                format!("  {}", track.artist_name),
                                Style::default().fg(theme.table_artist_fg),
                            ),
                        ]))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.selected_bg).fg(theme.selected_fg))
            .block(
                Block::default()
                    .title(" Tracks ")
                    .borders(Borders::ALL)
                    .border_style(self.pane_border(CollectionsPane::Tracks, theme)),
            );

        f.render_stateful_widget(list, area, &mut self.track_state);
    }
}
