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

//! Top-level frame composition.
//!
//! Draws the navigation bar, the active section, the key-hint footer, the
//! notification stack and, when open, the modal dialog. The login screen
//! replaces the whole frame; everything else renders inside the chrome.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{App, Section, notify::NoticeKind, theme::Theme};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.background_colour)),
        area,
    );

    if app.section == Section::Login {
        app.login_view.draw(f, area, &theme);
        draw_notifications(f, area, app);
        return;
    }

    // Outer layout: nav bar, content, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_nav(f, outer[0], app);

    match app.section {
        Section::Login => {}
        Section::Profile => app.profile_view.draw(f, outer[1], &theme),
        Section::Tracks => app.tracks_view.draw(f, outer[1], &theme),
        Section::Collections => app.collections_view.draw(f, outer[1], &theme),
        Section::Search => app.search_view.draw(f, outer[1], &theme),
        Section::Artists => app.artists_view.draw(f, outer[1], &theme),
        Section::Admin => app.admin_view.draw(f, outer[1], &theme),
    }

    draw_footer(f, outer[2], app);

    if let Some(modal) = app.modal.as_mut() {
        modal.draw(f, area, &theme);
    }

    draw_notifications(f, area, app);
}

fn draw_nav(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let entry = |label: &str, section: Section, active: bool| {
        let style = if active {
            Style::default().fg(theme.accent_colour).bold()
        } else {
            Style::default().fg(theme.label_fg)
        };
        let key = match section {
            Section::Tracks => "1",
            Section::Collections => "2",
            Section::Search => "3",
            Section::Artists => "4",
            Section::Profile => "5",
            Section::Admin => "6",
            Section::Login => "",
        };
        Span::styled(format!(" {label} ({key}) "), style)
    };

    let mut spans = vec![
        Span::styled(" trackdeck ", Style::default().fg(theme.accent_colour).bold()),
        entry("Tracks", Section::Tracks, app.section == Section::Tracks),
        entry(
            "Collections",
            Section::Collections,
            app.section == Section::Collections,
        ),
        entry("Search", Section::Search, app.section == Section::Search),
        entry("Artists", Section::Artists, app.section == Section::Artists),
        entry("Profile", Section::Profile, app.section == Section::Profile),
    ];
    if app.session.is_admin() {
        spans.push(entry("Admin", Section::Admin, app.section == Section::Admin));
    }

    if let Some(user) = &app.session.user {
        spans.push(Span::styled(
            format!("  {} ", user.display_name()),
            Style::default().fg(theme.table_genre_fg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.section {
        Section::Login => "",
        Section::Profile => "i edit · Ctrl+d sign out · q quit",
        Section::Tracks => "a add · e edit · d delete · c add to collection · r reload · q quit",
        Section::Collections => {
            "h/l pane · a add · e edit · d delete · t add track · x remove track · q quit"
        }
        Section::Search => "i filters · Enter search · R reset · c add to collection · q quit",
        Section::Artists => "a add · e edit · d delete · r reload · q quit",
        Section::Admin => "u users · t tracks · l audit · r reload · q quit",
    };

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(app.theme.label_fg)),
        area,
    );
}

/// Stacks the active notices in the top-right corner, most recent first.
fn draw_notifications(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if app.notifications.is_empty() {
        return;
    }

    for (i, notice) in app.notifications.iter().enumerate() {
        let width = (notice.text.len() as u16 + 4).min(area.width);
        let y = area.y + 1 + i as u16;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 1);

        let fg = match notice.kind {
            NoticeKind::Success => theme.success_fg,
            NoticeKind::Error => theme.error_fg,
        };

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(format!(" {} ", notice.text))
                .style(Style::default().fg(fg).bg(theme.background_colour).bold()),
            rect,
        );
    }
}

/// A centered rectangle of fixed size, clamped to the containing area.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
