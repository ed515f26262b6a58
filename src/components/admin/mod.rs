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

//! The admin section.
//!
//! Three tabs over system-wide data: all users, all tracks with owner
//! attribution, and the audit log. Tab data is refetched on every switch;
//! nothing here is served from a cache.

mod render;

use ratatui::widgets::TableState;

use crate::model::{AdminTrack, AuditEntry, User};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AdminTab {
    Users,
    Tracks,
    Audit,
}

pub(crate) struct AdminView {
    pub(crate) tab: AdminTab,
    pub(crate) users: Vec<User>,
    pub(crate) tracks: Vec<AdminTrack>,
    pub(crate) entries: Vec<AuditEntry>,
    pub(crate) state: TableState,
}

impl AdminView {
    pub(crate) fn new() -> Self {
        Self {
            tab: AdminTab::Users,
            users: Vec::new(),
            tracks: Vec::new(),
            entries: Vec::new(),
            state: TableState::default(),
        }
    }

    /// Back to the default tab with everything cleared, ready for a reload.
    pub(crate) fn reset(&mut self) {
        self.tab = AdminTab::Users;
        self.users.clear();
        self.tracks.clear();
        self.entries.clear();
        self.state = TableState::default();
    }

    /// Switches tabs, clearing the target tab's rows until its load lands.
    pub(crate) fn switch_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
        match tab {
            AdminTab::Users => self.users.clear(),
            AdminTab::Tracks => self.tracks.clear(),
            AdminTab::Audit => self.entries.clear(),
        }
        self.state = TableState::default();
    }

    pub(crate) fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        if self.tab == AdminTab::Users {
            self.state.select((!self.users.is_empty()).then_some(0));
        }
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<AdminTrack>) {
        self.tracks = tracks;
        if self.tab == AdminTab::Tracks {
            self.state.select((!self.tracks.is_empty()).then_some(0));
        }
    }

    pub(crate) fn set_audit(&mut self, entries: Vec<AuditEntry>) {
        self.entries = entries;
        if self.tab == AdminTab::Audit {
            self.state.select((!self.entries.is_empty()).then_some(0));
        }
    }

    fn current_len(&self) -> usize {
        match self.tab {
            AdminTab::Users => self.users.len(),
            AdminTab::Tracks => self.tracks.len(),
            AdminTab::Audit => self.entries.len(),
        }
    }

    pub(crate) fn next(&mut self) {
        let len = self.current_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        if self.current_len() == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn user(user_id: i64) -> User {
        User {
            user_id,
            login: format!("user{user_id}"),
            first_name: None,
            last_name: None,
            email: None,
            avatar_url: None,
            is_admin: false,
            created_at: None,
        }
    }

    #[test]
    fn switching_tabs_clears_the_target_rows() {
        let mut view = AdminView::new();
        view.set_users(vec![user(1), user(2)]);
        assert_eq!(view.state.selected(), Some(0));

        view.switch_tab(AdminTab::Tracks);
        assert!(view.tracks.is_empty());
        assert_eq!(view.state.selected(), None);

        // The users list from before is still cleared on return.
        view.switch_tab(AdminTab::Users);
        assert!(view.users.is_empty());
    }

    #[test]
    fn late_results_for_an_inactive_tab_do_not_steal_selection() {
        let mut view = AdminView::new();
        view.switch_tab(AdminTab::Audit);

        view.set_users(vec![user(1)]);
        assert_eq!(view.state.selected(), None);
    }
}
