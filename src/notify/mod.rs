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

//! Transient user notifications.
//!
//! Success and error notices stack in the top-right corner of the screen and
//! remove themselves after a few seconds. Expiry is driven by the tick event,
//! so notices disappear without any user input.

use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug)]
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    posted: Instant,
}

#[derive(Debug, Default)]
pub(crate) struct Notifications {
    notices: Vec<Notice>,
}

impl Notifications {
    pub(crate) fn success(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub(crate) fn error(&mut self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    fn push(&mut self, kind: NoticeKind, text: String) {
        self.notices.push(Notice {
            kind,
            text,
            posted: Instant::now(),
        });
    }

    /// Drops every notice older than the display window, relative to `now`.
    pub(crate) fn prune_at(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now.duration_since(notice.posted) < NOTICE_TTL);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn notices_accumulate_in_post_order() {
        let mut notifications = Notifications::default();
        notifications.success("saved");
        notifications.error("failed");

        let kinds: Vec<NoticeKind> = notifications.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Error]);
    }

    #[test]
    fn fresh_notices_survive_pruning() {
        let mut notifications = Notifications::default();
        notifications.success("saved");

        notifications.prune_at(Instant::now());
        assert!(!notifications.is_empty());
    }

    #[test]
    fn stale_notices_are_pruned() {
        let mut notifications = Notifications::default();
        notifications.success("saved");
        notifications.error("failed");

        notifications.prune_at(Instant::now() + NOTICE_TTL);
        assert!(notifications.is_empty());
    }
}
