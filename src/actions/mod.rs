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

//! Command dispatch and event processing.

pub(crate) mod commands;
pub(crate) mod events;

/// A monotonic counter for one list view's load requests.
///
/// Every load carries the generation it was issued under; a result whose
/// generation no longer matches is stale (the user navigated away and back,
/// or issued a newer request) and is discarded instead of applied.
#[derive(Debug, Default)]
pub(crate) struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    /// Starts a new load, invalidating any result still in flight.
    pub(crate) fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }
}

/// One generation counter per independently loaded list.
#[derive(Debug, Default)]
pub(crate) struct Generations {
    pub genres: LoadGeneration,
    pub artists: LoadGeneration,
    pub tracks: LoadGeneration,
    pub collections: LoadGeneration,
    pub search: LoadGeneration,
    pub admin: LoadGeneration,
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn begin_invalidates_the_previous_load() {
        let mut generation = LoadGeneration::default();

        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn counters_are_independent() {
        let mut generations = Generations::default();

        let tracks = generations.tracks.begin();
        let artists = generations.artists.begin();
        generations.tracks.begin();

        assert!(!generations.tracks.is_current(tracks));
        assert!(generations.artists.is_current(artists));
    }
}
