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

//! Display formatting for track metadata.

/// Formats an optional track duration into an `M:SS` string.
///
/// A missing or zero duration renders as `N/A`; seconds are always
/// zero-padded to two digits.
///
/// # Examples
///
/// ```
/// assert_eq!(format_duration(Some(65)), "1:05");
/// assert_eq!(format_duration(None), "N/A");
/// ```
pub(crate) fn format_duration(duration_sec: Option<u32>) -> String {
    match duration_sec {
        None | Some(0) => "N/A".to_string(),
        Some(total) => format!("{}:{:02}", total / 60, total % 60),
    }
}

/// Formats an optional BPM value, rendering `N/A` when unspecified.
pub(crate) fn format_bpm(bpm: Option<u32>) -> String {
    match bpm {
        None => "N/A".to_string(),
        Some(bpm) => bpm.to_string(),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn missing_duration_is_not_available() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(0)), "N/A");
    }

    #[test]
    fn seconds_are_zero_padded() {
        assert_eq!(format_duration(Some(65)), "1:05");
        assert_eq!(format_duration(Some(355)), "5:55");
        assert_eq!(format_duration(Some(3599)), "59:59");
    }

    #[test]
    fn sub_minute_durations() {
        assert_eq!(format_duration(Some(9)), "0:09");
        assert_eq!(format_duration(Some(59)), "0:59");
        assert_eq!(format_duration(Some(60)), "1:00");
    }

    #[test]
    fn missing_bpm_is_not_available() {
        assert_eq!(format_bpm(None), "N/A");
        assert_eq!(format_bpm(Some(120)), "120");
    }
}
