// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Season identifiers derived from an event date and a team's season rule.

use chrono::Datelike;
use std::fmt;

/// Identifier of a team's accounting season.
///
/// Formats as `"2025"` for calendar-year seasons and `"2025_2026"` for seasons
/// that cross a year boundary. Never stored on its own; it only appears inside
/// player stats document IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonId {
    /// Season aligned with a calendar year.
    Year(i32),
    /// Season starting in the given year and ending in the next.
    Span(i32),
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonId::Year(year) => write!(f, "{}", year),
            SeasonId::Span(start) => write!(f, "{}_{}", start, start + 1),
        }
    }
}

/// A team's season rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonConfig {
    /// Whether the season crosses the calendar year boundary.
    pub crosses_year: bool,
    /// First month (1-12) of a year-crossing season. Not validated.
    pub start_month: i64,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            crosses_year: false,
            start_month: 1,
        }
    }
}

impl SeasonConfig {
    /// Season containing `date` under this rule.
    pub fn season_for<D: Datelike>(&self, date: &D) -> SeasonId {
        resolve_season(date, self.crosses_year, self.start_month)
    }
}

/// Resolve the season containing `date`.
///
/// A `start_month` outside 1-12 still yields a well-formed ID: below 1 every
/// date falls in the season starting that year, above 12 every date falls in
/// the season that started the year before.
pub fn resolve_season<D: Datelike>(date: &D, crosses_year: bool, start_month: i64) -> SeasonId {
    let year = date.year();
    if !crosses_year {
        return SeasonId::Year(year);
    }

    if i64::from(date.month()) >= start_month {
        SeasonId::Span(year)
    } else {
        SeasonId::Span(year - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_season_ignores_start_month() {
        for start_month in [1, 7, 12, 0, 42] {
            let season = resolve_season(&date(2025, 6, 15), false, start_month);
            assert_eq!(season.to_string(), "2025");
        }
    }

    #[test]
    fn test_crossing_season_on_or_after_start() {
        assert_eq!(
            resolve_season(&date(2025, 8, 1), true, 7).to_string(),
            "2025_2026"
        );
        // The start month itself belongs to the new season
        assert_eq!(
            resolve_season(&date(2025, 7, 1), true, 7).to_string(),
            "2025_2026"
        );
    }

    #[test]
    fn test_crossing_season_before_start() {
        assert_eq!(
            resolve_season(&date(2025, 3, 1), true, 7).to_string(),
            "2024_2025"
        );
        assert_eq!(
            resolve_season(&date(2025, 6, 30), true, 7).to_string(),
            "2024_2025"
        );
    }

    #[test]
    fn test_crossing_season_starting_in_january_is_forward_span() {
        assert_eq!(
            resolve_season(&date(2025, 1, 1), true, 1).to_string(),
            "2025_2026"
        );
    }

    #[test]
    fn test_out_of_range_start_month_still_well_formed() {
        assert_eq!(resolve_season(&date(2025, 1, 1), true, 0), SeasonId::Span(2025));
        assert_eq!(
            resolve_season(&date(2025, 12, 31), true, 13),
            SeasonId::Span(2024)
        );
    }

    #[test]
    fn test_config_defaults_to_calendar_year() {
        let config = SeasonConfig::default();
        assert_eq!(config.season_for(&date(2025, 11, 3)), SeasonId::Year(2025));
    }
}
