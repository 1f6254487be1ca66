//! Team settings relevant to stats.

use serde::{Deserialize, Serialize};

use crate::models::season::SeasonConfig;

/// Team document, read-only here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub season_cross_year: Option<bool>,
    #[serde(default)]
    pub season_start_month: Option<i64>,
}

impl Team {
    /// Season rule of the team. Unset values and a zero start month fall
    /// back to a January calendar-year season.
    pub fn season_config(&self) -> SeasonConfig {
        let defaults = SeasonConfig::default();
        SeasonConfig {
            crosses_year: self.season_cross_year.unwrap_or(defaults.crosses_year),
            start_month: self
                .season_start_month
                .filter(|month| *month != 0)
                .unwrap_or(defaults.start_month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Team::default().season_config(), SeasonConfig::default());
    }

    #[test]
    fn test_zero_start_month_falls_back() {
        let team = Team {
            season_cross_year: Some(true),
            season_start_month: Some(0),
        };
        assert_eq!(
            team.season_config(),
            SeasonConfig {
                crosses_year: true,
                start_month: 1
            }
        );
    }

    #[test]
    fn test_out_of_range_month_kept() {
        let team = Team {
            season_cross_year: Some(true),
            season_start_month: Some(14),
        };
        assert_eq!(team.season_config().start_month, 14);
    }
}
