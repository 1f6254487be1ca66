//! Per-player, per-season callup counters.
//!
//! Counters are never recomputed from the callups. Each status transition
//! adds a signed delta, so a missed or repeated transition leaves the
//! counters permanently off.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

use crate::models::callup::CallupStatus;
use crate::models::event::EventKind;
use crate::models::season::SeasonId;

/// Stats document for one player and season.
///
/// Stored at: `playerStats/{player_id}_{season_id}`
///
/// Written only through increment merges, so counters may go negative if
/// transitions were lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonStats {
    #[serde(default)]
    pub accepted_callups_for_matches: i64,
    #[serde(default)]
    pub rejected_callups_for_matches: i64,
    #[serde(default)]
    pub accepted_callups_for_trainings: i64,
    #[serde(default)]
    pub rejected_callups_for_trainings: i64,
}

impl PlayerSeasonStats {
    pub fn get(&self, field: StatField) -> i64 {
        match field {
            StatField::AcceptedMatches => self.accepted_callups_for_matches,
            StatField::RejectedMatches => self.rejected_callups_for_matches,
            StatField::AcceptedTrainings => self.accepted_callups_for_trainings,
            StatField::RejectedTrainings => self.rejected_callups_for_trainings,
        }
    }

    pub fn get_mut(&mut self, field: StatField) -> &mut i64 {
        match field {
            StatField::AcceptedMatches => &mut self.accepted_callups_for_matches,
            StatField::RejectedMatches => &mut self.rejected_callups_for_matches,
            StatField::AcceptedTrainings => &mut self.accepted_callups_for_trainings,
            StatField::RejectedTrainings => &mut self.rejected_callups_for_trainings,
        }
    }
}

/// Stats document ID for a player and season.
pub fn stats_doc_id(player_id: &str, season: &SeasonId) -> String {
    format!("{}_{}", player_id, season)
}

/// One counter of a stats document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatField {
    AcceptedMatches,
    RejectedMatches,
    AcceptedTrainings,
    RejectedTrainings,
}

impl StatField {
    pub const ALL: [StatField; 4] = [
        StatField::AcceptedMatches,
        StatField::RejectedMatches,
        StatField::AcceptedTrainings,
        StatField::RejectedTrainings,
    ];

    /// Firestore field name.
    pub fn as_str(self) -> &'static str {
        match self {
            StatField::AcceptedMatches => "acceptedCallupsForMatches",
            StatField::RejectedMatches => "rejectedCallupsForMatches",
            StatField::AcceptedTrainings => "acceptedCallupsForTrainings",
            StatField::RejectedTrainings => "rejectedCallupsForTrainings",
        }
    }

    /// Whether the field counts events of `kind`.
    fn counts(self, kind: EventKind) -> bool {
        match self {
            StatField::AcceptedMatches | StatField::RejectedMatches => kind == EventKind::Match,
            StatField::AcceptedTrainings | StatField::RejectedTrainings => {
                kind == EventKind::Training
            }
        }
    }
}

/// Signed counter changes caused by one status transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatDeltas {
    pub accepted_matches: i64,
    pub rejected_matches: i64,
    pub accepted_trainings: i64,
    pub rejected_trainings: i64,
}

impl StatDeltas {
    /// Deltas for a callup moving from `old` to `new` on an event of `kind`.
    ///
    /// The old status is rolled back, then the new one applied. Statuses
    /// other than accepted and declined contribute nothing, as does an
    /// event that is neither a match nor a training.
    pub fn compute(
        old: Option<&CallupStatus>,
        new: Option<&CallupStatus>,
        kind: EventKind,
    ) -> Self {
        let mut deltas = Self::default();
        deltas.tally(old, kind, -1);
        deltas.tally(new, kind, 1);
        deltas
    }

    fn tally(&mut self, status: Option<&CallupStatus>, kind: EventKind, sign: i64) {
        let counter = match (status, kind) {
            (Some(CallupStatus::Accepted), EventKind::Match) => &mut self.accepted_matches,
            (Some(CallupStatus::Declined), EventKind::Match) => &mut self.rejected_matches,
            (Some(CallupStatus::Accepted), EventKind::Training) => &mut self.accepted_trainings,
            (Some(CallupStatus::Declined), EventKind::Training) => &mut self.rejected_trainings,
            _ => return,
        };
        *counter += sign;
    }

    pub fn get(&self, field: StatField) -> i64 {
        match field {
            StatField::AcceptedMatches => self.accepted_matches,
            StatField::RejectedMatches => self.rejected_matches,
            StatField::AcceptedTrainings => self.accepted_trainings,
            StatField::RejectedTrainings => self.rejected_trainings,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Merge payload for these deltas: only the non-zero counters of the
    /// event's own kind. Other fields are never materialized.
    pub fn increment_for(&self, kind: EventKind) -> StatsIncrement {
        StatsIncrement(
            StatField::ALL
                .into_iter()
                .filter(|field| field.counts(kind))
                .map(|field| (field, self.get(field)))
                .filter(|(_, delta)| *delta != 0)
                .collect(),
        )
    }
}

impl Neg for StatDeltas {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            accepted_matches: -self.accepted_matches,
            rejected_matches: -self.rejected_matches,
            accepted_trainings: -self.accepted_trainings,
            rejected_trainings: -self.rejected_trainings,
        }
    }
}

/// Field increments of one merge-write. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsIncrement(Vec<(StatField, i64)>);

impl StatsIncrement {
    pub fn iter(&self) -> impl Iterator<Item = (StatField, i64)> + '_ {
        self.0.iter().copied()
    }

    pub fn get(&self, field: StatField) -> Option<i64> {
        self.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(StatField, i64)> for StatsIncrement {
    fn from_iter<I: IntoIterator<Item = (StatField, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses() -> Vec<Option<CallupStatus>> {
        vec![
            None,
            Some(CallupStatus::Pending),
            Some(CallupStatus::Accepted),
            Some(CallupStatus::Declined),
            Some(CallupStatus::Other("maybe".to_string())),
        ]
    }

    const KINDS: [EventKind; 3] = [EventKind::Match, EventKind::Training, EventKind::Other];

    #[test]
    fn test_same_status_is_zero() {
        for status in statuses() {
            for kind in KINDS {
                assert!(StatDeltas::compute(status.as_ref(), status.as_ref(), kind).is_zero());
            }
        }
    }

    #[test]
    fn test_reversed_transition_negates() {
        for a in statuses() {
            for b in statuses() {
                for kind in KINDS {
                    let forward = StatDeltas::compute(a.as_ref(), b.as_ref(), kind);
                    let backward = StatDeltas::compute(b.as_ref(), a.as_ref(), kind);
                    assert_eq!(forward, -backward, "{:?} -> {:?} ({:?})", a, b, kind);
                }
            }
        }
    }

    #[test]
    fn test_only_one_kind_moves() {
        for a in statuses() {
            for b in statuses() {
                for kind in KINDS {
                    let d = StatDeltas::compute(a.as_ref(), b.as_ref(), kind);
                    let matches = d.accepted_matches != 0 || d.rejected_matches != 0;
                    let trainings = d.accepted_trainings != 0 || d.rejected_trainings != 0;
                    assert!(!(matches && trainings));
                    if kind == EventKind::Other {
                        assert!(d.is_zero());
                    }
                }
            }
        }
    }

    #[test]
    fn test_accept_then_decline_training() {
        let d = StatDeltas::compute(
            Some(&CallupStatus::Accepted),
            Some(&CallupStatus::Declined),
            EventKind::Training,
        );
        assert_eq!(
            d,
            StatDeltas {
                accepted_trainings: -1,
                rejected_trainings: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_increment_keeps_nonzero_fields_of_kind() {
        let d = StatDeltas::compute(
            Some(&CallupStatus::Pending),
            Some(&CallupStatus::Accepted),
            EventKind::Match,
        );
        let increment = d.increment_for(EventKind::Match);

        assert_eq!(increment.len(), 1);
        assert_eq!(increment.get(StatField::AcceptedMatches), Some(1));
        assert_eq!(increment.get(StatField::RejectedMatches), None);

        // A training increment never carries match counters
        assert!(d.increment_for(EventKind::Training).is_empty());
    }

    #[test]
    fn test_other_kind_gives_empty_increment() {
        let d = StatDeltas::compute(
            Some(&CallupStatus::Pending),
            Some(&CallupStatus::Accepted),
            EventKind::Other,
        );
        assert!(d.increment_for(EventKind::Other).is_empty());
    }

    #[test]
    fn test_field_names() {
        let names: Vec<&str> = StatField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "acceptedCallupsForMatches",
                "rejectedCallupsForMatches",
                "acceptedCallupsForTrainings",
                "rejectedCallupsForTrainings",
            ]
        );
    }

    #[test]
    fn test_stats_deserialize_with_missing_counters() {
        let stats: PlayerSeasonStats =
            serde_json::from_str(r#"{"acceptedCallupsForTrainings": 4, "callupsForTrainings": 9}"#)
                .unwrap();
        assert_eq!(stats.get(StatField::AcceptedTrainings), 4);
        assert_eq!(stats.get(StatField::AcceptedMatches), 0);
    }

    #[test]
    fn test_doc_id() {
        assert_eq!(stats_doc_id("p1", &SeasonId::Span(2025)), "p1_2025_2026");
        assert_eq!(stats_doc_id("p1", &SeasonId::Year(2025)), "p1_2025");
    }
}
