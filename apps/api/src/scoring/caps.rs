//! Cap Enforcer — hard ceilings that override the arithmetic score.
//!
//! Two independent stages: at most one Tier-1 cap (most severe first), then the
//! experience cap, each applied with `min`.

use serde::Serialize;

use super::config::HardCaps;
use super::tiers::TierTally;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HardCap {
    NoCriticalMatched,
    MissingCritical { count: usize },
    ExperienceBelowHalf,
}

impl HardCap {
    pub fn ceiling(&self, caps: &HardCaps) -> f64 {
        match self {
            HardCap::NoCriticalMatched => caps.zero_tier1_matches,
            HardCap::MissingCritical { count } if *count >= 3 => caps.missing_3_tier1,
            HardCap::MissingCritical { count } if *count == 2 => caps.missing_2_tier1,
            HardCap::MissingCritical { .. } => caps.missing_1_tier1,
            HardCap::ExperienceBelowHalf => caps.experience_below_50pct,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            HardCap::NoCriticalMatched => "No critical requirements matched".to_string(),
            HardCap::MissingCritical { count } if *count >= 3 => {
                format!("Missing {count}+ critical requirements")
            }
            HardCap::MissingCritical { count } if *count == 2 => {
                format!("Missing {count} critical requirements")
            }
            HardCap::MissingCritical { count } => {
                format!("Missing {count} critical requirement(s)")
            }
            HardCap::ExperienceBelowHalf => "Experience below 50% of requirement".to_string(),
        }
    }
}

/// The single Tier-1 cap that applies, if any. The zero-match cap wins over
/// the missing-count caps when both hold.
pub fn tier1_cap(tally: &TierTally) -> Option<HardCap> {
    if tally.no_critical_matched() {
        return Some(HardCap::NoCriticalMatched);
    }
    match tally.tier1_missing() {
        0 => None,
        count => Some(HardCap::MissingCritical { count }),
    }
}

pub fn experience_cap(experience_ratio: f64) -> Option<HardCap> {
    (experience_ratio < 0.5).then_some(HardCap::ExperienceBelowHalf)
}

/// Result of the two-stage cap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CappedScore {
    /// Capped but not yet rounded.
    pub value: f64,
    pub applied: Vec<HardCap>,
}

impl CappedScore {
    pub fn reasons(&self) -> Vec<String> {
        self.applied.iter().map(HardCap::reason).collect()
    }
}

/// Applies caps to `raw_score`. Caps only ever lower the score; a cap whose
/// condition holds is reported even when it does not bind.
pub fn enforce_caps(
    raw_score: f64,
    tally: &TierTally,
    experience_ratio: f64,
    caps: &HardCaps,
) -> CappedScore {
    let mut value = raw_score;
    let mut applied = Vec::new();

    if let Some(cap) = tier1_cap(tally) {
        value = value.min(cap.ceiling(caps));
        applied.push(cap);
    }

    if let Some(cap) = experience_cap(experience_ratio) {
        value = value.min(cap.ceiling(caps));
        applied.push(cap);
    }

    CappedScore { value, applied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::ScoringConfig;
    use crate::scoring::model::{MatchType, Requirement, Tier};
    use crate::scoring::tiers::accumulate;

    fn tally_with_missing(missing: usize, matched: usize) -> TierTally {
        let mut reqs = Vec::new();
        for i in 0..missing {
            reqs.push(Requirement::new(format!("missing-{i}"), Tier::Critical, MatchType::None));
        }
        for i in 0..matched {
            reqs.push(Requirement::new(format!("matched-{i}"), Tier::Critical, MatchType::Exact));
        }
        accumulate(&reqs, &ScoringConfig::default())
    }

    #[test]
    fn test_missing_count_selects_single_cap() {
        let caps = ScoringConfig::default().hard_caps;

        let one = enforce_caps(100.0, &tally_with_missing(1, 3), 1.0, &caps);
        assert_eq!(one.value, 75.0);
        assert_eq!(one.reasons(), vec!["Missing 1 critical requirement(s)"]);

        let two = enforce_caps(100.0, &tally_with_missing(2, 3), 1.0, &caps);
        assert_eq!(two.value, 60.0);
        assert_eq!(two.reasons(), vec!["Missing 2 critical requirements"]);

        let four = enforce_caps(100.0, &tally_with_missing(4, 1), 1.0, &caps);
        assert_eq!(four.value, 45.0);
        assert_eq!(four.reasons(), vec!["Missing 4+ critical requirements"]);
    }

    #[test]
    fn test_zero_match_cap_wins_tie_with_single_missing() {
        let caps = ScoringConfig::default().hard_caps;
        let capped = enforce_caps(100.0, &tally_with_missing(1, 0), 1.0, &caps);
        assert_eq!(capped.value, 30.0);
        assert_eq!(capped.applied, vec![HardCap::NoCriticalMatched]);
    }

    #[test]
    fn test_experience_cap_is_independent() {
        let caps = ScoringConfig::default().hard_caps;
        let capped = enforce_caps(100.0, &tally_with_missing(1, 2), 0.3, &caps);
        assert_eq!(capped.value, 55.0);
        assert_eq!(
            capped.reasons(),
            vec![
                "Missing 1 critical requirement(s)".to_string(),
                "Experience below 50% of requirement".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_binding_cap_is_still_reported() {
        let caps = ScoringConfig::default().hard_caps;
        let capped = enforce_caps(0.0, &tally_with_missing(2, 0), 1.0, &caps);
        assert_eq!(capped.value, 0.0);
        assert_eq!(capped.reasons(), vec!["No critical requirements matched"]);
    }

    #[test]
    fn test_no_caps_without_tier1_or_experience_gap() {
        let caps = ScoringConfig::default().hard_caps;
        let capped = enforce_caps(88.0, &tally_with_missing(0, 2), 0.5, &caps);
        assert_eq!(capped.value, 88.0);
        assert!(capped.applied.is_empty());
    }
}
