//! Tier Accumulator — turns classified requirements into earned/possible points.

use super::config::ScoringConfig;
use super::model::{percent, MatchDetail, MatchType, Requirement, Tier, TierBreakdown};

/// Points per tier plus the Tier-1 bookkeeping the caps and feedback need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierTally {
    tiers: [TierBucket; 3],
    pub missing_critical: Vec<String>,
    pub matched_critical: Vec<String>,
    /// Valid-but-inferred matches worth strengthening. Never counted as missing.
    pub weak_matches: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierBucket {
    pub earned: f64,
    pub possible: u32,
    pub matched: usize,
    pub total: usize,
    pub details: Vec<MatchDetail>,
}

impl TierBucket {
    pub fn percentage(&self) -> u32 {
        percent(self.earned, self.possible as f64)
    }

    fn to_breakdown(&self) -> TierBreakdown {
        TierBreakdown {
            earned: self.earned,
            possible: self.possible,
            percentage: self.percentage(),
            matched_count: self.matched,
            total_count: self.total,
            details: self.details.clone(),
        }
    }
}

impl TierTally {
    pub fn bucket(&self, tier: Tier) -> &TierBucket {
        &self.tiers[tier.index()]
    }

    pub fn total_earned(&self) -> f64 {
        self.tiers.iter().map(|t| t.earned).sum()
    }

    pub fn total_possible(&self) -> u32 {
        self.tiers.iter().map(|t| t.possible).sum()
    }

    pub fn total_matched(&self) -> usize {
        self.tiers.iter().map(|t| t.matched).sum()
    }

    pub fn total_requirements(&self) -> usize {
        self.tiers.iter().map(|t| t.total).sum()
    }

    /// Number of Tier-1 requirements with no match at all.
    pub fn tier1_missing(&self) -> usize {
        self.missing_critical.len()
    }

    /// True when at least one Tier-1 requirement exists and none matched.
    pub fn no_critical_matched(&self) -> bool {
        let tier1 = self.bucket(Tier::Critical);
        tier1.total > 0 && self.tier1_missing() == tier1.total
    }

    /// Skill names of every unmatched requirement, in input order per tier.
    pub fn missing_skills(&self) -> Vec<String> {
        self.tiers
            .iter()
            .flat_map(|t| t.details.iter())
            .filter(|d| d.match_type == MatchType::None)
            .map(|d| d.skill.clone())
            .collect()
    }

    pub fn breakdown(&self, tier: Tier) -> TierBreakdown {
        self.bucket(tier).to_breakdown()
    }
}

/// Accumulates points per tier. Requirements with malformed tier or match
/// type were already defaulted at deserialization, so this never fails.
pub fn accumulate(requirements: &[Requirement], config: &ScoringConfig) -> TierTally {
    let mut tally = TierTally::default();

    for req in requirements {
        let points_possible = config.tier_points.for_tier(req.tier);
        let credit = config.match_credit.for_match(req.match_type);
        let points_earned = points_possible as f64 * credit;

        let bucket = &mut tally.tiers[req.tier.index()];
        bucket.possible += points_possible;
        bucket.earned += points_earned;
        bucket.total += 1;
        bucket.details.push(MatchDetail {
            skill: req.text.clone(),
            match_type: req.match_type,
            evidence: req.evidence.clone(),
            points_earned,
            points_possible,
            credit_pct: (credit * 100.0).round() as u32,
        });

        if req.match_type.is_match() {
            bucket.matched += 1;
        }

        match (req.tier, req.match_type) {
            (Tier::Critical, MatchType::None) => tally.missing_critical.push(req.text.clone()),
            (Tier::Critical, MatchType::Contextual) => {
                tally.weak_matches.push(req.text.clone());
                tally.matched_critical.push(req.text.clone());
            }
            (Tier::Critical, _) => tally.matched_critical.push(req.text.clone()),
            (Tier::Important, MatchType::Contextual) => tally.weak_matches.push(req.text.clone()),
            _ => {}
        }
    }

    tally
}
