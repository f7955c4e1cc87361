use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Classification, Tier};

/// Four-trait DISC vector. Each trait scores up to 24.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct DiscScores {
    #[serde(rename = "D")]
    #[validate(range(min = 0, max = 24))]
    pub d: i64,
    #[serde(rename = "I")]
    #[validate(range(min = 0, max = 24))]
    pub i: i64,
    #[serde(rename = "S")]
    #[validate(range(min = 0, max = 24))]
    pub s: i64,
    #[serde(rename = "C")]
    #[validate(range(min = 0, max = 24))]
    pub c: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscTrait {
    D,
    I,
    S,
    C,
}

impl DiscTrait {
    pub fn label(self) -> &'static str {
        match self {
            DiscTrait::D => "Dominance",
            DiscTrait::I => "Influence",
            DiscTrait::S => "Steadiness",
            DiscTrait::C => "Conscientiousness",
        }
    }
}

impl DiscScores {
    pub fn get(&self, trait_: DiscTrait) -> i64 {
        match trait_ {
            DiscTrait::D => self.d,
            DiscTrait::I => self.i,
            DiscTrait::S => self.s,
            DiscTrait::C => self.c,
        }
    }
}

/// Highest-scoring trait. Ties resolve by the fixed priority D > I > S > C.
pub fn dominant(scores: &DiscScores) -> DiscTrait {
    let mut best = DiscTrait::D;
    for candidate in [DiscTrait::I, DiscTrait::S, DiscTrait::C] {
        if scores.get(candidate) > scores.get(best) {
            best = candidate;
        }
    }
    best
}

pub fn classify(scores: &DiscScores) -> Classification {
    if scores.i > 10 && scores.d >= 7 {
        Classification {
            tier: Tier::Excellent,
            recommendation: "Ideal profile for active real estate sales".to_string(),
            strengths: vec![
                "High charisma".to_string(),
                "Decisiveness".to_string(),
                "Ability to inspire clients".to_string(),
            ],
            concerns: Vec::new(),
            recommended_roles: Vec::new(),
        }
    } else if scores.i > 8 {
        let mut concerns = Vec::new();
        if scores.d < 5 {
            concerns.push("Insufficient assertiveness".to_string());
        }
        Classification {
            tier: Tier::Good,
            recommendation: "Good profile for real estate sales".to_string(),
            strengths: vec!["Charisma".to_string(), "Sociability".to_string()],
            concerns,
            recommended_roles: Vec::new(),
        }
    } else if scores.d > 8 {
        Classification {
            tier: Tier::Moderate,
            recommendation: "Decisive, but charisma may be insufficient".to_string(),
            strengths: vec!["Decisiveness".to_string(), "Goal orientation".to_string()],
            concerns: vec!["Low influence may hinder sales work".to_string()],
            recommended_roles: Vec::new(),
        }
    } else {
        Classification {
            tier: Tier::NotSuitable,
            recommendation: "Profile does not fit active real estate sales".to_string(),
            strengths: Vec::new(),
            concerns: vec![
                "Low influence".to_string(),
                "Insufficient decisiveness".to_string(),
            ],
            recommended_roles: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(d: i64, i: i64, s: i64, c: i64) -> DiscScores {
        DiscScores { d, i, s, c }
    }

    #[test]
    fn high_influence_and_dominance_is_excellent_regardless_of_s_and_c() {
        for (s, c) in [(0, 0), (24, 24), (3, 17)] {
            let result = classify(&scores(7, 11, s, c));
            assert_eq!(result.tier, Tier::Excellent);
        }
    }

    #[test]
    fn exactly_one_tier_per_input() {
        let cases = [
            (scores(9, 12, 2, 1), Tier::Excellent),
            (scores(4, 9, 5, 5), Tier::Good),
            (scores(9, 3, 5, 5), Tier::Moderate),
            (scores(2, 2, 10, 10), Tier::NotSuitable),
        ];
        for (input, expected) in cases {
            assert_eq!(classify(&input).tier, expected);
            // Determinism: same input, same verdict.
            assert_eq!(classify(&input).tier, classify(&input).tier);
        }
    }

    #[test]
    fn good_tier_flags_low_assertiveness() {
        let result = classify(&scores(4, 9, 0, 0));
        assert_eq!(result.tier, Tier::Good);
        assert!(result
            .concerns
            .iter()
            .any(|c| c == "Insufficient assertiveness"));

        let confident = classify(&scores(6, 9, 0, 0));
        assert_eq!(confident.tier, Tier::Good);
        assert!(confident.concerns.is_empty());
    }

    #[test]
    fn dominant_trait_ties_resolve_in_priority_order() {
        assert_eq!(dominant(&scores(8, 8, 8, 8)), DiscTrait::D);
        assert_eq!(dominant(&scores(3, 8, 8, 8)), DiscTrait::I);
        assert_eq!(dominant(&scores(3, 3, 8, 8)), DiscTrait::S);
        assert_eq!(dominant(&scores(2, 12, 5, 1)), DiscTrait::I);
    }
}
