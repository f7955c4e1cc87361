use super::{Classification, Tier};

pub const MAX_SCORE: i64 = 30;

/// Four fixed bands; no role gating for this test.
pub fn classify(score: i64) -> Classification {
    let (tier, recommendation) = if score >= 25 {
        (
            Tier::Excellent,
            "Reliable and ethical, recommended for any position including leadership",
        )
    } else if score >= 18 {
        (
            Tier::Good,
            "Possible ethical compromises, hire with oversight or a trial period",
        )
    } else if score >= 12 {
        (
            Tier::Moderate,
            "Risky candidate, not recommended without additional vetting",
        )
    } else {
        (Tier::NotSuitable, "Critically low integrity, do not hire")
    };

    Classification {
        tier,
        recommendation: recommendation.to_string(),
        strengths: Vec::new(),
        concerns: Vec::new(),
        recommended_roles: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_closed() {
        assert_eq!(classify(25).tier, Tier::Excellent);
        assert_eq!(classify(24).tier, Tier::Good);
        assert_eq!(classify(18).tier, Tier::Good);
        assert_eq!(classify(17).tier, Tier::Moderate);
        assert_eq!(classify(12).tier, Tier::Moderate);
        assert_eq!(classify(11).tier, Tier::NotSuitable);
    }

    #[test]
    fn never_recommends_roles() {
        for score in [0, 12, 18, 30] {
            assert!(classify(score).recommended_roles.is_empty());
        }
    }
}
