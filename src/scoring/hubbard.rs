use super::{matching_roles, roles, Classification, RoleGate, Tier};

pub const MAX_SCORE: i64 = 40;

const EXCELLENT_GATES: &[RoleGate] = &[
    RoleGate { role: roles::HEAD_OF_SALES, min: 3.3, max: 4.0, note: "tone 3.3-4.0" },
    RoleGate { role: roles::BROKER, min: 3.3, max: 4.0, note: "tone 3.3-4.0" },
    RoleGate { role: roles::GENERAL_DIRECTOR, min: 3.3, max: 4.0, note: "tone 3.3-4.0" },
    RoleGate { role: roles::COMMERCIAL_DIRECTOR, min: 3.2, max: 3.8, note: "tone 3.2-3.8" },
    RoleGate { role: roles::HEAD_OF_MARKETING, min: 3.0, max: 3.7, note: "tone 3.0-3.7" },
    RoleGate { role: roles::DESIGNER, min: 3.0, max: 3.5, note: "tone 3.0-3.5" },
    RoleGate { role: roles::OPERATIONS_DIRECTOR, min: 3.0, max: 3.5, note: "tone 3.0-3.5" },
];

const GOOD_GATES: &[RoleGate] = &[
    RoleGate { role: roles::FINANCIAL_DIRECTOR, min: 2.8, max: 3.3, note: "tone 2.8-3.3" },
    RoleGate { role: roles::MARKETING_ANALYST, min: 2.8, max: 3.2, note: "tone 2.8-3.2" },
    RoleGate { role: roles::EXECUTIVE_ASSISTANT, min: 2.8, max: 3.2, note: "tone 2.8-3.2" },
    RoleGate { role: roles::OPERATIONS_MANAGER, min: 2.8, max: 3.2, note: "tone 2.8-3.2" },
];

/// Tiering is driven by the averaged tone, not the raw score.
pub fn classify(average_tone: f64) -> Classification {
    if average_tone >= 3.3 {
        Classification {
            tier: Tier::Excellent,
            recommendation: "Productive, energetic and level-headed candidate".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(EXCELLENT_GATES, average_tone),
        }
    } else if average_tone >= 2.8 {
        Classification {
            tier: Tier::Good,
            recommendation: "Stable tone with potential for growth".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(GOOD_GATES, average_tone),
        }
    } else if average_tone >= 2.0 {
        Classification {
            tier: Tier::Moderate,
            recommendation: "Low tone, not recommended for most positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: Vec::new(),
        }
    } else {
        Classification {
            tier: Tier::NotSuitable,
            recommendation: "Critically low tone, likely to harm the company".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_tone_bands() {
        assert_eq!(classify(3.5).tier, Tier::Excellent);
        assert_eq!(classify(3.0).tier, Tier::Good);
        assert_eq!(classify(2.2).tier, Tier::Moderate);
        assert_eq!(classify(1.1).tier, Tier::NotSuitable);
    }

    #[test]
    fn only_top_two_tiers_recommend_roles() {
        assert!(!classify(3.4).recommended_roles.is_empty());
        assert!(!classify(2.9).recommended_roles.is_empty());
        assert!(classify(2.5).recommended_roles.is_empty());
        assert!(classify(0.5).recommended_roles.is_empty());
    }

    #[test]
    fn tone_gates_are_inclusive_ranges() {
        // 3.9 is inside 3.3-4.0 but past the commercial director band.
        let high = classify(3.9);
        let names: Vec<&str> = high.recommended_roles.iter().map(|r| r.role.as_str()).collect();
        assert!(names.contains(&roles::HEAD_OF_SALES));
        assert!(!names.contains(&roles::COMMERCIAL_DIRECTOR));

        // 3.3 qualifies for every excellent gate.
        assert_eq!(classify(3.3).recommended_roles.len(), 7);
    }
}
