use super::{matching_roles, roles, Classification, RoleGate, Tier};

pub const MAX_SCORE: i64 = 40;

pub fn percentage(score: i64) -> f64 {
    score as f64 / MAX_SCORE as f64 * 100.0
}

const EXCELLENT_GATES: &[RoleGate] = &[
    RoleGate { role: roles::BROKER, min: 75.0, max: 90.0, note: "75-90%" },
    RoleGate { role: roles::GENERAL_DIRECTOR, min: 75.0, max: 90.0, note: "75-90%" },
    RoleGate { role: roles::HEAD_OF_SALES, min: 70.0, max: 85.0, note: "70-85%" },
    RoleGate { role: roles::COMMERCIAL_DIRECTOR, min: 70.0, max: 85.0, note: "70-85%" },
    RoleGate { role: roles::HEAD_OF_MARKETING, min: 65.0, max: 80.0, note: "65-80%" },
];

const GOOD_GATES: &[RoleGate] = &[
    RoleGate { role: roles::EXECUTIVE_ASSISTANT, min: 65.0, max: 75.0, note: "65-75%" },
    RoleGate { role: roles::DESIGNER, min: 60.0, max: 75.0, note: "60-75%" },
    RoleGate { role: roles::OPERATIONS_DIRECTOR, min: 60.0, max: 70.0, note: "60-70%" },
];

const MODERATE_GATES: &[RoleGate] = &[
    RoleGate { role: roles::OPERATIONS_MANAGER, min: 55.0, max: 65.0, note: "55-65%" },
    RoleGate { role: roles::FINANCIAL_DIRECTOR, min: 50.0, max: 65.0, note: "50-65%" },
    RoleGate { role: roles::MARKETING_ANALYST, min: 50.0, max: 65.0, note: "50-65%" },
];

pub fn classify(score: i64) -> Classification {
    let pct = percentage(score);
    if pct >= 75.0 {
        Classification {
            tier: Tier::Excellent,
            recommendation: "High emotional intelligence, strong fit for communication-heavy roles"
                .to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(EXCELLENT_GATES, pct),
        }
    } else if pct >= 60.0 {
        Classification {
            tier: Tier::Good,
            recommendation: "Good communication level, suitable for selected positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(GOOD_GATES, pct),
        }
    } else if pct >= 50.0 {
        Classification {
            tier: Tier::Moderate,
            recommendation: "Basic communication level, fits analytical positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(MODERATE_GATES, pct),
        }
    } else {
        Classification {
            tier: Tier::NotSuitable,
            recommendation: "Limited communication capacity, not recommended for people-facing roles"
                .to_string(),
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
    fn percentage_is_exact() {
        assert_eq!(percentage(30), 75.0);
        assert_eq!(percentage(18), 45.0);
        assert_eq!(percentage(40), 100.0);
    }

    #[test]
    fn boundary_is_closed_at_75_percent() {
        // 30/40 = exactly 75% and lands in the top tier.
        assert_eq!(classify(30).tier, Tier::Excellent);
        assert_eq!(classify(29).tier, Tier::Good);
    }

    #[test]
    fn low_score_gets_lowest_tier_and_no_roles() {
        let result = classify(18);
        assert_eq!(result.tier, Tier::NotSuitable);
        assert!(result.recommended_roles.is_empty());
    }

    #[test]
    fn roles_outside_their_range_are_omitted_within_a_tier() {
        // 38/40 = 95%: above every gate's upper bound.
        let result = classify(38);
        assert_eq!(result.tier, Tier::Excellent);
        assert!(result.recommended_roles.is_empty());

        // 30/40 = 75%: broker and general director qualify, head of
        // marketing (65-80) and the sales pair (70-85) do too.
        let at_75 = classify(30);
        assert_eq!(at_75.recommended_roles.len(), 5);

        // 34/40 = 85%: head of marketing (max 80) drops out.
        let at_85 = classify(34);
        assert!(at_85
            .recommended_roles
            .iter()
            .all(|r| r.role != roles::HEAD_OF_MARKETING));
        assert_eq!(at_85.recommended_roles.len(), 4);
    }
}
