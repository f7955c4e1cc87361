use super::{matching_roles, roles, Classification, RoleGate, RoleMatch, Tier};

pub const MAX_SCORE: i64 = 30;

pub fn percentage(score: i64) -> f64 {
    score as f64 / MAX_SCORE as f64 * 100.0
}

/// Top-tier roles open at a minimum percentage and stay open above it; the
/// range in the note is descriptive text only.
fn excellent_roles(pct: f64) -> Vec<RoleMatch> {
    let mut recommended = Vec::new();
    if pct >= 85.0 {
        recommended.push(RoleMatch::new(roles::HEAD_OF_SALES, "85-95% persistence"));
        recommended.push(RoleMatch::new(roles::GENERAL_DIRECTOR, "85-95% persistence"));
    }
    if pct >= 80.0 {
        recommended.push(RoleMatch::new(roles::BROKER, "80-95% persistence"));
        recommended.push(RoleMatch::new(roles::COMMERCIAL_DIRECTOR, "80-90% persistence"));
    }
    recommended
}

const GOOD_GATES: &[RoleGate] = &[
    RoleGate { role: roles::HEAD_OF_MARKETING, min: 65.0, max: 80.0, note: "65-80% persistence" },
    RoleGate { role: roles::OPERATIONS_DIRECTOR, min: 65.0, max: 75.0, note: "65-75% persistence" },
];

fn moderate_roles() -> Vec<RoleMatch> {
    vec![
        RoleMatch::new(roles::FINANCIAL_DIRECTOR, "persistence not critical"),
        RoleMatch::new(roles::MARKETING_ANALYST, "persistence not critical"),
        RoleMatch::new(roles::EXECUTIVE_ASSISTANT, "persistence not applicable"),
        RoleMatch::new(roles::DESIGNER, "persistence not applicable"),
        RoleMatch::new(roles::OPERATIONS_MANAGER, "low persistence weight"),
    ]
}

fn fallback_roles() -> Vec<RoleMatch> {
    vec![
        RoleMatch::new("Analytical positions", "no sales persistence required"),
        RoleMatch::new("Operational positions", "execution focus"),
        RoleMatch::new("Back office", "process support"),
    ]
}

pub fn classify(score: i64) -> Classification {
    let pct = percentage(score);
    if pct >= 80.0 {
        Classification {
            tier: Tier::Excellent,
            recommendation: "High sales persistence, strong fit for sales roles".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: excellent_roles(pct),
        }
    } else if pct >= 65.0 {
        Classification {
            tier: Tier::Good,
            recommendation: "Good sales persistence, suitable for selected positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: matching_roles(GOOD_GATES, pct),
        }
    } else if pct >= 50.0 {
        Classification {
            tier: Tier::Moderate,
            recommendation: "Basic sales persistence, fits non-sales positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: moderate_roles(),
        }
    } else {
        Classification {
            tier: Tier::NotSuitable,
            recommendation: "Low sales persistence, not recommended for sales roles".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: fallback_roles(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(classify(24).tier, Tier::Excellent); // 80%
        assert_eq!(classify(23).tier, Tier::Good); // ~76.7%
        assert_eq!(classify(15).tier, Tier::Moderate); // 50%
        assert_eq!(classify(14).tier, Tier::NotSuitable); // ~46.7%
    }

    #[test]
    fn top_tier_roles_gate_on_percentage() {
        // 30/30 = 100%: every excellent role stays listed.
        let perfect = classify(30);
        assert_eq!(perfect.recommended_roles.len(), 4);

        // 26/30 ~ 86.7%: all four excellent gates qualify.
        let strong = classify(26);
        assert_eq!(strong.recommended_roles.len(), 4);

        // 24/30 = 80%: only the gates opening at 80 remain.
        let at_80 = classify(24);
        let names: Vec<&str> = at_80.recommended_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(names, vec![roles::BROKER, roles::COMMERCIAL_DIRECTOR]);
    }

    #[test]
    fn good_tier_roles_keep_their_upper_bounds() {
        // 23/30 ~ 76.7%: past the operations director cap of 75.
        let high_good = classify(23);
        let names: Vec<&str> = high_good.recommended_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(names, vec![roles::HEAD_OF_MARKETING]);

        // 21/30 = 70%: inside both good ranges.
        let mid_good = classify(21);
        assert_eq!(mid_good.recommended_roles.len(), 2);
    }

    #[test]
    fn moderate_tier_lists_fixed_non_sales_roles() {
        let result = classify(16);
        assert_eq!(result.tier, Tier::Moderate);
        assert_eq!(result.recommended_roles.len(), 5);
    }
}
