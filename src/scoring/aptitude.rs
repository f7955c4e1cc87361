use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{roles, Classification, RoleMatch, Tier};

pub const SUB_MAX: i64 = 20;
pub const MAX_SCORE: i64 = 60;

/// Three cognitive sub-scores, each out of 20.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeScores {
    #[validate(range(min = 0, max = 20))]
    pub attention: i64,
    #[validate(range(min = 0, max = 20))]
    pub understanding: i64,
    #[validate(range(min = 0, max = 20))]
    pub logic: i64,
}

impl AptitudeScores {
    pub fn total(&self) -> i64 {
        self.attention + self.understanding + self.logic
    }

    pub fn attention_pct(&self) -> f64 {
        self.attention as f64 / SUB_MAX as f64 * 100.0
    }

    pub fn understanding_pct(&self) -> f64 {
        self.understanding as f64 / SUB_MAX as f64 * 100.0
    }

    pub fn logic_pct(&self) -> f64 {
        self.logic as f64 / SUB_MAX as f64 * 100.0
    }
}

/// Role gates are conjunctive: every listed sub-percentage threshold must
/// hold at once.
pub fn classify(scores: &AptitudeScores) -> Classification {
    let att = scores.attention_pct();
    let und = scores.understanding_pct();
    let log = scores.logic_pct();
    let total = scores.total();

    if total >= 45 {
        let mut recommended = Vec::new();
        if und >= 85.0 && log >= 85.0 {
            recommended.push(RoleMatch::new(
                roles::GENERAL_DIRECTOR,
                "85-95% understanding and logic",
            ));
        }
        if log >= 85.0 && att >= 75.0 {
            recommended.push(RoleMatch::new(
                roles::MARKETING_ANALYST,
                "85-95% logic, 75-90% attention",
            ));
        }
        if att >= 80.0 && log >= 80.0 {
            recommended.push(RoleMatch::new(
                roles::FINANCIAL_DIRECTOR,
                "80-95% attention, 80-90% logic",
            ));
        }
        if und >= 75.0 && log >= 75.0 {
            recommended.push(RoleMatch::new(
                roles::COMMERCIAL_DIRECTOR,
                "75-90% understanding and logic",
            ));
            recommended.push(RoleMatch::new(
                roles::OPERATIONS_DIRECTOR,
                "75-90% understanding and logic",
            ));
        }
        Classification {
            tier: Tier::Excellent,
            recommendation: "Excellent attention, understanding and productive thinking"
                .to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: recommended,
        }
    } else if total >= 35 {
        let mut recommended = Vec::new();
        if und >= 75.0 && att >= 60.0 {
            recommended.push(RoleMatch::new(roles::HEAD_OF_SALES, "75-90% understanding"));
        }
        if und >= 70.0 && log >= 65.0 {
            recommended.push(RoleMatch::new(
                roles::HEAD_OF_MARKETING,
                "70-85% understanding, 65-80% logic",
            ));
        }
        if att >= 75.0 && und >= 65.0 {
            recommended.push(RoleMatch::new(roles::OPERATIONS_MANAGER, "75-90% attention"));
        }
        if und >= 75.0 && log >= 60.0 {
            recommended.push(RoleMatch::new(roles::BROKER, "75-90% understanding"));
        }
        Classification {
            tier: Tier::Good,
            recommendation: "Good level of cognitive skills, suitable for selected positions"
                .to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: recommended,
        }
    } else if total >= 25 {
        let mut recommended = Vec::new();
        if att >= 80.0 {
            recommended.push(RoleMatch::new(roles::EXECUTIVE_ASSISTANT, "80-95% attention"));
        }
        if att >= 65.0 && und >= 60.0 {
            recommended.push(RoleMatch::new(
                roles::DESIGNER,
                "65-80% attention, 60-70% understanding",
            ));
        }
        Classification {
            tier: Tier::Moderate,
            recommendation: "Basic cognitive level, fits execution-focused positions".to_string(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            recommended_roles: recommended,
        }
    } else {
        Classification {
            tier: Tier::NotSuitable,
            recommendation: "Limited cognitive capacity, not recommended for analytical work"
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

    fn scores(attention: i64, understanding: i64, logic: i64) -> AptitudeScores {
        AptitudeScores {
            attention,
            understanding,
            logic,
        }
    }

    #[test]
    fn total_sums_sub_scores() {
        assert_eq!(scores(18, 16, 15).total(), 49);
    }

    #[test]
    fn tier_boundaries_on_total() {
        assert_eq!(classify(&scores(15, 15, 15)).tier, Tier::Excellent); // 45
        assert_eq!(classify(&scores(15, 15, 14)).tier, Tier::Good); // 44
        assert_eq!(classify(&scores(12, 12, 11)).tier, Tier::Good); // 35
        assert_eq!(classify(&scores(12, 12, 10)).tier, Tier::Moderate); // 34
        assert_eq!(classify(&scores(9, 8, 8)).tier, Tier::Moderate); // 25
        assert_eq!(classify(&scores(8, 8, 8)).tier, Tier::NotSuitable); // 24
    }

    #[test]
    fn conjunctive_gates_filter_roles() {
        // attention 90%, understanding 80%, logic 75%: total 49 -> Excellent.
        // Only the pairs requiring understanding>=75 && logic>=75 pass.
        let result = classify(&scores(18, 16, 15));
        assert_eq!(result.tier, Tier::Excellent);
        let names: Vec<&str> = result.recommended_roles.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(
            names,
            vec![roles::COMMERCIAL_DIRECTOR, roles::OPERATIONS_DIRECTOR]
        );
    }

    #[test]
    fn perfect_scores_pass_every_excellent_gate() {
        let result = classify(&scores(20, 20, 20));
        assert_eq!(result.recommended_roles.len(), 5);
    }
}
