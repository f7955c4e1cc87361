use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Classification, Tier};

/// Free-text answers to the eight fixed KFU screening questions.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KfuAnswers {
    #[validate(length(min = 1))]
    pub question1: String,
    #[validate(length(min = 1))]
    pub question2: String,
    #[validate(length(min = 1))]
    pub question3: String,
    #[validate(length(min = 1))]
    pub question4: String,
    #[validate(length(min = 1))]
    pub question5: String,
    #[validate(length(min = 1))]
    pub question6: String,
    #[validate(length(min = 1))]
    pub question7: String,
    #[validate(length(min = 1))]
    pub question8: String,
}

/// Question labels in report order.
pub const QUESTION_LABELS: [&str; 8] = [
    "Real estate experience",
    "Team size",
    "Management experience",
    "Key metric",
    "Priority task",
    "Handling weak performers",
    "Relevant experience",
    "CRM experience",
];

impl KfuAnswers {
    pub fn in_order(&self) -> [&str; 8] {
        [
            &self.question1,
            &self.question2,
            &self.question3,
            &self.question4,
            &self.question5,
            &self.question6,
            &self.question7,
            &self.question8,
        ]
    }
}

/// KFU is pass/fail only; the verdict passes through the caller's decision.
pub fn classify(passed: bool) -> Classification {
    let (tier, recommendation) = if passed {
        (Tier::Good, "Candidate meets the baseline requirements")
    } else {
        (
            Tier::NotSuitable,
            "Candidate does not meet the baseline requirements",
        )
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
    fn pass_through_verdict() {
        assert!(classify(true).passed());
        assert!(!classify(false).passed());
    }
}
