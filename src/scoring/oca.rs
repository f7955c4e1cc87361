use serde::{Deserialize, Serialize};

use super::{Classification, Tier};

/// The ten OCA personality characteristics, in questionnaire order.
pub const CHARACTERISTICS: [&str; 10] = [
    "Stability",
    "Happiness",
    "Persistence",
    "Self-control",
    "Initiative",
    "Sociability",
    "Responsibility",
    "Suppression",
    "Activity",
    "Communication level",
];

/// Signed score per characteristic, same order as [`CHARACTERISTICS`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OcaScores(pub [i64; 10]);

/// Overall suitability is supplied by the caller's earlier analysis stage;
/// this layer never derives it from the ten scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OcaSuitability {
    Excellent,
    Good,
    Problematic,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

pub fn severity(score: i64) -> Severity {
    if score < 0 {
        Severity::Red
    } else if score < 30 {
        Severity::Yellow
    } else {
        Severity::Green
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicReading {
    pub name: &'static str,
    pub score: i64,
    pub severity: Severity,
}

/// Per-characteristic severity markers for the report.
pub fn readings(scores: &OcaScores) -> Vec<CharacteristicReading> {
    CHARACTERISTICS
        .iter()
        .zip(scores.0.iter())
        .map(|(name, &score)| CharacteristicReading {
            name,
            score,
            severity: severity(score),
        })
        .collect()
}

/// Number of characteristics in the green band; persisted as the OCA score.
pub fn green_count(scores: &OcaScores) -> i64 {
    scores
        .0
        .iter()
        .filter(|&&score| severity(score) == Severity::Green)
        .count() as i64
}

pub fn classify(suitability: OcaSuitability) -> Classification {
    let (tier, recommendation) = match suitability {
        OcaSuitability::Excellent => (
            Tier::Excellent,
            "Stable personality, suitable for any position",
        ),
        OcaSuitability::Good => (
            Tier::Good,
            "Good profile with potential, consider a trial period",
        ),
        OcaSuitability::Problematic => (
            Tier::Moderate,
            "Serious weak points, not recommended without additional vetting",
        ),
        OcaSuitability::Critical => (Tier::NotSuitable, "Multiple problem areas, do not hire"),
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
    fn severity_markers() {
        assert_eq!(severity(-5), Severity::Red);
        assert_eq!(severity(0), Severity::Yellow);
        assert_eq!(severity(29), Severity::Yellow);
        assert_eq!(severity(30), Severity::Green);
        assert_eq!(severity(95), Severity::Green);
    }

    #[test]
    fn readings_keep_questionnaire_order() {
        let scores = OcaScores([40, -10, 15, 35, 0, 50, 29, 30, -1, 90]);
        let readings = readings(&scores);
        assert_eq!(readings.len(), 10);
        assert_eq!(readings[0].name, "Stability");
        assert_eq!(readings[1].severity, Severity::Red);
        assert_eq!(readings[9].name, "Communication level");
        assert_eq!(green_count(&scores), 5);
    }

    #[test]
    fn suitability_maps_one_to_one() {
        assert_eq!(classify(OcaSuitability::Excellent).tier, Tier::Excellent);
        assert_eq!(classify(OcaSuitability::Good).tier, Tier::Good);
        assert_eq!(classify(OcaSuitability::Problematic).tier, Tier::Moderate);
        assert_eq!(classify(OcaSuitability::Critical).tier, Tier::NotSuitable);
    }
}
