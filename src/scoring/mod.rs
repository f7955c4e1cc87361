pub mod aptitude;
pub mod disc;
pub mod eq;
pub mod hubbard;
pub mod integrity;
pub mod kfu;
pub mod oca;
pub mod roles;
pub mod spq;

use serde::{Deserialize, Serialize};

pub use aptitude::AptitudeScores;
pub use disc::{DiscScores, DiscTrait};
pub use kfu::KfuAnswers;
pub use oca::{OcaScores, OcaSuitability};

/// The eight tests this backend screens candidates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    Disc,
    Eq,
    Spq,
    Hubbard,
    Integrity,
    Oca,
    Aptitude,
    Kfu,
}

impl TestKind {
    pub fn name(self) -> &'static str {
        match self {
            TestKind::Disc => "DISC",
            TestKind::Eq => "EQ",
            TestKind::Spq => "SPQ",
            TestKind::Hubbard => "Hubbard",
            TestKind::Integrity => "Integrity",
            TestKind::Oca => "OCA",
            TestKind::Aptitude => "Aptitude",
            TestKind::Kfu => "KFU",
        }
    }

    pub fn category(self) -> &'static str {
        match self {
            TestKind::Disc | TestKind::Oca => "personality",
            TestKind::Eq => "emotional-intelligence",
            TestKind::Spq => "sales-persistence",
            TestKind::Hubbard => "tone-scale",
            TestKind::Integrity => "integrity",
            TestKind::Aptitude => "cognitive",
            TestKind::Kfu => "critical-factors",
        }
    }

    pub fn max_score(self) -> i64 {
        match self {
            TestKind::Disc => 24,
            TestKind::Eq | TestKind::Hubbard => 40,
            TestKind::Spq | TestKind::Integrity => 30,
            TestKind::Oca => 10,
            TestKind::Aptitude => 60,
            TestKind::Kfu => 8,
        }
    }
}

/// Suitability verdict, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    NotSuitable,
    Moderate,
    Good,
    Excellent,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::NotSuitable => "NOT SUITABLE",
            Tier::Moderate => "MODERATE",
            Tier::Good => "GOOD",
            Tier::Excellent => "EXCELLENT",
        }
    }
}

/// A role the candidate qualifies for, with the qualifying range text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub note: String,
}

impl RoleMatch {
    pub fn new(role: &str, note: &str) -> Self {
        Self {
            role: role.to_string(),
            note: note.to_string(),
        }
    }
}

/// Output of every scoring function. Serialized as-is into the
/// `test_results.analysis` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub tier: Tier,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_roles: Vec<RoleMatch>,
}

impl Classification {
    pub fn passed(&self) -> bool {
        self.tier != Tier::NotSuitable
    }
}

/// Raw answer payload of one submission, tagged by test. This is the typed
/// form used inside the engine; it is serialized to the `test_results.answers`
/// column only at the storage edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "camelCase")]
pub enum TestScores {
    Disc {
        scores: DiscScores,
    },
    Eq {
        score: i64,
    },
    Spq {
        score: i64,
    },
    Hubbard {
        score: i64,
        #[serde(rename = "averageTone")]
        average_tone: f64,
    },
    Integrity {
        score: i64,
    },
    Oca {
        scores: OcaScores,
        suitability: OcaSuitability,
    },
    Aptitude {
        scores: AptitudeScores,
    },
    Kfu {
        answers: KfuAnswers,
        passed: bool,
        score: i64,
    },
}

impl TestScores {
    pub fn kind(&self) -> TestKind {
        match self {
            TestScores::Disc { .. } => TestKind::Disc,
            TestScores::Eq { .. } => TestKind::Eq,
            TestScores::Spq { .. } => TestKind::Spq,
            TestScores::Hubbard { .. } => TestKind::Hubbard,
            TestScores::Integrity { .. } => TestKind::Integrity,
            TestScores::Oca { .. } => TestKind::Oca,
            TestScores::Aptitude { .. } => TestKind::Aptitude,
            TestScores::Kfu { .. } => TestKind::Kfu,
        }
    }

    /// The integer score persisted alongside the raw answers.
    pub fn score(&self) -> i64 {
        match self {
            TestScores::Disc { scores } => scores.get(disc::dominant(scores)),
            TestScores::Eq { score }
            | TestScores::Spq { score }
            | TestScores::Hubbard { score, .. }
            | TestScores::Integrity { score }
            | TestScores::Kfu { score, .. } => *score,
            TestScores::Oca { scores, .. } => oca::green_count(scores),
            TestScores::Aptitude { scores } => scores.total(),
        }
    }

    pub fn classify(&self) -> Classification {
        match self {
            TestScores::Disc { scores } => disc::classify(scores),
            TestScores::Eq { score } => eq::classify(*score),
            TestScores::Spq { score } => spq::classify(*score),
            TestScores::Hubbard { average_tone, .. } => hubbard::classify(*average_tone),
            TestScores::Integrity { score } => integrity::classify(*score),
            TestScores::Oca { suitability, .. } => oca::classify(*suitability),
            TestScores::Aptitude { scores } => aptitude::classify(scores),
            TestScores::Kfu { passed, .. } => kfu::classify(*passed),
        }
    }
}

/// A role recommendation gated on an inclusive numeric range (percentage or
/// tone, depending on the test).
pub(crate) struct RoleGate {
    pub role: &'static str,
    pub min: f64,
    pub max: f64,
    pub note: &'static str,
}

pub(crate) fn matching_roles(gates: &[RoleGate], value: f64) -> Vec<RoleMatch> {
    gates
        .iter()
        .filter(|gate| value >= gate.min && value <= gate.max)
        .map(|gate| RoleMatch::new(gate.role, gate.note))
        .collect()
}
