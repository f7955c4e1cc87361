use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::scoring::{
    AptitudeScores, Classification, DiscScores, KfuAnswers, OcaScores, OcaSuitability, TestScores,
};

/// Candidate identity shared by every submission endpoint.
#[derive(Debug, Clone)]
pub struct CandidateInfo {
    pub name: String,
    pub telegram: String,
    pub role: String,
}

/// Analysis text precomputed by the test frontend for the scale-based tests.
/// Carried through to the report verbatim; tiering always happens server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientAnalysis {
    pub level: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcaClientAnalysis {
    pub overall_assessment: String,
    pub recommendation: String,
    pub suitability: OcaSuitability,
}

/// Caller-supplied context the scoring layer does not derive itself.
#[derive(Debug, Clone)]
pub enum ClientContext {
    None,
    Scale(ClientAnalysis),
    Oca(OcaClientAnalysis),
}

/// One validated submission, ready for the orchestration pipeline.
#[derive(Debug, Clone)]
pub struct Submission {
    pub candidate: CandidateInfo,
    pub scores: TestScores,
    pub context: ClientContext,
}

const DEFAULT_ROLE: &str = "broker";

fn candidate(name: String, telegram: String, role: Option<String>) -> CandidateInfo {
    CandidateInfo {
        name,
        telegram,
        role: role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiscSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(nested)]
    pub scores: DiscScores,
}

impl DiscSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Disc {
                scores: self.scores,
            },
            context: ClientContext::None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EqSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(range(min = 0, max = 40))]
    pub score: i64,
    pub analysis: ClientAnalysis,
}

impl EqSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Eq { score: self.score },
            context: ClientContext::Scale(self.analysis),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SpqSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(range(min = 0, max = 30))]
    pub score: i64,
    pub analysis: ClientAnalysis,
}

impl SpqSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Spq { score: self.score },
            context: ClientContext::Scale(self.analysis),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HubbardSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(range(min = 0, max = 40))]
    pub score: i64,
    #[serde(rename = "averageTone")]
    #[validate(range(min = 0.0, max = 4.0))]
    pub average_tone: f64,
    pub analysis: ClientAnalysis,
}

impl HubbardSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Hubbard {
                score: self.score,
                average_tone: self.average_tone,
            },
            context: ClientContext::Scale(self.analysis),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IntegritySubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(range(min = 0, max = 30))]
    pub score: i64,
    pub analysis: ClientAnalysis,
}

impl IntegritySubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Integrity { score: self.score },
            context: ClientContext::Scale(self.analysis),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OcaSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    pub scores: OcaScores,
    pub analysis: OcaClientAnalysis,
}

impl OcaSubmission {
    pub fn into_submission(self) -> Submission {
        let suitability = self.analysis.suitability;
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Oca {
                scores: self.scores,
                suitability,
            },
            context: ClientContext::Oca(self.analysis),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AptitudeSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(nested)]
    pub scores: AptitudeScores,
}

impl AptitudeSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Aptitude {
                scores: self.scores,
            },
            context: ClientContext::None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct KfuSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub telegram: String,
    pub role: Option<String>,
    #[validate(nested)]
    pub answers: KfuAnswers,
    pub passed: bool,
    pub score: Option<i64>,
}

impl KfuSubmission {
    pub fn into_submission(self) -> Submission {
        Submission {
            candidate: candidate(self.name, self.telegram, self.role),
            scores: TestScores::Kfu {
                answers: self.answers,
                passed: self.passed,
                score: self.score.unwrap_or(0),
            },
            context: ClientContext::None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub analysis: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
