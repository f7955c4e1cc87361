use chrono::{DateTime, Utc};

use crate::dto::submission_dto::{ClientContext, Submission};
use crate::scoring::oca::Severity;
use crate::scoring::{disc, kfu, oca, Classification, TestScores, Tier};

/// Renders one submission into the Telegram Markdown report. Pure string
/// work; no IO happens here.
pub struct MessageService;

impl MessageService {
    pub fn format(
        submission: &Submission,
        analysis: &Classification,
        completed_at: DateTime<Utc>,
    ) -> String {
        let kind = submission.scores.kind();
        let mut out = String::new();

        out.push_str(&format!("{} *{} Test Results*\n\n", header_emoji(&submission.scores), kind.name()));
        out.push_str(&format!("👤 *Candidate:* {}\n", submission.candidate.name));
        out.push_str(&format!(
            "📱 *Telegram:* @{}\n",
            submission.candidate.telegram.trim_start_matches('@')
        ));
        out.push_str(&format!("💼 *Position:* {}\n", submission.candidate.role));
        out.push_str(&format!(
            "📅 *Date:* {}\n\n",
            completed_at.format("%Y-%m-%d %H:%M UTC")
        ));

        push_score_block(&mut out, &submission.scores);

        out.push_str(&format!(
            "{} *Verdict:* {}\n",
            verdict_emoji(analysis.tier),
            analysis.tier.label()
        ));
        out.push_str(&format!("💡 {}\n", analysis.recommendation));

        if let ClientContext::Scale(client) = &submission.context {
            out.push_str(&format!("\n📈 *Level:* {}\n", client.level));
            out.push_str(&format!("📝 {}\n", client.description));
            out.push_str(&format!("🎯 {}\n", client.recommendation));
        }
        if let ClientContext::Oca(client) = &submission.context {
            out.push_str(&format!("\n📝 {}\n", client.overall_assessment));
            out.push_str(&format!("🎯 {}\n", client.recommendation));
        }

        if !analysis.strengths.is_empty() {
            out.push_str("\n✅ *Strengths:*\n");
            for strength in &analysis.strengths {
                out.push_str(&format!("• {}\n", strength));
            }
        }
        if !analysis.concerns.is_empty() {
            out.push_str("\n⚠️ *Concerns:*\n");
            for concern in &analysis.concerns {
                out.push_str(&format!("• {}\n", concern));
            }
        }
        if !analysis.recommended_roles.is_empty() {
            out.push_str("\n🎯 *Recommended positions:*\n");
            for role in &analysis.recommended_roles {
                out.push_str(&format!("• {} ({})\n", role.role, role.note));
            }
        }

        out.push_str("\n➡️ HR will contact the candidate about next steps.");
        out
    }
}

fn header_emoji(scores: &TestScores) -> &'static str {
    match scores {
        TestScores::Disc { .. } => "📊",
        TestScores::Eq { .. } => "🧠",
        TestScores::Spq { .. } => "💪",
        TestScores::Hubbard { .. } => "🎭",
        TestScores::Integrity { .. } => "🛡️",
        TestScores::Oca { .. } => "🧩",
        TestScores::Aptitude { .. } => "🎓",
        TestScores::Kfu { .. } => "📋",
    }
}

fn verdict_emoji(tier: Tier) -> &'static str {
    match tier {
        Tier::Excellent => "🏆",
        Tier::Good => "✅",
        Tier::Moderate => "⚠️",
        Tier::NotSuitable => "❌",
    }
}

fn severity_emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::Red => "🔴",
        Severity::Yellow => "🟡",
        Severity::Green => "🟢",
    }
}

fn push_score_block(out: &mut String, scores: &TestScores) {
    match scores {
        TestScores::Disc { scores } => {
            out.push_str("*Scores:*\n");
            out.push_str(&format!("D (Dominance): {}\n", scores.d));
            out.push_str(&format!("I (Influence): {}\n", scores.i));
            out.push_str(&format!("S (Steadiness): {}\n", scores.s));
            out.push_str(&format!("C (Conscientiousness): {}\n", scores.c));
            let dominant = disc::dominant(scores);
            out.push_str(&format!(
                "🔝 *Dominant trait:* {} ({})\n\n",
                dominant.label(),
                scores.get(dominant)
            ));
        }
        TestScores::Eq { score } => {
            out.push_str(&format!(
                "*Score:* {}/40 ({:.0}%)\n\n",
                score,
                *score as f64 / 40.0 * 100.0
            ));
        }
        TestScores::Spq { score } => {
            out.push_str(&format!(
                "*Score:* {}/30 ({:.0}%)\n\n",
                score,
                *score as f64 / 30.0 * 100.0
            ));
        }
        TestScores::Hubbard {
            score,
            average_tone,
        } => {
            out.push_str(&format!("*Score:* {}/40\n", score));
            out.push_str(&format!("*Average tone:* {:.2}\n\n", average_tone));
        }
        TestScores::Integrity { score } => {
            out.push_str(&format!("*Score:* {}/30\n\n", score));
        }
        TestScores::Oca { scores, .. } => {
            out.push_str("*Characteristics:*\n");
            for reading in oca::readings(scores) {
                out.push_str(&format!(
                    "{} {}: {}\n",
                    severity_emoji(reading.severity),
                    reading.name,
                    reading.score
                ));
            }
            out.push('\n');
        }
        TestScores::Aptitude { scores } => {
            out.push_str("*Scores:*\n");
            out.push_str(&format!(
                "Attention: {}/20 ({:.0}%)\n",
                scores.attention,
                scores.attention_pct()
            ));
            out.push_str(&format!(
                "Understanding: {}/20 ({:.0}%)\n",
                scores.understanding,
                scores.understanding_pct()
            ));
            out.push_str(&format!(
                "Logic: {}/20 ({:.0}%)\n",
                scores.logic,
                scores.logic_pct()
            ));
            out.push_str(&format!("*Total:* {}/60\n\n", scores.total()));
        }
        TestScores::Kfu {
            answers,
            passed,
            score,
        } => {
            out.push_str(&format!("*Score:* {}/8\n", score));
            out.push_str(&format!(
                "*Result:* {}\n\n",
                if *passed { "PASSED" } else { "FAILED" }
            ));
            out.push_str("*Answers:*\n");
            for (label, answer) in kfu::QUESTION_LABELS.iter().zip(answers.in_order()) {
                out.push_str(&format!("• {}: {}\n", label, answer));
            }
            out.push('\n');
        }
    }
}
