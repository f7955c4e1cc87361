use chrono::Utc;
use tracing::{info, warn};

use crate::dto::submission_dto::Submission;
use crate::error::Result;
use crate::models::session::SessionData;
use crate::scoring::Classification;
use crate::services::message_service::MessageService;
use crate::services::notification_service::NotificationService;
use crate::services::store_service::StoreService;

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub classification: Classification,
    pub user_id: Option<i64>,
    pub test_result_id: Option<i64>,
    pub is_new_user: bool,
}

/// Drives one submission through scoring, persistence and notification.
/// Scoring always succeeds; persistence and notification are best-effort so
/// a storage or Telegram outage never loses the candidate their verdict.
#[derive(Clone)]
pub struct SubmissionService {
    store: StoreService,
    notifier: NotificationService,
}

impl SubmissionService {
    pub fn new(store: StoreService, notifier: NotificationService) -> Self {
        Self { store, notifier }
    }

    pub async fn process(&self, submission: Submission) -> Result<SubmissionOutcome> {
        let kind = submission.scores.kind();
        let classification = submission.scores.classify();
        let score = submission.scores.score();

        info!(
            test = kind.name(),
            telegram = %submission.candidate.telegram,
            tier = classification.tier.label(),
            "Processed submission"
        );

        let mut user_id = None;
        let mut test_result_id = None;
        let mut is_new_user = false;

        match self.persist(&submission, &classification, score).await {
            Ok((uid, rid, is_new)) => {
                user_id = Some(uid);
                test_result_id = Some(rid);
                is_new_user = is_new;
            }
            Err(e) => {
                warn!(test = kind.name(), error = %e, "Failed to persist submission");
            }
        }

        let message = MessageService::format(&submission, &classification, Utc::now());
        if let Err(e) = self.notifier.send(&message).await {
            warn!(test = kind.name(), error = %e, "Failed to deliver notification");
        }

        Ok(SubmissionOutcome {
            classification,
            user_id,
            test_result_id,
            is_new_user,
        })
    }

    async fn persist(
        &self,
        submission: &Submission,
        classification: &Classification,
        score: i64,
    ) -> Result<(i64, i64, bool)> {
        let user = self
            .store
            .upsert_user(
                &submission.candidate.name,
                &submission.candidate.telegram,
                &submission.candidate.role,
            )
            .await?;

        let result_id = self
            .store
            .save_test_result(
                user.id,
                submission.scores.kind(),
                score,
                classification.passed(),
                &submission.scores,
                classification,
            )
            .await?;

        let session = SessionData {
            test_completed: submission.scores.kind().name().to_string(),
            last_activity: Utc::now(),
        };
        self.store.create_session(user.id, &session).await?;

        Ok((user.id, result_id, user.is_new))
    }
}
