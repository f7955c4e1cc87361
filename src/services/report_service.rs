use crate::dto::report_dto::{ActiveSessionView, OverviewStats, RoleStats, TestResultView, TestStats};
use crate::error::Result;
use crate::models::user::User;
use crate::services::store_service::StoreService;

/// Read-side queries for the admin endpoints.
#[derive(Clone)]
pub struct ReportService {
    store: StoreService,
}

impl ReportService {
    pub fn new(store: StoreService) -> Self {
        Self { store }
    }

    pub async fn user_by_telegram(&self, telegram: &str) -> Result<Option<User>> {
        self.store.get_user(telegram).await
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    pub async fn results_for_user(&self, user_id: i64) -> Result<Vec<TestResultView>> {
        let rows = self.store.results_for_user(user_id).await?;
        Ok(rows.into_iter().map(TestResultView::from).collect())
    }

    pub async fn results_for_role(&self, role: &str) -> Result<Vec<TestResultView>> {
        let rows = self.store.results_for_role(role).await?;
        Ok(rows.into_iter().map(TestResultView::from).collect())
    }

    pub async fn all_results(&self) -> Result<Vec<TestResultView>> {
        let rows = self.store.all_results().await?;
        Ok(rows.into_iter().map(TestResultView::from).collect())
    }

    pub async fn role_stats(&self) -> Result<Vec<RoleStats>> {
        self.store.role_stats().await
    }

    pub async fn test_stats(&self) -> Result<Vec<TestStats>> {
        self.store.test_stats().await
    }

    pub async fn active_sessions(&self) -> Result<Vec<ActiveSessionView>> {
        let rows = self.store.active_sessions().await?;
        Ok(rows.into_iter().map(ActiveSessionView::from).collect())
    }

    pub async fn overview(&self) -> Result<OverviewStats> {
        let users_by_role = self.store.role_stats().await?;
        let test_stats = self.store.test_stats().await?;

        let total_users = users_by_role.iter().map(|r| r.count).sum();
        let active_users = users_by_role.iter().map(|r| r.active_count).sum();
        let total_tests = test_stats.iter().map(|t| t.attempts).sum();

        Ok(OverviewStats {
            total_users,
            active_users,
            total_tests,
            users_by_role,
            test_stats,
        })
    }
}
