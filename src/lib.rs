pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod services;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::services::notification_service::NotificationService;
use crate::services::report_service::ReportService;
use crate::services::store_service::StoreService;
use crate::services::submission_service::SubmissionService;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub submission_service: SubmissionService,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> error::Result<Self> {
        let store = StoreService::new(pool.clone());
        let notifier = NotificationService::new(config)?;

        let submission_service = SubmissionService::new(store.clone(), notifier);
        let report_service = ReportService::new(store);

        Ok(Self {
            pool,
            submission_service,
            report_service,
        })
    }
}
