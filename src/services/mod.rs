pub mod message_service;
pub mod notification_service;
pub mod report_service;
pub mod store_service;
pub mod submission_service;
