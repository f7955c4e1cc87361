pub mod report_dto;
pub mod submission_dto;
