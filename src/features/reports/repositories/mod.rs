mod report_repository;

#[cfg(test)]
pub use report_repository::MockReportRepository;
pub use report_repository::{PgReportRepository, ReportRepository};
