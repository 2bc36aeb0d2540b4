mod report;

pub use report::{Coordinates, CreateReport, Report, ReportSeverity, ReportStatus};
