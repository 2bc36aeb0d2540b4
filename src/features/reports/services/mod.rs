pub mod coordinate_extractor;
mod ingestion_service;
mod report_service;
pub mod text_recognizer;

pub use ingestion_service::{ReportIngestionService, SubmitReport};
pub use report_service::{AssigneeReports, ReportService, SubmitterReports};
pub use text_recognizer::TesseractRecognizer;
