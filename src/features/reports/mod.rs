//! Pothole reports.
//!
//! A submission carries a photo whose coordinate stamp is read with OCR; the
//! extracted latitude/longitude are stored with the report. Municipal staff then
//! claim reported potholes and mark them repaired.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/report/upload` | Submit a report |
//! | GET | `/api/report/pothole/{user_id}` | Submitter's reports by status |
//! | GET | `/api/report/reported` | Unassigned queue |
//! | GET | `/api/report/pothole/completed/{user_id}` | Assignee's reports |
//! | PUT | `/api/report/pothole/assign/{id}` | Claim a report |
//! | PUT | `/api/report/pothole/complete/{id}` | Mark repaired |
//! | GET | `/api/report/potholes` | Public map points |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use handlers::ReportState;
pub use repositories::PgReportRepository;
pub use services::{ReportIngestionService, ReportService, TesseractRecognizer};
