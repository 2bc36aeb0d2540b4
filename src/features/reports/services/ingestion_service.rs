use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CreateReport, Report, ReportSeverity};
use crate::features::reports::repositories::ReportRepository;
use crate::features::reports::services::coordinate_extractor::extract_coordinates;
use crate::features::reports::services::text_recognizer::TextRecognizer;
use crate::shared::constants::MAX_IMAGE_BYTES;
use crate::shared::validation::strip_data_url_prefix;

/// A new report as received from a submitter
#[derive(Debug, Clone)]
pub struct SubmitReport {
    pub submitted_by: String,
    pub location: String,
    pub description: String,
    pub severity: ReportSeverity,
    /// Base64 image, optionally with a `data:<mime>;base64,` prefix
    pub image: String,
}

/// Turns a submission into a stored report: validate, OCR, extract coordinates, insert.
pub struct ReportIngestionService {
    repository: Arc<dyn ReportRepository>,
    recognizer: Arc<dyn TextRecognizer>,
    ocr_timeout: Duration,
}

impl ReportIngestionService {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        recognizer: Arc<dyn TextRecognizer>,
        ocr_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            recognizer,
            ocr_timeout,
        }
    }

    pub async fn submit(&self, submission: SubmitReport) -> Result<Report> {
        let image_bytes = Self::validate(&submission)?;

        let text = match tokio::time::timeout(
            self.ocr_timeout,
            self.recognizer.recognize(&image_bytes),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::warn!(user_id = %submission.submitted_by, "Text recognition failed: {}", e);
                return Err(AppError::RecognitionFailure(e.to_string()));
            }
            Err(_) => {
                tracing::warn!(
                    user_id = %submission.submitted_by,
                    timeout_secs = self.ocr_timeout.as_secs(),
                    "Text recognition timed out"
                );
                return Err(AppError::RecognitionFailure(format!(
                    "recognition timed out after {:?}",
                    self.ocr_timeout
                )));
            }
        };

        let coordinates = extract_coordinates(&text);
        if coordinates.is_none() {
            tracing::info!(
                user_id = %submission.submitted_by,
                "No coordinates found in image text"
            );
        }

        let report = self
            .repository
            .create(&CreateReport {
                submitted_by: submission.submitted_by,
                image: submission.image,
                location: submission.location,
                coordinates,
                description: submission.description,
                severity: submission.severity,
            })
            .await?;

        tracing::info!(
            report_id = %report.id,
            user_id = %report.submitted_by,
            latitude = ?report.latitude,
            longitude = ?report.longitude,
            "Report submitted"
        );

        Ok(report)
    }

    /// Check every field before any recognition attempt. Returns the decoded image.
    fn validate(submission: &SubmitReport) -> Result<Vec<u8>> {
        if submission.location.trim().is_empty() {
            return Err(AppError::Validation("Location is required".to_string()));
        }
        if submission.description.trim().is_empty() {
            return Err(AppError::Validation("Description is required".to_string()));
        }

        let payload = strip_data_url_prefix(&submission.image);
        if payload.is_empty() {
            return Err(AppError::Validation("Image is required".to_string()));
        }

        // MIME-style encoders wrap lines; the alphabet never contains whitespace
        let payload: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        let bytes = STANDARD
            .decode(&payload)
            .map_err(|_| AppError::Validation("Image must be valid base64".to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::Validation("Image is required".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Validation(format!(
                "Image must not exceed {} bytes",
                MAX_IMAGE_BYTES
            )));
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{Coordinates, ReportStatus};
    use crate::features::reports::repositories::MockReportRepository;
    use crate::features::reports::services::text_recognizer::{
        MockTextRecognizer, RecognitionError,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn stored(data: &CreateReport) -> Report {
        Report {
            id: Uuid::new_v4(),
            submitted_by: data.submitted_by.clone(),
            image: data.image.clone(),
            location: data.location.clone(),
            latitude: data.coordinates.map(|c| c.latitude),
            longitude: data.coordinates.map(|c| c.longitude),
            description: data.description.clone(),
            severity: data.severity,
            status: ReportStatus::Reported,
            assigned_to: None,
            assigned_date: None,
            date_of_completion: None,
            date_of_submission: Utc::now(),
        }
    }

    fn submission(image: &str) -> SubmitReport {
        SubmitReport {
            submitted_by: "commuter-1".to_string(),
            location: "MG Road, near bus stop".to_string(),
            description: "Deep pothole in the left lane".to_string(),
            severity: ReportSeverity::High,
            image: image.to_string(),
        }
    }

    fn service(
        repository: MockReportRepository,
        recognizer: MockTextRecognizer,
    ) -> ReportIngestionService {
        ReportIngestionService::new(
            Arc::new(repository),
            Arc::new(recognizer),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_submit_extracts_coordinates_from_stamp() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer
            .expect_recognize()
            .withf(|image| image == b"jpeg-bytes".as_slice())
            .times(1)
            .returning(|_| Ok("Lat 17.385000 Long 078.486700".to_string()));

        let mut repository = MockReportRepository::new();
        repository
            .expect_create()
            .withf(|data| {
                data.coordinates
                    == Some(Coordinates {
                        latitude: 17.385,
                        longitude: 78.4867,
                    })
            })
            .times(1)
            .returning(|data| Ok(stored(data)));

        let image = STANDARD.encode(b"jpeg-bytes");
        let report = service(repository, recognizer)
            .submit(submission(&format!("data:image/jpeg;base64,{image}")))
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::Reported);
        assert_eq!(report.latitude, Some(17.385));
        assert_eq!(report.longitude, Some(78.4867));
        // Stored exactly as submitted, prefix included
        assert!(report.image.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn test_blank_text_still_creates_report_without_coordinates() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer
            .expect_recognize()
            .times(1)
            .returning(|_| Ok("   \n".to_string()));

        let mut repository = MockReportRepository::new();
        repository
            .expect_create()
            .withf(|data| data.coordinates.is_none())
            .times(1)
            .returning(|data| Ok(stored(data)));

        let report = service(repository, recognizer)
            .submit(submission(&STANDARD.encode(b"photo")))
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::Reported);
        assert_eq!(report.latitude, None);
        assert_eq!(report.longitude, None);
    }

    #[tokio::test]
    async fn test_line_wrapped_base64_is_accepted() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer
            .expect_recognize()
            .withf(|image| image == b"a photo long enough to wrap across lines".as_slice())
            .times(1)
            .returning(|_| Ok(String::new()));

        let mut repository = MockReportRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|data| Ok(stored(data)));

        let encoded = STANDARD.encode(b"a photo long enough to wrap across lines");
        let (head, tail) = encoded.split_at(20);
        let wrapped = format!("{head}\r\n{tail}\n");

        let report = service(repository, recognizer)
            .submit(submission(&wrapped))
            .await
            .unwrap();

        // Stored exactly as submitted
        assert_eq!(report.image, wrapped);
    }

    #[tokio::test]
    async fn test_empty_image_rejected_before_recognition() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);
        let mut repository = MockReportRepository::new();
        repository.expect_create().times(0);

        let service = service(repository, recognizer);

        for image in ["", "   ", "data:image/png;base64,"] {
            let result = service.submit(submission(image)).await;
            assert!(matches!(result, Err(AppError::Validation(_))), "{image:?}");
        }
    }

    #[tokio::test]
    async fn test_invalid_base64_rejected_before_recognition() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);
        let mut repository = MockReportRepository::new();
        repository.expect_create().times(0);

        let result = service(repository, recognizer)
            .submit(submission("not base64 at all!"))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_blank_location_rejected() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);
        let mut repository = MockReportRepository::new();
        repository.expect_create().times(0);

        let mut input = submission(&STANDARD.encode(b"photo"));
        input.location = "  ".to_string();

        let result = service(repository, recognizer).submit(input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_recognizer_error_persists_nothing() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(1).returning(|_| {
            Err(RecognitionError::EngineFailed {
                status: "exit status: 1".to_string(),
                stderr: "Error in pixReadMem".to_string(),
            })
        });
        let mut repository = MockReportRepository::new();
        repository.expect_create().times(0);

        let result = service(repository, recognizer)
            .submit(submission(&STANDARD.encode(b"photo")))
            .await;

        assert!(matches!(result, Err(AppError::RecognitionFailure(_))));
    }

    struct SlowRecognizer;

    #[async_trait::async_trait]
    impl TextRecognizer for SlowRecognizer {
        async fn recognize(&self, _image: &[u8]) -> std::result::Result<String, RecognitionError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_recognition_timeout_is_a_recognition_failure() {
        let mut repository = MockReportRepository::new();
        repository.expect_create().times(0);

        let service = ReportIngestionService::new(
            Arc::new(repository),
            Arc::new(SlowRecognizer),
            Duration::from_millis(50),
        );

        let result = service.submit(submission(&STANDARD.encode(b"photo"))).await;
        assert!(matches!(result, Err(AppError::RecognitionFailure(_))));
    }
}
