use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Coordinates, Report, ReportSeverity, ReportStatus};
use crate::features::reports::services::{AssigneeReports, SubmitterReports};

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub submitted_by: String,
    /// Base64 image as submitted
    pub image: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Map link for the extracted coordinates, null when none were found
    pub map_url: Option<String>,
    pub description: String,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub assigned_to: Option<String>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub date_of_completion: Option<DateTime<Utc>>,
    pub date_of_submission: DateTime<Utc>,
}

impl ReportResponseDto {
    pub fn from_report(report: Report, map_url_base: &str) -> Self {
        let map_url = report
            .coordinates()
            .map(|c| format!("{}{},{}", map_url_base, c.latitude, c.longitude));

        Self {
            id: report.id,
            submitted_by: report.submitted_by,
            image: report.image,
            location: report.location,
            latitude: report.latitude,
            longitude: report.longitude,
            map_url,
            description: report.description,
            severity: report.severity,
            status: report.status,
            assigned_to: report.assigned_to,
            assigned_date: report.assigned_date,
            date_of_completion: report.date_of_completion,
            date_of_submission: report.date_of_submission,
        }
    }

    pub fn from_reports(reports: Vec<Report>, map_url_base: &str) -> Vec<Self> {
        reports
            .into_iter()
            .map(|r| Self::from_report(r, map_url_base))
            .collect()
    }
}

/// A submitter's reports grouped by status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitterReportsDto {
    pub reported: Vec<ReportResponseDto>,
    pub under_repair: Vec<ReportResponseDto>,
    pub finished: Vec<ReportResponseDto>,
}

impl SubmitterReportsDto {
    pub fn new(grouped: SubmitterReports, map_url_base: &str) -> Self {
        Self {
            reported: ReportResponseDto::from_reports(grouped.reported, map_url_base),
            under_repair: ReportResponseDto::from_reports(grouped.under_repair, map_url_base),
            finished: ReportResponseDto::from_reports(grouped.finished, map_url_base),
        }
    }
}

/// Reports held by one staff member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeReportsDto {
    pub assigned: Vec<ReportResponseDto>,
    pub completed: Vec<ReportResponseDto>,
}

impl AssigneeReportsDto {
    pub fn new(grouped: AssigneeReports, map_url_base: &str) -> Self {
        Self {
            assigned: ReportResponseDto::from_reports(grouped.assigned, map_url_base),
            completed: ReportResponseDto::from_reports(grouped.completed, map_url_base),
        }
    }
}

/// Public map marker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPointDto {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for MapPointDto {
    fn from(c: Coordinates) -> Self {
        Self {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// Request DTO for submitting a pothole report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportDto {
    /// Defaults to the caller. Only admins may submit on behalf of another account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description must be 1-2000 characters"
    ))]
    pub description: String,

    pub severity: ReportSeverity,

    /// Base64 image, a `data:<mime>;base64,` prefix is accepted
    #[serde(default)]
    pub image: String,
}

/// Request DTO for assigning a report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignReportDto {
    #[validate(length(min = 1, message = "Assignee is required"))]
    pub assigned_to: String,
}
