use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report lifecycle status. Moves forward only: reported → in-progress → completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    Reported,
    InProgress,
    Completed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Reported => write!(f, "reported"),
            ReportStatus::InProgress => write!(f, "in-progress"),
            ReportStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Report severity enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ReportSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSeverity::Low => write!(f, "low"),
            ReportSeverity::Medium => write!(f, "medium"),
            ReportSeverity::High => write!(f, "high"),
        }
    }
}

/// Decimal-degree pair read off a photo's coordinate stamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Database model for report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub submitted_by: String,
    /// Base64 payload exactly as submitted
    pub image: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: String,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub assigned_to: Option<String>,
    pub assigned_date: Option<DateTime<Utc>>,
    pub date_of_completion: Option<DateTime<Utc>>,
    pub date_of_submission: DateTime<Utc>,
}

impl Report {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Data for creating a new report
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReport {
    pub submitted_by: String,
    pub image: String,
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub description: String,
    pub severity: ReportSeverity,
}
