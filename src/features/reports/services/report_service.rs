use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Coordinates, Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;

/// A submitter's reports grouped by status
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitterReports {
    pub reported: Vec<Report>,
    pub under_repair: Vec<Report>,
    pub finished: Vec<Report>,
}

/// Reports assigned to one staff member, split into open and done
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssigneeReports {
    pub assigned: Vec<Report>,
    pub completed: Vec<Report>,
}

/// Queries and status transitions for stored reports
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: Uuid) -> Result<Report> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn list_by_submitter(&self, user_id: &str) -> Result<SubmitterReports> {
        let reports = self.repository.list_by_submitter(user_id).await?;

        let mut grouped = SubmitterReports::default();
        for report in reports {
            match report.status {
                ReportStatus::Reported => grouped.reported.push(report),
                ReportStatus::InProgress => grouped.under_repair.push(report),
                ReportStatus::Completed => grouped.finished.push(report),
            }
        }

        Ok(grouped)
    }

    pub async fn list_reported(&self) -> Result<Vec<Report>> {
        self.repository.list_by_status(ReportStatus::Reported).await
    }

    pub async fn list_for_assignee(&self, user_id: &str) -> Result<AssigneeReports> {
        let reports = self.repository.list_by_assignee(user_id).await?;

        let mut grouped = AssigneeReports::default();
        for report in reports {
            match report.status {
                ReportStatus::InProgress => grouped.assigned.push(report),
                ReportStatus::Completed => grouped.completed.push(report),
                // An assignee on a reported row cannot happen through `assign`
                ReportStatus::Reported => {}
            }
        }

        Ok(grouped)
    }

    /// Claim a reported pothole for `assignee_id`.
    ///
    /// Only a report still in `reported` can be assigned; losing a race or
    /// re-assigning yields `Conflict`.
    pub async fn assign(&self, id: Uuid, assignee_id: &str) -> Result<Report> {
        if let Some(report) = self
            .repository
            .assign_if_reported(id, assignee_id, Utc::now())
            .await?
        {
            tracing::info!(report_id = %id, user_id = %assignee_id, "Report assigned");
            return Ok(report);
        }

        let current = self.get(id).await?;
        tracing::warn!(
            report_id = %id,
            status = %current.status,
            "Assignment rejected, report is no longer reported"
        );

        Err(AppError::Conflict(format!(
            "Report {} is already {}",
            id, current.status
        )))
    }

    /// Mark a report completed from any status. Completing twice keeps the first date.
    pub async fn complete(&self, id: Uuid) -> Result<Report> {
        let report = self
            .repository
            .mark_completed(id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!(report_id = %id, "Report completed");

        Ok(report)
    }

    pub async fn list_map_points(&self) -> Result<Vec<Coordinates>> {
        self.repository.list_coordinates().await
    }
}
