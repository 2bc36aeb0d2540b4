use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Coordinates, CreateReport, Report, ReportStatus};

/// Persistence for reports. Every mutation is a single statement.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, data: &CreateReport) -> Result<Report>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>>;

    /// All reports submitted by `user_id`, oldest first
    async fn list_by_submitter(&self, user_id: &str) -> Result<Vec<Report>>;

    /// All reports in `status`, oldest first
    async fn list_by_status(&self, status: ReportStatus) -> Result<Vec<Report>>;

    /// All reports assigned to `user_id`, oldest first
    async fn list_by_assignee(&self, user_id: &str) -> Result<Vec<Report>>;

    /// Assign only while the report is still `reported`.
    /// Returns `None` when no row matched (unknown id or already taken).
    async fn assign_if_reported(
        &self,
        id: Uuid,
        assignee_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Result<Option<Report>>;

    /// Mark completed from any status. Keeps an earlier completion date.
    async fn mark_completed(&self, id: Uuid, completed_at: DateTime<Utc>)
        -> Result<Option<Report>>;

    /// Coordinates of every report that has them
    async fn list_coordinates(&self) -> Result<Vec<Coordinates>>;
}

const REPORT_COLUMNS: &str = r#"
    id, submitted_by, image, location, latitude, longitude, description,
    severity, status, assigned_to, assigned_date, date_of_completion, date_of_submission
"#;

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn create(&self, data: &CreateReport) -> Result<Report> {
        let sql = format!(
            r#"
            INSERT INTO reports (submitted_by, image, location, latitude, longitude, description, severity)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {REPORT_COLUMNS}
            "#
        );

        let report = sqlx::query_as::<_, Report>(&sql)
            .bind(&data.submitted_by)
            .bind(&data.image)
            .bind(&data.location)
            .bind(data.coordinates.map(|c| c.latitude))
            .bind(data.coordinates.map(|c| c.longitude))
            .bind(&data.description)
            .bind(data.severity)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create report: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(report)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_by_submitter(&self, user_id: &str) -> Result<Vec<Report>> {
        let sql = format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE submitted_by = $1
            ORDER BY date_of_submission ASC, id ASC
            "#
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports by submitter: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        let sql = format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE status = $1
            ORDER BY date_of_submission ASC, id ASC
            "#
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports by status: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_by_assignee(&self, user_id: &str) -> Result<Vec<Report>> {
        let sql = format!(
            r#"
            SELECT {REPORT_COLUMNS}
            FROM reports
            WHERE assigned_to = $1
            ORDER BY date_of_submission ASC, id ASC
            "#
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports by assignee: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn assign_if_reported(
        &self,
        id: Uuid,
        assignee_id: &str,
        assigned_at: DateTime<Utc>,
    ) -> Result<Option<Report>> {
        let sql = format!(
            r#"
            UPDATE reports
            SET assigned_to = $2, status = 'in_progress', assigned_date = $3
            WHERE id = $1 AND status = 'reported'
            RETURNING {REPORT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .bind(assignee_id)
            .bind(assigned_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to assign report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn mark_completed(
        &self,
        id: Uuid,
        completed_at: DateTime<Utc>,
    ) -> Result<Option<Report>> {
        let sql = format!(
            r#"
            UPDATE reports
            SET status = 'completed',
                date_of_completion = COALESCE(date_of_completion, $2)
            WHERE id = $1
            RETURNING {REPORT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .bind(completed_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to complete report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_coordinates(&self) -> Result<Vec<Coordinates>> {
        let rows = sqlx::query_as::<_, (f64, f64)>(
            r#"
            SELECT latitude, longitude
            FROM reports
            WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            ORDER BY date_of_submission ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list report coordinates: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            })
            .collect())
    }
}
