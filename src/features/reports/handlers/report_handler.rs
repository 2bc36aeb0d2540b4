use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::AccountService;
use crate::features::auth::guards::RequireMunicipality;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{
    AssignReportDto, AssigneeReportsDto, MapPointDto, ReportResponseDto, SubmitReportDto,
    SubmitterReportsDto,
};
use crate::features::reports::services::{ReportIngestionService, ReportService, SubmitReport};
use crate::shared::types::ApiResponse;

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub ingestion_service: Arc<ReportIngestionService>,
    pub report_service: Arc<ReportService>,
    pub account_service: Arc<AccountService>,
    pub map_url_base: Arc<str>,
}

/// Submit a pothole report
#[utoipa::path(
    post,
    path = "/api/report/upload",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Account deactivated or submitting for someone else"),
        (status = 500, description = "Failed to process image")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn upload_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<ReportResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let submitted_by = dto.submitted_by.unwrap_or_else(|| user.sub.clone());
    if submitted_by != user.sub && !user.is_admin() {
        return Err(AppError::Forbidden(
            "Reports can only be submitted for your own account".to_string(),
        ));
    }

    state.account_service.require_active(&submitted_by).await?;

    let report = state
        .ingestion_service
        .submit(SubmitReport {
            submitted_by,
            location: dto.location,
            description: dto.description,
            severity: dto.severity,
            image: dto.image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(ReportResponseDto::from_report(report, &state.map_url_base)),
            Some("Report submitted successfully".to_string()),
            None,
        )),
    ))
}

/// Reports submitted by a user, grouped by status
#[utoipa::path(
    get,
    path = "/api/report/pothole/{user_id}",
    params(
        ("user_id" = String, Path, description = "Submitter account ID")
    ),
    responses(
        (status = 200, description = "Submitter's reports", body = ApiResponse<SubmitterReportsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your reports")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_submitter_reports(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<SubmitterReportsDto>>> {
    if !user.can_view_account(&user_id) && !user.has_municipality_access() {
        return Err(AppError::Forbidden(
            "You can only view your own reports".to_string(),
        ));
    }

    let grouped = state.report_service.list_by_submitter(&user_id).await?;
    Ok(Json(ApiResponse::success(
        Some(SubmitterReportsDto::new(grouped, &state.map_url_base)),
        None,
        None,
    )))
}

/// Reports waiting for a municipality assignee
#[utoipa::path(
    get,
    path = "/api/report/reported",
    responses(
        (status = 200, description = "Reported queue, oldest first", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Municipality access required")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reported(
    RequireMunicipality(_user): RequireMunicipality,
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = state.report_service.list_reported().await?;
    Ok(Json(ApiResponse::list(ReportResponseDto::from_reports(
        reports,
        &state.map_url_base,
    ))))
}

/// Reports assigned to a staff member
#[utoipa::path(
    get,
    path = "/api/report/pothole/completed/{user_id}",
    params(
        ("user_id" = String, Path, description = "Assignee account ID")
    ),
    responses(
        (status = 200, description = "Assigned and completed reports", body = ApiResponse<AssigneeReportsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your assignments")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn get_assignee_reports(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<AssigneeReportsDto>>> {
    if !user.can_view_account(&user_id) {
        return Err(AppError::Forbidden(
            "You can only view your own assignments".to_string(),
        ));
    }

    let grouped = state.report_service.list_for_assignee(&user_id).await?;
    Ok(Json(ApiResponse::success(
        Some(AssigneeReportsDto::new(grouped, &state.map_url_base)),
        None,
        None,
    )))
}

/// Assign a reported pothole
#[utoipa::path(
    put,
    path = "/api/report/pothole/assign/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = AssignReportDto,
    responses(
        (status = 200, description = "Pothole assigned", body = ApiResponse<ReportResponseDto>),
        (status = 400, description = "Assignee is not municipality staff"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Municipality access required"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Report already assigned or completed")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn assign_report(
    RequireMunicipality(user): RequireMunicipality,
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AssignReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if dto.assigned_to != user.sub && !user.is_admin() {
        return Err(AppError::Forbidden(
            "Reports can only be assigned to yourself".to_string(),
        ));
    }

    state.account_service.require_active(&user.sub).await?;
    let assignee = state.account_service.require_active(&dto.assigned_to).await?;
    if !assignee.is_active_staff() {
        return Err(AppError::BadRequest(
            "Assignee must be a municipality account".to_string(),
        ));
    }

    let report = state.report_service.assign(id, &assignee.id).await?;

    Ok(Json(ApiResponse::success(
        Some(ReportResponseDto::from_report(report, &state.map_url_base)),
        Some("Pothole assigned successfully".to_string()),
        None,
    )))
}

/// Mark a pothole repaired
#[utoipa::path(
    put,
    path = "/api/report/pothole/complete/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Pothole marked as completed", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Municipality access required"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn complete_report(
    RequireMunicipality(user): RequireMunicipality,
    State(state): State<ReportState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    state.account_service.require_active(&user.sub).await?;

    let report = state.report_service.complete(id).await?;

    Ok(Json(ApiResponse::success(
        Some(ReportResponseDto::from_report(report, &state.map_url_base)),
        Some("Pothole marked as completed".to_string()),
        None,
    )))
}

/// Coordinates of every located report (public)
#[utoipa::path(
    get,
    path = "/api/report/potholes",
    responses(
        (status = 200, description = "Map points", body = ApiResponse<Vec<MapPointDto>>)
    ),
    tag = "reports"
)]
pub async fn list_map_points(
    State(state): State<ReportState>,
) -> Result<Json<ApiResponse<Vec<MapPointDto>>>> {
    let points = state.report_service.list_map_points().await?;
    Ok(Json(ApiResponse::list(
        points.into_iter().map(MapPointDto::from).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::accounts::repositories::MockAccountRepository;
    use crate::features::auth::model::Role;
    use crate::features::reports::models::{
        Coordinates, CreateReport, Report, ReportSeverity, ReportStatus,
    };
    use crate::features::reports::repositories::MockReportRepository;
    use crate::features::reports::routes;
    use crate::features::reports::services::text_recognizer::MockTextRecognizer;
    use crate::shared::constants::MAX_IMAGE_BYTES;
    use crate::shared::test_helpers::{
        create_account, create_admin_user, create_commuter_user, create_municipality_user,
        create_user, with_auth,
    };
    use axum::Router;
    use axum_test::TestServer;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::time::Duration;

    const MAP_URL_BASE: &str = "https://maps.example/?q=";

    fn stored(status: ReportStatus) -> Report {
        Report {
            id: Uuid::new_v4(),
            submitted_by: "commuter-1".to_string(),
            image: "aGVsbG8=".to_string(),
            location: "MG Road".to_string(),
            latitude: Some(17.385),
            longitude: Some(78.4867),
            description: "Pothole".to_string(),
            severity: ReportSeverity::High,
            status,
            assigned_to: None,
            assigned_date: None,
            date_of_completion: None,
            date_of_submission: Utc::now(),
        }
    }

    fn from_create(data: &CreateReport) -> Report {
        Report {
            submitted_by: data.submitted_by.clone(),
            image: data.image.clone(),
            location: data.location.clone(),
            latitude: data.coordinates.map(|c| c.latitude),
            longitude: data.coordinates.map(|c| c.longitude),
            description: data.description.clone(),
            severity: data.severity,
            ..stored(ReportStatus::Reported)
        }
    }

    /// Accounts: every id is an active account whose role follows its prefix
    fn accounts() -> MockAccountRepository {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_find_by_id().returning(|id| {
            let role = if id.starts_with("admin") {
                Role::Admin
            } else if id.starts_with("staff") {
                Role::Municipality
            } else {
                Role::Commuter
            };
            Ok(Some(create_account(id, role, !id.ends_with("-inactive"))))
        });
        accounts
    }

    fn server(
        user: AuthenticatedUser,
        reports: MockReportRepository,
        recognizer: MockTextRecognizer,
    ) -> TestServer {
        server_with_body_limit(user, reports, recognizer, 1024 * 1024)
    }

    fn server_with_body_limit(
        user: AuthenticatedUser,
        reports: MockReportRepository,
        recognizer: MockTextRecognizer,
        upload_body_limit: usize,
    ) -> TestServer {
        let reports: Arc<MockReportRepository> = Arc::new(reports);
        let state = ReportState {
            ingestion_service: Arc::new(ReportIngestionService::new(
                reports.clone(),
                Arc::new(recognizer),
                Duration::from_secs(5),
            )),
            report_service: Arc::new(ReportService::new(reports)),
            account_service: Arc::new(AccountService::new(Arc::new(accounts()))),
            map_url_base: Arc::from(MAP_URL_BASE),
        };

        let app = Router::new()
            .merge(with_auth(
                routes::routes(state.clone(), upload_body_limit),
                user,
            ))
            .merge(routes::public_routes(state));

        TestServer::new(app).unwrap()
    }

    fn upload_body(image: &str) -> Value {
        json!({
            "location": "MG Road, near bus stop",
            "description": "Deep pothole",
            "severity": "high",
            "image": image,
        })
    }

    #[tokio::test]
    async fn test_upload_returns_report_with_map_url() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer
            .expect_recognize()
            .returning(|_| Ok("Lat 17.385000 Long 078.486700".to_string()));
        let mut reports = MockReportRepository::new();
        reports
            .expect_create()
            .withf(|data| data.submitted_by == "commuter-1")
            .times(1)
            .returning(|data| Ok(from_create(data)));

        let response = server(create_commuter_user(), reports, recognizer)
            .post("/api/report/upload")
            .json(&upload_body(&STANDARD.encode(b"jpeg")))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "reported");
        assert_eq!(body["data"]["latitude"], 17.385);
        assert_eq!(body["data"]["longitude"], 78.4867);
        assert_eq!(
            body["data"]["mapUrl"],
            "https://maps.example/?q=17.385,78.4867"
        );
    }

    #[tokio::test]
    async fn test_upload_image_just_under_size_cap_with_default_body_limit() {
        let image_len = MAX_IMAGE_BYTES - 1024;
        let mut recognizer = MockTextRecognizer::new();
        recognizer
            .expect_recognize()
            .withf(move |image| image.len() == image_len)
            .times(1)
            .returning(|_| Ok(String::new()));
        let mut reports = MockReportRepository::new();
        reports
            .expect_create()
            .times(1)
            .returning(|data| Ok(from_create(data)));

        let response = server_with_body_limit(
            create_commuter_user(),
            reports,
            recognizer,
            10 * 1024 * 1024,
        )
        .post("/api/report/upload")
        .json(&upload_body(&STANDARD.encode(vec![0u8; image_len])))
        .await;

        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_upload_image_over_size_cap_reports_limit() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);
        let mut reports = MockReportRepository::new();
        reports.expect_create().times(0);

        let response = server(create_commuter_user(), reports, recognizer)
            .post("/api/report/upload")
            .json(&upload_body(&STANDARD.encode(vec![0u8; MAX_IMAGE_BYTES + 1])))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("Image must not exceed"));
    }

    #[tokio::test]
    async fn test_upload_without_image_is_bad_request() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);
        let mut reports = MockReportRepository::new();
        reports.expect_create().times(0);

        let response = server(create_commuter_user(), reports, recognizer)
            .post("/api/report/upload")
            .json(&json!({
                "location": "MG Road",
                "description": "Deep pothole",
                "severity": "low",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_upload_ocr_failure_is_500_with_message() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().returning(|_| {
            Err(
                crate::features::reports::services::text_recognizer::RecognitionError::EngineFailed {
                    status: "exit status: 1".to_string(),
                    stderr: "boom".to_string(),
                },
            )
        });
        let mut reports = MockReportRepository::new();
        reports.expect_create().times(0);

        let response = server(create_commuter_user(), reports, recognizer)
            .post("/api/report/upload")
            .json(&upload_body(&STANDARD.encode(b"jpeg")))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["message"], "Failed to process image");
    }

    #[tokio::test]
    async fn test_upload_for_other_user_requires_admin() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);

        let mut body = upload_body(&STANDARD.encode(b"jpeg"));
        body["submittedBy"] = json!("commuter-2");

        server(create_commuter_user(), MockReportRepository::new(), recognizer)
            .post("/api/report/upload")
            .json(&body)
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_upload_from_deactivated_account_is_forbidden() {
        let mut recognizer = MockTextRecognizer::new();
        recognizer.expect_recognize().times(0);

        server(
            create_user("commuter-inactive", vec![Role::Commuter]),
            MockReportRepository::new(),
            recognizer,
        )
        .post("/api/report/upload")
        .json(&upload_body(&STANDARD.encode(b"jpeg")))
        .await
        .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_submitter_reports_bucketed() {
        let mut reports = MockReportRepository::new();
        reports.expect_list_by_submitter().returning(|_| {
            Ok(vec![
                stored(ReportStatus::Reported),
                stored(ReportStatus::InProgress),
            ])
        });

        let response = server(create_commuter_user(), reports, MockTextRecognizer::new())
            .get("/api/report/pothole/commuter-1")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["reported"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["underRepair"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["finished"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_commuter_cannot_read_other_submitter() {
        let mut reports = MockReportRepository::new();
        reports.expect_list_by_submitter().times(0);

        server(create_commuter_user(), reports, MockTextRecognizer::new())
            .get("/api/report/pothole/commuter-2")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_reported_queue_requires_municipality() {
        server(
            create_commuter_user(),
            MockReportRepository::new(),
            MockTextRecognizer::new(),
        )
        .get("/api/report/reported")
        .await
        .assert_status(StatusCode::FORBIDDEN);

        let mut reports = MockReportRepository::new();
        reports
            .expect_list_by_status()
            .withf(|status| *status == ReportStatus::Reported)
            .returning(|_| Ok(vec![stored(ReportStatus::Reported)]));

        let response = server(create_municipality_user(), reports, MockTextRecognizer::new())
            .get("/api/report/reported")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_assignee_reports_for_self() {
        let mut reports = MockReportRepository::new();
        reports
            .expect_list_by_assignee()
            .withf(|assignee| assignee == "staff-1")
            .times(1)
            .returning(|assignee| {
                let mut assigned = stored(ReportStatus::InProgress);
                assigned.assigned_to = Some(assignee.to_string());
                let mut completed = stored(ReportStatus::Completed);
                completed.assigned_to = Some(assignee.to_string());
                Ok(vec![assigned, completed])
            });

        let response = server(create_municipality_user(), reports, MockTextRecognizer::new())
            .get("/api/report/pothole/completed/staff-1")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["assigned"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["completed"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["completed"][0]["status"], "completed");
    }

    #[tokio::test]
    async fn test_assignee_reports_of_other_staff_is_forbidden() {
        let mut reports = MockReportRepository::new();
        reports.expect_list_by_assignee().times(0);

        server(create_municipality_user(), reports, MockTextRecognizer::new())
            .get("/api/report/pothole/completed/staff-2")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_can_read_any_assignee_reports() {
        let mut reports = MockReportRepository::new();
        reports
            .expect_list_by_assignee()
            .withf(|assignee| assignee == "staff-2")
            .times(1)
            .returning(|_| Ok(vec![]));

        server(create_admin_user(), reports, MockTextRecognizer::new())
            .get("/api/report/pothole/completed/staff-2")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_assign_to_self() {
        let mut reports = MockReportRepository::new();
        reports
            .expect_assign_if_reported()
            .withf(|_, assignee, _| assignee == "staff-1")
            .times(1)
            .returning(|_, assignee, at| {
                let mut report = stored(ReportStatus::InProgress);
                report.assigned_to = Some(assignee.to_string());
                report.assigned_date = Some(at);
                Ok(Some(report))
            });

        let response = server(create_municipality_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/assign/{}", Uuid::new_v4()))
            .json(&json!({ "assignedTo": "staff-1" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Pothole assigned successfully");
        assert_eq!(body["data"]["status"], "in-progress");
        assert_eq!(body["data"]["assignedTo"], "staff-1");
    }

    #[tokio::test]
    async fn test_municipality_cannot_assign_to_someone_else() {
        let mut reports = MockReportRepository::new();
        reports.expect_assign_if_reported().times(0);

        server(create_municipality_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/assign/{}", Uuid::new_v4()))
            .json(&json!({ "assignedTo": "staff-2" }))
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_cannot_assign_to_commuter() {
        let mut reports = MockReportRepository::new();
        reports.expect_assign_if_reported().times(0);

        server(create_admin_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/assign/{}", Uuid::new_v4()))
            .json(&json!({ "assignedTo": "commuter-1" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assign_already_taken_is_conflict() {
        let mut reports = MockReportRepository::new();
        reports
            .expect_assign_if_reported()
            .returning(|_, _, _| Ok(None));
        reports
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored(ReportStatus::InProgress))));

        server(create_municipality_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/assign/{}", Uuid::new_v4()))
            .json(&json!({ "assignedTo": "staff-1" }))
            .await
            .assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_complete_report() {
        let mut reports = MockReportRepository::new();
        reports.expect_mark_completed().returning(|_, at| {
            let mut report = stored(ReportStatus::Completed);
            report.date_of_completion = Some(at);
            Ok(Some(report))
        });

        let response = server(create_municipality_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/complete/{}", Uuid::new_v4()))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Pothole marked as completed");
        assert_eq!(body["data"]["status"], "completed");
    }

    #[tokio::test]
    async fn test_complete_unknown_report_is_not_found() {
        let mut reports = MockReportRepository::new();
        reports.expect_mark_completed().returning(|_, _| Ok(None));

        server(create_admin_user(), reports, MockTextRecognizer::new())
            .put(&format!("/api/report/pothole/complete/{}", Uuid::new_v4()))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_map_points_are_public() {
        let mut reports = MockReportRepository::new();
        reports.expect_list_coordinates().returning(|| {
            Ok(vec![Coordinates {
                latitude: 17.385,
                longitude: 78.4867,
            }])
        });
        let state = ReportState {
            ingestion_service: Arc::new(ReportIngestionService::new(
                Arc::new(MockReportRepository::new()),
                Arc::new(MockTextRecognizer::new()),
                Duration::from_secs(5),
            )),
            report_service: Arc::new(ReportService::new(Arc::new(reports))),
            account_service: Arc::new(AccountService::new(Arc::new(
                MockAccountRepository::new(),
            ))),
            map_url_base: Arc::from(MAP_URL_BASE),
        };

        // No auth layer at all
        let server = TestServer::new(routes::public_routes(state)).unwrap();
        let response = server.get("/api/report/potholes").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"][0]["latitude"], 17.385);
        assert_eq!(body["data"][0]["longitude"], 78.4867);
    }
}
