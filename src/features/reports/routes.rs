use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::shared::constants::MIN_UPLOAD_BODY_BYTES;

/// Protected report routes (auth middleware applied by caller)
///
/// `upload_body_limit` caps the JSON body of the upload, which carries the base64 image.
/// It never drops below what an image of `MAX_IMAGE_BYTES` needs once encoded.
pub fn routes(state: ReportState, upload_body_limit: usize) -> Router {
    let upload_body_limit = upload_body_limit.max(MIN_UPLOAD_BODY_BYTES);

    Router::new()
        .route(
            "/api/report/upload",
            post(handlers::upload_report).layer(DefaultBodyLimit::max(upload_body_limit)),
        )
        .route("/api/report/reported", get(handlers::list_reported))
        .route(
            "/api/report/pothole/{user_id}",
            get(handlers::get_submitter_reports),
        )
        .route(
            "/api/report/pothole/completed/{user_id}",
            get(handlers::get_assignee_reports),
        )
        .route(
            "/api/report/pothole/assign/{id}",
            put(handlers::assign_report),
        )
        .route(
            "/api/report/pothole/complete/{id}",
            put(handlers::complete_report),
        )
        .with_state(state)
}

/// Public report routes
pub fn public_routes(state: ReportState) -> Router {
    Router::new()
        .route("/api/report/potholes", get(handlers::list_map_points))
        .with_state(state)
}
