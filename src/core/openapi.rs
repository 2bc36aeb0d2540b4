use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::accounts::{dtos as accounts_dtos, handlers as accounts_handlers};
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth;
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::report_handler::upload_report,
        reports_handlers::report_handler::get_submitter_reports,
        reports_handlers::report_handler::list_reported,
        reports_handlers::report_handler::get_assignee_reports,
        reports_handlers::report_handler::assign_report,
        reports_handlers::report_handler::complete_report,
        reports_handlers::report_handler::list_map_points,
        // Accounts
        accounts_handlers::account_handler::register,
        accounts_handlers::account_handler::get_me,
        // Admin
        admin_handlers::create_municipality_user,
        admin_handlers::list_municipality_users,
        admin_handlers::list_users,
        admin_handlers::update_user_status,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::Role,
            auth::model::AuthenticatedUser,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportSeverity,
            reports_dtos::ReportResponseDto,
            reports_dtos::SubmitterReportsDto,
            reports_dtos::AssigneeReportsDto,
            reports_dtos::MapPointDto,
            reports_dtos::SubmitReportDto,
            reports_dtos::AssignReportDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            ApiResponse<reports_dtos::SubmitterReportsDto>,
            ApiResponse<reports_dtos::AssigneeReportsDto>,
            ApiResponse<Vec<reports_dtos::MapPointDto>>,
            // Accounts
            accounts_dtos::AccountResponseDto,
            accounts_dtos::RegisterAccountDto,
            ApiResponse<accounts_dtos::AccountResponseDto>,
            ApiResponse<Vec<accounts_dtos::AccountResponseDto>>,
            // Admin
            admin_dtos::CreateMunicipalityUserDto,
            admin_dtos::UpdateAccountStatusDto,
        )
    ),
    tags(
        (name = "reports", description = "Pothole reports: submission, triage and repair tracking"),
        (name = "accounts", description = "Caller's account registration and profile"),
        (name = "admin", description = "Municipality staff management (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Pothole Mapper API",
        version = "0.1.0",
        description = "API documentation for Pothole Mapper",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
