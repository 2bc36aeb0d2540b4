use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a municipality staff account
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMunicipalityUserDto {
    /// Identity-provider subject of the staff member
    #[validate(length(min = 1, max = 255, message = "User ID must be 1-255 characters"))]
    pub user_id: String,

    #[validate(length(min = 2, max = 128, message = "Name must be 2-128 characters"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Phone must be a valid phone number"
    ))]
    pub phone: String,

    #[validate(length(min = 2, max = 128, message = "Department must be 2-128 characters"))]
    pub department: String,
}

/// Request DTO for activating or deactivating an account
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountStatusDto {
    pub is_active: bool,
}
