use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::auth::model::Role;

/// Database model for account. `id` is the identity-provider subject.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Active municipality or admin account
    pub fn is_active_staff(&self) -> bool {
        self.is_active && matches!(self.role, Role::Municipality | Role::Admin)
    }
}

/// Data for creating a new account
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub created_by: Option<String>,
}
