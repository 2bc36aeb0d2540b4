use std::sync::Arc;

use crate::core::config::BootstrapAdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::accounts::models::{Account, CreateAccount};
use crate::features::accounts::repositories::AccountRepository;
use crate::features::auth::model::Role;

/// Profile fields supplied when an account is created
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// A municipality staff account created by an admin
#[derive(Debug, Clone)]
pub struct NewMunicipalityUser {
    /// Identity-provider subject of the staff member
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Account directory: registration, staff management, activation
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    async fn ensure_email_free(&self, email: &str) -> Result<()> {
        if self.repository.find_by_email(email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Account> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not registered".to_string()))
    }

    /// Account must exist and be active to act on reports
    pub async fn require_active(&self, id: &str) -> Result<Account> {
        let account = self.get(id).await?;
        if !account.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }
        Ok(account)
    }

    /// Self-registration for the caller's commuter account
    pub async fn register_commuter(&self, user_id: &str, data: NewAccount) -> Result<Account> {
        if self.repository.find_by_id(user_id).await?.is_some() {
            return Err(AppError::Conflict("Account already registered".to_string()));
        }

        let email = Self::normalize_email(&data.email);
        self.ensure_email_free(&email).await?;

        let account = self
            .repository
            .create(&CreateAccount {
                id: user_id.to_string(),
                name: data.name.trim().to_string(),
                email,
                role: Role::Commuter,
                phone: data.phone,
                department: None,
                created_by: None,
            })
            .await?;

        tracing::info!(user_id = %account.id, "Commuter registered");

        Ok(account)
    }

    pub async fn create_municipality_user(
        &self,
        admin_id: &str,
        data: NewMunicipalityUser,
    ) -> Result<Account> {
        if self.repository.find_by_id(&data.user_id).await?.is_some() {
            return Err(AppError::Conflict("Account already registered".to_string()));
        }

        let email = Self::normalize_email(&data.email);
        self.ensure_email_free(&email).await?;

        let account = self
            .repository
            .create(&CreateAccount {
                id: data.user_id,
                name: data.name.trim().to_string(),
                email,
                role: Role::Municipality,
                phone: Some(data.phone),
                department: Some(data.department),
                created_by: Some(admin_id.to_string()),
            })
            .await?;

        tracing::info!(
            user_id = %account.id,
            created_by = %admin_id,
            "Municipality user created"
        );

        Ok(account)
    }

    pub async fn list_municipality_users(&self) -> Result<Vec<Account>> {
        self.repository.list_by_role(Role::Municipality).await
    }

    pub async fn list_users(&self) -> Result<Vec<Account>> {
        self.repository.list_non_admin().await
    }

    /// Activate or deactivate an account. Admins cannot target themselves or another admin.
    pub async fn update_status(
        &self,
        actor_id: &str,
        target_id: &str,
        is_active: bool,
    ) -> Result<Account> {
        if actor_id == target_id {
            return Err(AppError::BadRequest(
                "You cannot change your own status".to_string(),
            ));
        }

        let target = self.get(target_id).await?;
        if target.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Cannot change status of an admin account".to_string(),
            ));
        }

        let account = self
            .repository
            .set_active(target_id, is_active)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not registered".to_string()))?;

        tracing::info!(
            user_id = %target_id,
            is_active,
            changed_by = %actor_id,
            "Account status updated"
        );

        Ok(account)
    }

    /// Make sure the single admin account exists on startup.
    ///
    /// An account already registered under the configured subject is promoted.
    /// Returns `None` when the configured email belongs to a different account.
    pub async fn ensure_bootstrap_admin(
        &self,
        config: &BootstrapAdminConfig,
    ) -> Result<Option<Account>> {
        if let Some(admin) = self.repository.find_admin().await? {
            if admin.id != config.subject {
                tracing::warn!(
                    existing_admin = %admin.id,
                    configured_admin = %config.subject,
                    "Admin account already exists, bootstrap settings ignored"
                );
            }
            return Ok(Some(admin));
        }

        if let Some(existing) = self.repository.find_by_id(&config.subject).await? {
            let admin = self
                .repository
                .promote_to_admin(&existing.id, &config.phone)
                .await?
                .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

            tracing::warn!(
                user_id = %admin.id,
                previous_role = ?existing.role,
                "Existing account promoted to bootstrap admin"
            );
            return Ok(Some(admin));
        }

        let email = Self::normalize_email(&config.email);
        if let Some(holder) = self.repository.find_by_email(&email).await? {
            tracing::error!(
                email = %email,
                holder = %holder.id,
                configured_admin = %config.subject,
                "Bootstrap admin email is registered to another account, admin not created"
            );
            return Ok(None);
        }

        let account = self
            .repository
            .create(&CreateAccount {
                id: config.subject.clone(),
                name: config.name.clone(),
                email,
                role: Role::Admin,
                phone: Some(config.phone.clone()),
                department: None,
                created_by: None,
            })
            .await?;

        tracing::info!(user_id = %account.id, "Bootstrap admin account created");

        Ok(Some(account))
    }
}
