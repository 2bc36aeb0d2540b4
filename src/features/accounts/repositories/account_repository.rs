use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::accounts::models::{Account, CreateAccount};
use crate::features::auth::model::Role;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert an account. A duplicate id, email or second admin is a `Conflict`.
    async fn create(&self, data: &CreateAccount) -> Result<Account>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Accounts with `role`, newest first
    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>>;

    /// Every commuter and municipality account, newest first
    async fn list_non_admin(&self) -> Result<Vec<Account>>;

    async fn set_active(&self, id: &str, is_active: bool) -> Result<Option<Account>>;

    async fn find_admin(&self) -> Result<Option<Account>>;

    /// Turn an existing account into the admin, filling `phone` if it has none
    async fn promote_to_admin(&self, id: &str, phone: &str) -> Result<Option<Account>>;
}

const ACCOUNT_COLUMNS: &str = r#"
    id, name, email, role, phone, department, is_active, created_by, created_at, updated_at
"#;

/// Postgres error code for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, data: &CreateAccount) -> Result<Account> {
        let sql = format!(
            r#"
            INSERT INTO accounts (id, name, email, role, phone, department, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(&data.id)
            .bind(&data.name)
            .bind(&data.email)
            .bind(data.role)
            .bind(&data.phone)
            .bind(&data.department)
            .bind(&data.created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    tracing::warn!(account_id = %data.id, "Account already exists: {}", db);
                    AppError::Conflict("Account already exists".to_string())
                }
                e => {
                    tracing::error!("Failed to create account: {:?}", e);
                    AppError::Database(e)
                }
            })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1");

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get account: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1");

        sqlx::query_as::<_, Account>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get account by email: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Account>> {
        let sql = format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            WHERE role = $1
            ORDER BY created_at DESC, id ASC
            "#
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(role)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list accounts by role: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_non_admin(&self) -> Result<Vec<Account>> {
        let sql = format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            WHERE role <> 'admin'
            ORDER BY created_at DESC, id ASC
            "#
        );

        sqlx::query_as::<_, Account>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list accounts: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn set_active(&self, id: &str, is_active: bool) -> Result<Option<Account>> {
        let sql = format!(
            r#"
            UPDATE accounts
            SET is_active = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .bind(is_active)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update account status: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_admin(&self) -> Result<Option<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE role = 'admin' LIMIT 1");

        sqlx::query_as::<_, Account>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get admin account: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn promote_to_admin(&self, id: &str, phone: &str) -> Result<Option<Account>> {
        let sql = format!(
            r#"
            UPDATE accounts
            SET role = 'admin', phone = COALESCE(phone, $2), is_active = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Account>(&sql)
            .bind(id)
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    tracing::warn!(account_id = %id, "Admin account already exists: {}", db);
                    AppError::Conflict("Admin account already exists".to_string())
                }
                e => {
                    tracing::error!("Failed to promote account to admin: {:?}", e);
                    AppError::Database(e)
                }
            })
    }
}
