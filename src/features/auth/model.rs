use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;

use crate::shared::constants::{ROLE_ADMIN, ROLE_COMMUTER, ROLE_MUNICIPALITY};

/// Capability set of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Commuter,
    Municipality,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Commuter => ROLE_COMMUTER,
            Role::Municipality => ROLE_MUNICIPALITY,
            Role::Admin => ROLE_ADMIN,
        }
    }

    pub fn from_claim(value: &str) -> Option<Self> {
        match value {
            ROLE_COMMUTER => Some(Role::Commuter),
            ROLE_MUNICIPALITY => Some(Role::Municipality),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Identity-provider subject; doubles as the account id
    pub sub: String,
    /// Session UID (only present for interactive OIDC flows)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_uid: Option<String>,
    pub roles: Vec<Role>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Municipal staff capabilities (admin included)
    pub fn has_municipality_access(&self) -> bool {
        self.is_admin() || self.has_role(Role::Municipality)
    }

    /// Highest role carried by the token. Tokens without roles are commuters.
    pub fn primary_role(&self) -> Role {
        if self.is_admin() {
            Role::Admin
        } else if self.has_role(Role::Municipality) {
            Role::Municipality
        } else {
            Role::Commuter
        }
    }

    /// Whether the caller may read data belonging to `account_id`
    pub fn can_view_account(&self, account_id: &str) -> bool {
        self.sub == account_id || self.is_admin()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomClaims {
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: Vec<Role>) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            session_uid: None,
            roles,
        }
    }

    #[test]
    fn test_primary_role_prefers_highest() {
        assert_eq!(user(vec![]).primary_role(), Role::Commuter);
        assert_eq!(
            user(vec![Role::Commuter, Role::Municipality]).primary_role(),
            Role::Municipality
        );
        assert_eq!(
            user(vec![Role::Municipality, Role::Admin]).primary_role(),
            Role::Admin
        );
    }

    #[test]
    fn test_municipality_access() {
        assert!(!user(vec![Role::Commuter]).has_municipality_access());
        assert!(user(vec![Role::Municipality]).has_municipality_access());
        assert!(user(vec![Role::Admin]).has_municipality_access());
    }

    #[test]
    fn test_can_view_account() {
        assert!(user(vec![]).can_view_account("user-1"));
        assert!(!user(vec![Role::Municipality]).can_view_account("user-2"));
        assert!(user(vec![Role::Admin]).can_view_account("user-2"));
    }

    #[test]
    fn test_role_from_claim() {
        assert_eq!(Role::from_claim("municipality"), Some(Role::Municipality));
        assert_eq!(Role::from_claim("super_admin"), None);
    }
}
