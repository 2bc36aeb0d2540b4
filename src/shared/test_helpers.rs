#[cfg(test)]
use crate::features::accounts::models::Account;
#[cfg(test)]
use crate::features::auth::model::{AuthenticatedUser, Role};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_user(sub: &str, roles: Vec<Role>) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: sub.to_string(),
        session_uid: Some("test-session-uid".to_string()),
        roles,
    }
}

#[cfg(test)]
pub fn create_commuter_user() -> AuthenticatedUser {
    create_user("commuter-1", vec![Role::Commuter])
}

#[cfg(test)]
pub fn create_municipality_user() -> AuthenticatedUser {
    create_user("staff-1", vec![Role::Municipality])
}

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    create_user("admin-1", vec![Role::Admin])
}

/// Stored account for `id`, email derived from the id
#[cfg(test)]
pub fn create_account(id: &str, role: Role, is_active: bool) -> Account {
    let now = chrono::Utc::now();
    Account {
        id: id.to_string(),
        name: "Test Account".to_string(),
        email: format!("{id}@example.com"),
        role,
        phone: None,
        department: None,
        is_active,
        created_by: None,
        created_at: now,
        updated_at: now,
    }
}

/// Stand-in for `auth_middleware`: every request is authenticated as `user`
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                let response: Response = next.run(request).await;
                response
            }
        },
    ))
}
