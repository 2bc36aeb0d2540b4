use super::model::{AuthenticatedUser, CustomClaims, Role};
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
    claims_namespace: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    // Standard JWT claims (validated by jsonwebtoken library)
    sub: String,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(rename = "exp")]
    _exp: u64,

    #[serde(default)]
    kind: Option<String>,
    #[serde(rename = "sessionUid", default)]
    session_uid: Option<String>,

    /// Everything else, including the namespaced custom claims
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
        claims_namespace: String,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
            claims_namespace,
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        user_from_claims(token_data.claims, &self.claims_namespace)
    }
}

fn user_from_claims(claims: Claims, namespace: &str) -> Result<AuthenticatedUser, AppError> {
    // Token exchange tokens may not carry 'kind'
    if let Some(kind) = &claims.kind {
        if kind != "AccessToken" {
            return Err(AppError::Auth("Token is not an access token".to_string()));
        }
    }

    let custom: CustomClaims = match claims.extra.get(namespace) {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| AppError::Auth(format!("Malformed custom claims: {}", e)))?,
        None => CustomClaims::default(),
    };

    // Roles this service does not know about are ignored
    let roles = custom
        .roles
        .iter()
        .filter_map(|r| Role::from_claim(r))
        .collect();

    Ok(AuthenticatedUser {
        sub: claims.sub,
        session_uid: claims.session_uid,
        roles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAMESPACE: &str = "https://potholemapper.app/claims";

    fn claims(value: serde_json::Value) -> Claims {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_roles_read_from_namespace() {
        let c = claims(json!({
            "sub": "staff-1",
            "iss": "https://id.example/oidc",
            "aud": "https://api.potholemapper.app",
            "exp": 1_900_000_000u64,
            NAMESPACE: { "roles": ["municipality", "unknown_role"] }
        }));

        let user = user_from_claims(c, NAMESPACE).unwrap();
        assert_eq!(user.sub, "staff-1");
        assert_eq!(user.roles, vec![Role::Municipality]);
    }

    #[test]
    fn test_missing_custom_claims_means_no_roles() {
        let c = claims(json!({
            "sub": "commuter-1",
            "iss": "https://id.example/oidc",
            "aud": ["a", "b"],
            "exp": 1_900_000_000u64
        }));

        let user = user_from_claims(c, NAMESPACE).unwrap();
        assert!(user.roles.is_empty());
        assert_eq!(user.primary_role(), Role::Commuter);
    }

    #[test]
    fn test_rejects_non_access_tokens() {
        let c = claims(json!({
            "sub": "commuter-1",
            "iss": "https://id.example/oidc",
            "aud": "x",
            "exp": 1_900_000_000u64,
            "kind": "RefreshToken"
        }));

        assert!(matches!(
            user_from_claims(c, NAMESPACE),
            Err(AppError::Auth(_))
        ));
    }
}
