//! User JWT authentication
//!
//! Tokens are issued by the external identity provider; this service only
//! verifies them and extracts the caller identity. Every handler receives the
//! identity explicitly through a request extension; there is no ambient
//! global user.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// Caller role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    Admin,
}

/// JWT claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    /// User ID (decimal string)
    pub sub: String,
    /// User email
    pub email: String,
    /// Caller role
    pub role: Role,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated caller identity extracted from the JWT
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

impl UserIdentity {
    /// Admin-only guard for management endpoints.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role != Role::Admin {
            return Err(AppError::new(ErrorCode::AdminRequired));
        }
        Ok(())
    }
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT token for a user (dev tooling and tests; production tokens
/// come from the identity provider with the same claims)
pub fn create_token(
    user_id: i64,
    email: &str,
    role: Role,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = UserClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Middleware that extracts and verifies the user JWT from the Authorization
/// header and inserts a [`UserIdentity`] into request extensions.
pub async fn user_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated).into_response())?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::invalid_token("Invalid Authorization format").into_response()
    })?;

    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::invalid_token("Invalid or expired token").into_response()
    })?;

    let user_id: i64 = token_data.claims.sub.parse().map_err(|_| {
        AppError::invalid_token("Malformed subject claim").into_response()
    })?;

    let identity = UserIdentity {
        user_id,
        email: token_data.claims.email,
        role: token_data.claims.role,
    };

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        let secret = "test-secret";
        let token = create_token(42, "diner@example.com", Role::Customer, secret).unwrap();

        let data = jsonwebtoken::decode::<UserClaims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(data.claims.sub, "42");
        assert_eq!(data.claims.email, "diner@example.com");
        assert_eq!(data.claims.role, Role::Customer);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token(42, "diner@example.com", Role::Customer, "secret-a").unwrap();

        let result = jsonwebtoken::decode::<UserClaims>(
            &token,
            &DecodingKey::from_secret(b"secret-b"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn require_admin_guard() {
        let customer = UserIdentity {
            user_id: 1,
            email: "diner@example.com".into(),
            role: Role::Customer,
        };
        assert_eq!(
            customer.require_admin().unwrap_err().code,
            ErrorCode::AdminRequired
        );

        let admin = UserIdentity {
            user_id: 2,
            email: "staff@example.com".into(),
            role: Role::Admin,
        };
        assert!(admin.require_admin().is_ok());
    }

    #[test]
    fn role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}
