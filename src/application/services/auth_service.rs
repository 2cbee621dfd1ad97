//! Authentication service issuing and verifying bearer tokens.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::domain::entities::Credentials;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::verify_password;

/// JWT claims carried by every token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// The verified subject of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

/// Service for logging users in and authenticating bearer tokens.
///
/// Tokens are HS256 JWTs signed with the configured secret. Verification is
/// stateless: only [`AuthService::login`] touches the user store.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository consulted on login
    /// - `secret` - HMAC key used to sign and verify tokens
    /// - `token_ttl_secs` - lifetime of issued tokens
    pub fn new(users: Arc<dyn UserRepository>, secret: &str, token_ttl_secs: u64) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_secs: i64::try_from(token_ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Exchanges a username and password for a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if username or password is blank.
    /// Returns [`AppError::Unauthorized`] if the user is unknown or the password is wrong.
    pub async fn login(&self, credentials: Credentials) -> Result<String, AppError> {
        credentials.validate()?;

        let user = self.users.find_by_username(&credentials.username).await?;

        match user {
            Some(user) if verify_password(&credentials.password, &user.password_hash) => {
                tracing::info!(username = %user.username, "User logged in");
                self.issue_token(&user.username)
            }
            _ => {
                tracing::debug!(username = %credentials.username, "Login rejected");
                Err(AppError::unauthorized(
                    "Invalid username or password",
                    json!({}),
                ))
            }
        }
    }

    /// Signs a token for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, username: &str) -> Result<String, AppError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_string(),
            iat,
            exp: iat.saturating_add(self.token_ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Failed to issue token", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, forged or expired.
    pub fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| AuthUser {
                username: data.claims.sub,
            })
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired token" }),
                )
            })
    }
}
