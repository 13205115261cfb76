//! JWT token service - issues bearer tokens and resolves them back to users.
//!
//! Claims carry only the user id. The role is reloaded from the user store on
//! every request, so a demotion or deletion takes effect immediately rather
//! than when the token expires.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::account::User;
use crate::domain::foundation::{
    AuthError, AuthenticatedUser, DomainError, ErrorCode, Timestamp, UserId,
};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer, UserRepository};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    iat: i64,
}

pub struct JwtTokenService {
    secret: SecretString,
    ttl: Duration,
    users: Arc<dyn UserRepository>,
}

impl JwtTokenService {
    pub fn new(secret: SecretString, ttl: Duration, users: Arc<dyn UserRepository>) -> Self {
        Self { secret, ttl, users }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        decode::<Claims>(token, &key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &User) -> Result<IssuedToken, DomainError> {
        let issued_at = Timestamp::now();
        let expires_at = issued_at
            .checked_plus_secs(self.ttl.as_secs())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Token lifetime of {}s overflows the clock", self.ttl.as_secs()),
                )
            })?;
        let claims = Claims {
            sub: user.id.to_string(),
            exp: expires_at.as_unix_secs(),
            iat: issued_at.as_unix_secs(),
        };

        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let token = encode(&Header::default(), &claims, &key).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to sign token: {}", e),
            )
        })?;

        Ok(IssuedToken { token, expires_at })
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.decode_claims(token)?;
        let user_id: UserId = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::new(user.id, user.username, user.role))
    }
}
