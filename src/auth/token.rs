//! Bearer token issuance and verification.
//!
//! Tokens are compact HS256 JWTs carrying `jti`, `sub`, `nameidentifier`,
//! `iss`, `aud`, `iat` and `exp`. The subject is written twice (`sub` and
//! `nameidentifier`) because consumers of the token read one or the other.
//!
//! A [`TokenIssuer`] holds only immutable key material, so one instance is
//! shared by every request handler without locking.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{ConfigError, JwtSettings};
use crate::users::User;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("cannot issue a token for an empty subject")]
    EmptySubject,

    #[error("failed to encode token: {0}")]
    Encoding(jsonwebtoken::errors::Error),

    #[error("token expiry falls outside the supported date range")]
    ExpiryOutOfRange,

    #[error("invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub jti: String,
    pub sub: String,
    #[serde(rename = "nameidentifier")]
    pub name_identifier: String,
    pub iss: String,
    pub aud: String,
    pub iat: usize,
    pub exp: usize,
}

/// A freshly signed token plus the values callers usually report back.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    expiry: Duration,
}

impl TokenIssuer {
    /// Build an issuer from validated settings. Weak or incomplete settings
    /// are rejected here so the process fails at startup instead of handing
    /// out insecure tokens.
    pub fn new(settings: &JwtSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&settings.issuer]);
        validation.set_audience(&[&settings.audience]);

        let expiry =
            Duration::try_minutes(settings.expiry_minutes).ok_or_else(|| ConfigError::Invalid {
                name: "JWT_EXPIRY",
                reason: "expiry is out of range".to_string(),
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(settings.key.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.key.as_bytes()),
            validation,
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            expiry,
        })
    }

    /// Issue a token for `user`, expiring `expiry_minutes` from now.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        self.issue_at(&user.id, Utc::now())
    }

    /// Issue a token for `subject` as if the current time were `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let expires_at = now
            .checked_add_signed(self.expiry)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            jti: jti.clone(),
            sub: subject.to_string(),
            name_identifier: subject.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: unix_seconds(now),
            exp: unix_seconds(expires_at),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encoding)?;

        Ok(IssuedToken {
            token,
            jti,
            expires_at,
        })
    }

    /// Check signature, algorithm, expiry, issuer and audience.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

fn unix_seconds(at: DateTime<Utc>) -> usize {
    at.timestamp().max(0) as usize
}
