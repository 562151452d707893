// src/common/config.rs
//! Process configuration loaded once at startup.
//!
//! Everything here is read from the environment (after `dotenv`) and handed
//! to the services that need it. Nothing reads configuration globally after
//! `main` has built an [`AppConfig`].

use std::env;
use std::path::PathBuf;

/// Minimum accepted HMAC key length in bytes.
pub const MIN_JWT_KEY_LEN: usize = 16;

/// Longest accepted token lifetime: one hundred years, in minutes.
pub const MAX_JWT_EXPIRY_MINUTES: i64 = 525_600 * 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// JWT signing settings: `{ Key, Issuer, Audience, Expiry }`.
#[derive(Debug, Clone)]
pub struct JwtSettings {
    pub key: String,
    pub issuer: String,
    pub audience: String,
    /// Token lifetime in minutes.
    pub expiry_minutes: i64,
}

impl JwtSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = env::var("JWT_KEY").map_err(|_| ConfigError::Missing("JWT_KEY"))?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "account_api".to_string());
        let audience =
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| "account_api-clients".to_string());
        let expiry_minutes = match env::var("JWT_EXPIRY") {
            Ok(raw) => raw.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                name: "JWT_EXPIRY",
                reason: e.to_string(),
            })?,
            Err(_) => 60,
        };

        let settings = Self {
            key,
            issuer,
            audience,
            expiry_minutes,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings that would produce weak or unusable tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty() {
            return Err(ConfigError::Invalid {
                name: "JWT_KEY",
                reason: "signing key must not be empty".to_string(),
            });
        }
        if self.key.len() < MIN_JWT_KEY_LEN {
            return Err(ConfigError::Invalid {
                name: "JWT_KEY",
                reason: format!("signing key must be at least {} bytes", MIN_JWT_KEY_LEN),
            });
        }
        if self.issuer.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "JWT_ISSUER",
                reason: "issuer must not be empty".to_string(),
            });
        }
        if self.audience.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "JWT_AUDIENCE",
                reason: "audience must not be empty".to_string(),
            });
        }
        if self.expiry_minutes <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRY",
                reason: "expiry must be a positive number of minutes".to_string(),
            });
        }
        if self.expiry_minutes > MAX_JWT_EXPIRY_MINUTES {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRY",
                reason: format!("expiry must not exceed {} minutes", MAX_JWT_EXPIRY_MINUTES),
            });
        }
        Ok(())
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub avatars_dir: PathBuf,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub jwt: JwtSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://account_api.db".to_string());
        let avatars_dir =
            env::var("AVATARS_DIR").unwrap_or_else(|_| "./uploads/avatars".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:8080".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            avatars_dir: PathBuf::from(avatars_dir),
            port,
            cors_origins,
            jwt: JwtSettings::from_env()?,
        })
    }
}
