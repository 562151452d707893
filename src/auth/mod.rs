//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - JWT issuance and verification (`TokenIssuer`)
//! - Password hashing
//! - Registration and login endpoints
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod token;
pub mod validators;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
pub use token::{TokenError, TokenIssuer};
