//! # Users Module
//!
//! Credential store for user accounts: lookups by email and id, insert and
//! update over the SQLite pool.

pub mod models;
pub mod store;


pub use models::{NewUser, User};
pub use store::{is_unique_violation, UserStore};
