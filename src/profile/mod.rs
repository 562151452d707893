// src/profile/mod.rs
//! Account management for the signed-in user: avatar, profile, password.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use routes::profile_routes;
