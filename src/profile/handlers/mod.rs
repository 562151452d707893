// src/profile/handlers/mod.rs

pub mod avatar;
pub mod password;
pub mod profile;
