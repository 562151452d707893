// Application state shared across all modules

use sqlx::SqlitePool;
use std::path::PathBuf;

use crate::auth::TokenIssuer;
use crate::users::UserStore;

/// Immutable per-process state; handlers receive it as `Extension<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub tokens: TokenIssuer,
    pub avatars_dir: PathBuf,
}

impl AppState {
    pub fn new(db: SqlitePool, tokens: TokenIssuer, avatars_dir: PathBuf) -> Self {
        Self {
            users: UserStore::new(db),
            tokens,
            avatars_dir,
        }
    }
}
