//! SQLite-backed user store

use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::{NewUser, User};
use crate::common::{generate_user_id, safe_email_log};

#[derive(Clone, Debug)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(normalize_email(email))
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new user. A duplicate email fails with a unique violation.
    pub async fn insert(&self, new_user: NewUser) -> Result<User, sqlx::Error> {
        let id = generate_user_id();
        let email = normalize_email(&new_user.email);

        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, datetime('now'), datetime('now'))
            "#,
        )
        .bind(&id)
        .bind(&email)
        .bind(new_user.name.as_deref())
        .bind(&new_user.password_hash)
        .execute(&self.pool)
        .await?;

        info!(user_id = %id, email = %safe_email_log(&email), "User created");

        self.fetch(&id).await
    }

    /// Persist every mutable column of `user` and bump `updated_at`.
    pub async fn update(&self, user: &User) -> Result<User, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, name = ?, password_hash = ?, avatar = ?, updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(normalize_email(&user.email))
        .bind(user.name.as_deref())
        .bind(&user.password_hash)
        .bind(user.avatar.as_deref())
        .bind(&user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        debug!(user_id = %user.id, "User updated");

        self.fetch(&user.id).await
    }

    /// True when `email` belongs to an account other than `user_id`.
    pub async fn email_taken_by_other(
        &self,
        email: &str,
        user_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = ? AND id != ?")
                .bind(normalize_email(email))
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    async fn fetch(&self, id: &str) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
