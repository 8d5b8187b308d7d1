use crate::auth::repo_types::{Role, User};
use sqlx::SqlitePool;

impl User {
    /// Find a user by an already-normalized email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, role
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a user unless the email is taken (case-insensitively).
    /// `None` means an account already exists; it is left untouched.
    pub async fn create(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, password_hash, role
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}
