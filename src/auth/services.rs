use lazy_static::lazy_static;
use regex::Regex;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::{Role, User};
use crate::config::AdminBootstrap;

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Loose shape check; bootstrap addresses such as `admin@local` have no TLD.
pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Make sure the configured administrator exists. Never touches an existing row.
pub async fn bootstrap_admin(db: &SqlitePool, admin: &AdminBootstrap) -> anyhow::Result<()> {
    let email = normalize_email(&admin.email);
    anyhow::ensure!(is_valid_email(&email), "ADMIN_EMAIL is not an email address");

    if User::find_by_email(db, &email).await?.is_some() {
        info!(email = %email, "admin account already present");
        return Ok(());
    }

    let hash = hash_password(&admin.password)?;
    match User::create(db, &email, &hash, Role::Admin).await? {
        Some(user) => info!(user_id = user.id, email = %email, "admin account created"),
        None => warn!(email = %email, "admin account appeared concurrently; left untouched"),
    }
    Ok(())
}

/// Returns the user only when the password verifies. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn authenticate(
    db: &SqlitePool,
    email: &str,
    password: &str,
) -> anyhow::Result<Option<User>> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Ok(None);
    }

    let Some(user) = User::find_by_email(db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return Ok(None);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = user.id, "login invalid password");
        return Ok(None);
    }
    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    async fn count_users(db: &SqlitePool) -> i64 {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .expect("count");
        n
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Admin@Local "), "admin@local");
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("admin@local"));
        assert!(is_valid_email("a.b@clinic.example"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@signs"));
        assert!(!is_valid_email("has space@x"));
        assert!(!is_valid_email(""));
    }

    #[tokio::test]
    async fn bootstrap_twice_creates_one_admin() {
        let state = AppState::for_tests().await;
        bootstrap_admin(&state.db, &state.config.admin).await.expect("first");
        bootstrap_admin(&state.db, &state.config.admin).await.expect("second");

        assert_eq!(count_users(&state.db).await, 1);
        let admin = User::find_by_email(&state.db, "admin@local")
            .await
            .expect("query")
            .expect("admin present");
        assert_eq!(admin.role, Role::Admin);
    }

    #[tokio::test]
    async fn bootstrap_rejects_garbage_email() {
        let state = AppState::for_tests().await;
        let admin = AdminBootstrap {
            email: "not an email".into(),
            password: "x".into(),
        };
        assert!(bootstrap_admin(&state.db, &admin).await.is_err());
        assert_eq!(count_users(&state.db).await, 0);
    }

    #[tokio::test]
    async fn authenticate_matches_credentials_regardless_of_case() {
        let state = AppState::for_tests().await;
        bootstrap_admin(&state.db, &state.config.admin).await.expect("bootstrap");

        let lower = authenticate(&state.db, "admin@local", "admin12345")
            .await
            .expect("query")
            .expect("lowercase matches");
        let mixed = authenticate(&state.db, "Admin@Local", "admin12345")
            .await
            .expect("query")
            .expect("mixed case matches");
        assert_eq!(lower.id, mixed.id);
        assert_eq!(mixed.email, "admin@local");
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password_and_unknown_email() {
        let state = AppState::for_tests().await;
        bootstrap_admin(&state.db, &state.config.admin).await.expect("bootstrap");

        assert!(authenticate(&state.db, "admin@local", "nope")
            .await
            .expect("query")
            .is_none());
        assert!(authenticate(&state.db, "ghost@local", "admin12345")
            .await
            .expect("query")
            .is_none());
    }
}
