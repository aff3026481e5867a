use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by username", username);
    sqlx::query_as::<_, models::User>(
        "SELECT id, username, password_hash, is_admin FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user {}: {:?}", username, err);
        "Failed to retrieve user".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    is_admin: bool,
) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Saving new user into the database", username);
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (username, password_hash, is_admin)
        VALUES ($1, $2, $3)
        RETURNING id, username, password_hash, is_admin
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(is_admin)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert user {}: {:?}", username, err);
        "Failed to create user".to_string()
    })
}

/// Creates the account or resets its password and admin flag.
pub async fn upsert_admin(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<models::User, String> {
    let query_span = tracing::info_span!("Upsert admin user", username);
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (username, password_hash, is_admin)
        VALUES ($1, $2, TRUE)
        ON CONFLICT (username)
        DO UPDATE SET password_hash = EXCLUDED.password_hash, is_admin = TRUE
        RETURNING id, username, password_hash, is_admin
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert admin {}: {:?}", username, err);
        "Failed to save admin user".to_string()
    })
}
