use super::AuthError;
use crate::{db, models};
use actix_web::{dev::ServiceRequest, http::header::AUTHORIZATION, web};
use base64::{engine::general_purpose::STANDARD, Engine};
use sqlx::PgPool;
use std::sync::{Arc, OnceLock};

#[derive(Debug, PartialEq)]
pub(super) struct Credentials {
    pub username: String,
    pub password: String,
}

pub(super) fn parse_basic(header: &str) -> Result<Credentials, AuthError> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedCredentials)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(AuthError::MalformedCredentials);
    }

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedCredentials)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedCredentials)?;
    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedCredentials)?;

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Unknown users are checked against a throwaway hash so both paths pay for bcrypt.
async fn verify_password(password: String, stored_hash: Option<String>) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || {
        let known = stored_hash.is_some();
        let hash = stored_hash.unwrap_or_else(|| {
            DUMMY_HASH
                .get_or_init(|| {
                    bcrypt::hash("unused dummy password", bcrypt::DEFAULT_COST).unwrap_or_default()
                })
                .clone()
        });

        let matched = bcrypt::verify(password, &hash).unwrap_or(false);
        known && matched
    })
    .await
    .map_err(|err| AuthError::Internal(err.to_string()))
}

#[tracing::instrument(name = "Authenticate admin", skip(req))]
pub(super) async fn authenticate(req: &ServiceRequest) -> Result<Arc<models::User>, AuthError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredentials)?;
    let credentials = parse_basic(header)?;

    let pg_pool = req
        .app_data::<web::Data<PgPool>>()
        .ok_or_else(|| AuthError::Internal("database pool is not configured".to_string()))?;

    let user = db::user::fetch_by_username(pg_pool.get_ref(), &credentials.username)
        .await
        .map_err(AuthError::Internal)?;

    let stored_hash = user.as_ref().map(|user| user.password_hash.clone());
    let verified = verify_password(credentials.password, stored_hash).await?;
    let user = match user {
        Some(user) if verified => user,
        _ => {
            tracing::info!(username = %credentials.username, "Rejected admin credentials");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !user.is_admin {
        tracing::info!(username = %user.username, "User is not an admin");
        return Err(AuthError::Forbidden);
    }

    Ok(Arc::new(user))
}
