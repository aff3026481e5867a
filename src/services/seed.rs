use crate::configuration::{AdminSettings, Settings};
use crate::{db, models};
use sqlx::PgPool;

const SAMPLE_PRODUCTS: &str = include_str!("../../assets/sample_products.json");

/// Bundled catalogue; every entry is already approved.
pub fn sample_products() -> Result<Vec<models::Product>, String> {
    let mut products: Vec<models::Product> = serde_json::from_str(SAMPLE_PRODUCTS)
        .map_err(|err| format!("Sample catalogue is malformed: {}", err))?;

    let (is_approved, is_pending) = models::ReviewStatus::Approved.flags();
    for product in products.iter_mut() {
        product.is_approved = is_approved;
        product.is_pending = is_pending;
    }

    Ok(products)
}

#[tracing::instrument(name = "Ensure admin user", skip(pool, admin), fields(username = %admin.username))]
pub async fn ensure_admin(pool: &PgPool, admin: &AdminSettings) -> Result<models::User, String> {
    let password = admin.password.clone();
    let password_hash =
        tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|err| format!("Password hashing task failed: {}", err))?
            .map_err(|err| format!("Failed to hash admin password: {}", err))?;

    db::user::upsert_admin(pool, &admin.username, &password_hash).await
}

async fn insert_all(pool: &PgPool, products: &[models::Product]) -> Result<usize, String> {
    for product in products {
        db::product::insert(pool, product).await?;
    }

    Ok(products.len())
}

/// Inserts the sample catalogue unless products already exist.
pub async fn seed_if_empty(pool: &PgPool) -> Result<usize, String> {
    let existing = db::product::count(pool).await?;
    if existing > 0 {
        tracing::info!(existing, "Products present, skipping sample catalogue");
        return Ok(0);
    }

    let inserted = insert_all(pool, &sample_products()?).await?;
    tracing::info!(inserted, "Sample products added");
    Ok(inserted)
}

pub async fn reset_products(pool: &PgPool) -> Result<usize, String> {
    let removed = db::product::delete_all(pool).await?;
    tracing::info!(removed, "Existing products removed");

    let inserted = insert_all(pool, &sample_products()?).await?;
    tracing::info!(inserted, "Sample products added");
    Ok(inserted)
}

/// Startup hook: admin account always, sample catalogue when enabled.
pub async fn bootstrap(pool: &PgPool, settings: &Settings) -> Result<(), String> {
    ensure_admin(pool, &settings.admin).await?;
    if settings.seed_sample_products {
        seed_if_empty(pool).await?;
    }

    Ok(())
}
