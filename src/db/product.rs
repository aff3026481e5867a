use crate::models;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::Instrument;

const LISTED: &str =
    "SELECT * FROM products WHERE is_approved = TRUE AND is_pending = FALSE";

// Saturates at INTEGER max instead of failing the statement.
const UPVOTE: &str = "UPDATE products SET upvotes = LEAST(upvotes::BIGINT + 1, 2147483647)::INTEGER \
    WHERE id = $1 AND is_approved = TRUE AND is_pending = FALSE RETURNING *";

const FEATURED: &str = "SELECT * FROM products WHERE is_approved = TRUE AND is_pending = FALSE \
    ORDER BY upvotes DESC, id ASC LIMIT 1";

fn listed_query<'a>(
    cutoff: Option<DateTime<Utc>>,
    tag: Option<&'a str>,
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new(LISTED);

    if let Some(cutoff) = cutoff {
        query.push(" AND launch_date >= ").push_bind(cutoff);
    }
    if let Some(tag) = tag {
        query
            .push(" AND EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE strpos(lower(tag), lower(")
            .push_bind(tag)
            .push(")) > 0)");
    }

    query.push(" ORDER BY upvotes DESC, id ASC");
    query
}

pub async fn fetch_listed(
    pool: &PgPool,
    cutoff: Option<DateTime<Utc>>,
    tag: Option<&str>,
) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch listed products", ?cutoff, ?tag);
    listed_query(cutoff, tag)
        .build_query_as::<models::Product>()
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch listed products: {:?}", err);
            "Failed to retrieve products".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch product by id", id);
    sqlx::query_as::<_, models::Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch product {}: {:?}", id, err);
            "Failed to retrieve product".to_string()
        })
}

pub async fn fetch_featured(pool: &PgPool) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch featured product");
    sqlx::query_as::<_, models::Product>(FEATURED)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch featured product: {:?}", err);
            "Failed to retrieve featured product".to_string()
        })
}

pub async fn fetch_pending(pool: &PgPool) -> Result<Vec<models::Product>, String> {
    let query_span = tracing::info_span!("Fetch pending products");
    sqlx::query_as::<_, models::Product>(
        "SELECT * FROM products WHERE is_pending = TRUE ORDER BY submission_date DESC, id DESC",
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch pending products: {:?}", err);
        "Failed to retrieve pending products".to_string()
    })
}

pub async fn insert(pool: &PgPool, product: &models::Product) -> Result<models::Product, String> {
    let query_span = tracing::info_span!("Saving new product into the database", name = %product.name);
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products (
            name, description, logo_url, website_url, launch_date, upvotes, tags,
            maker, maker_role, maker_email, is_approved, is_pending,
            pricing, category, featured_tweet, submission_date
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, NOW())
        RETURNING *
        "#,
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(&product.logo_url)
    .bind(&product.website_url)
    .bind(product.launch_date)
    .bind(product.upvotes)
    .bind(&product.tags)
    .bind(&product.maker)
    .bind(&product.maker_role)
    .bind(&product.maker_email)
    .bind(product.is_approved)
    .bind(product.is_pending)
    .bind(&product.pricing)
    .bind(&product.category)
    .bind(&product.featured_tweet)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert product: {:?}", err);
        "Failed to create product".to_string()
    })
}

/// Increments in place so concurrent votes never overwrite each other.
/// `None` when no listed product has this id.
pub async fn upvote(pool: &PgPool, id: i32) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Upvote product", id);
    sqlx::query_as::<_, models::Product>(UPVOTE)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to upvote product {}: {:?}", id, err);
            "Failed to upvote product".to_string()
        })
}

pub async fn update_approval(
    pool: &PgPool,
    id: i32,
    is_approved: bool,
    is_pending: bool,
) -> Result<Option<models::Product>, String> {
    let query_span = tracing::info_span!("Update product approval", id, is_approved, is_pending);
    sqlx::query_as::<_, models::Product>(
        "UPDATE products SET is_approved = $2, is_pending = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(is_approved)
    .bind(is_pending)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update approval of product {}: {:?}", id, err);
        "Failed to update product approval".to_string()
    })
}

pub async fn count(pool: &PgPool) -> Result<i64, String> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products: {:?}", err);
            "Failed to count products".to_string()
        })
}

pub async fn delete_all(pool: &PgPool) -> Result<u64, String> {
    let query_span = tracing::info_span!("Delete all products");
    sqlx::query("DELETE FROM products")
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!("Failed to delete products: {:?}", err);
            "Failed to delete products".to_string()
        })
}
