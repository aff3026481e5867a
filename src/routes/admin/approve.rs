use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::product::parse_id;
use crate::views;
use actix_web::{post, web, Result};
use sqlx::PgPool;
use std::sync::Arc;

async fn decide(
    admin: &models::User,
    pg_pool: &PgPool,
    id: i32,
    is_approved: bool,
    is_pending: bool,
) -> Result<web::Json<JsonResponse<views::product::Admin>>> {
    let product = db::product::update_approval(pg_pool, id, is_approved, is_pending)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::product::Admin>::build().not_found("Product not found")
        })?;

    let view: views::product::Admin = product.into();
    tracing::info!(
        admin = %admin.username,
        id,
        status = ?view.status,
        "Product review updated"
    );

    Ok(JsonResponse::build()
        .set_id(id)
        .set_item(view)
        .ok("Product status updated"))
}

/// Writes both moderation flags exactly as sent.
#[tracing::instrument(
    name = "Admin update product approval.",
    skip(admin, pg_pool),
    fields(admin = %admin.username)
)]
#[post("/approve")]
pub async fn approval_handler(
    admin: web::ReqData<Arc<models::User>>,
    form: web::Json<forms::product::Approval>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<JsonResponse<views::product::Admin>>> {
    decide(
        &admin,
        pg_pool.get_ref(),
        form.id,
        form.is_approved,
        form.is_pending,
    )
    .await
}

#[tracing::instrument(
    name = "Admin approve product.",
    skip(admin, pg_pool),
    fields(admin = %admin.username)
)]
#[post("/{id}/approve")]
pub async fn approve_handler(
    admin: web::ReqData<Arc<models::User>>,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<JsonResponse<views::product::Admin>>> {
    let id = parse_id(&path.into_inner().0)?;
    let (is_approved, is_pending) = models::ReviewStatus::Approved.flags();

    decide(&admin, pg_pool.get_ref(), id, is_approved, is_pending).await
}

#[tracing::instrument(
    name = "Admin reject product.",
    skip(admin, pg_pool),
    fields(admin = %admin.username)
)]
#[post("/{id}/reject")]
pub async fn reject_handler(
    admin: web::ReqData<Arc<models::User>>,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<web::Json<JsonResponse<views::product::Admin>>> {
    let id = parse_id(&path.into_inner().0)?;
    let (is_approved, is_pending) = models::ReviewStatus::Rejected.flags();

    decide(&admin, pg_pool.get_ref(), id, is_approved, is_pending).await
}
