use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get featured product.", skip(pg_pool))]
#[get("")]
pub async fn featured_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let product = db::product::fetch_featured(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::product::Public>::build().not_found("No featured product found")
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::product::Public>::into(product))
        .ok("OK"))
}
