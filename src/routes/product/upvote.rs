use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{post, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Upvote product.", skip(pg_pool))]
#[post("/upvote")]
pub async fn upvote_handler(
    form: web::Json<forms::product::Upvote>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product = db::product::upvote(pg_pool.get_ref(), form.product_id)
        .await
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::product::Public>::build().not_found("Product not found")
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::product::Public>::into(product))
        .ok("Upvoted"))
}
