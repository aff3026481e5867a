use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;

#[tracing::instrument(name = "List products.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(
    query: web::Query<forms::product::ProductListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let cutoff = query.time_filter().cutoff(Utc::now());

    db::product::fetch_listed(pg_pool.get_ref(), cutoff, query.tag())
        .await
        .map(|products| {
            let products = products
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::product::Public>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Get product.", skip(pg_pool))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = super::parse_id(&path.into_inner().0)?;

    let product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Public>::build().internal_server_error(err))?
        .filter(models::Product::is_listed)
        .ok_or_else(|| {
            JsonResponse::<views::product::Public>::build().not_found("Product not found")
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::product::Public>::into(product))
        .ok("OK"))
}
