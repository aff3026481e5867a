use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::product::parse_id;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

#[tracing::instrument(name = "Admin list pending products.", skip(_admin, pg_pool))]
#[get("/pending-products")]
pub async fn pending_list_handler(
    _admin: web::ReqData<Arc<models::User>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    db::product::fetch_pending(pg_pool.get_ref())
        .await
        .map(|products| {
            let products = products
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::product::Admin>>();

            JsonResponse::build().set_list(products).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}

#[tracing::instrument(name = "Admin get product.", skip(_admin, pg_pool))]
#[get("/{id}")]
pub async fn item_handler(
    _admin: web::ReqData<Arc<models::User>>,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = parse_id(&path.into_inner().0)?;

    let product = db::product::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))?
        .ok_or_else(|| {
            JsonResponse::<views::product::Admin>::build().not_found("Product not found")
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::product::Admin>::into(product))
        .ok("OK"))
}
