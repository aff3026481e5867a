use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Submit product.", skip(pg_pool))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::product::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::product::Admin>::build().form_error(errors.to_string()));
    }

    let product: models::Product = form.into_inner().into();
    db::product::insert(pg_pool.get_ref(), &product)
        .await
        .map(|product| {
            tracing::info!(id = product.id, "New product submitted for review");
            JsonResponse::build()
                .set_id(product.id)
                .set_item(Into::<views::product::Admin>::into(product))
                .created("Submitted for review")
        })
        .map_err(|err| JsonResponse::<views::product::Admin>::build().internal_server_error(err))
}
