use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use crate::middleware::authentication;
use crate::routes;
use crate::services;
use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    services::seed::bootstrap(&pg_pool, &settings)
        .await
        .map_err(std::io::Error::other)?;

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "Invalid JSON at line {}, column {}: {}",
                err.line(),
                err.column(),
                err
            ),
            err => err.to_string(),
        };
        JsonResponse::<()>::build().bad_request(msg)
    });
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| JsonResponse::<()>::build().bad_request(err.to_string()));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/products")
                            .service(routes::product::list_handler)
                            .service(routes::product::add_handler)
                            .service(routes::product::upvote_handler)
                            .service(routes::product::item_handler),
                    )
                    .service(
                        web::scope("/featured-product").service(routes::product::featured_handler),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(authentication::Manager::new())
                            .service(routes::admin::pending_list_handler)
                            .service(
                                web::scope("/products")
                                    .service(routes::admin::approval_handler)
                                    .service(routes::admin::approve_handler)
                                    .service(routes::admin::reject_handler)
                                    .service(routes::admin::item_handler),
                            ),
                    ),
            )
            .app_data(json_config.clone())
            .app_data(query_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
