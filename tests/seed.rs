mod common;

use trendspotter::configuration::{get_configuration, AdminSettings};
use trendspotter::services::seed;

const CATALOGUE_SIZE: i64 = 21;

async fn count_products(app: &common::TestApp) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&app.db_pool)
        .await
        .unwrap()
}

async fn database_name(app: &common::TestApp) -> String {
    sqlx::query_scalar("SELECT current_database()")
        .fetch_one(&app.db_pool)
        .await
        .unwrap()
}

async fn run_console(app: &common::TestApp, args: &[&str]) -> std::process::Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_console"))
        .args(args)
        .env("APP_DATABASE__DATABASE_NAME", database_name(app).await)
        .output()
        .await
        .expect("Failed to run console")
}

#[tokio::test]
async fn seed_if_empty_inserts_catalogue_once() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    assert_eq!(0, count_products(&app).await);

    let inserted = seed::seed_if_empty(&app.db_pool).await.unwrap();
    assert_eq!(CATALOGUE_SIZE as usize, inserted);
    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);

    let inserted = seed::seed_if_empty(&app.db_pool).await.unwrap();
    assert_eq!(0, inserted);
    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);
}

#[tokio::test]
async fn seed_if_empty_leaves_existing_products_alone() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.submit("Already here").await;

    assert_eq!(0, seed::seed_if_empty(&app.db_pool).await.unwrap());
    assert_eq!(1, count_products(&app).await);
}

#[tokio::test]
async fn reset_replaces_everything_with_catalogue() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.submit("Will be dropped").await;
    seed::seed_if_empty(&app.db_pool).await.unwrap();

    let inserted = seed::reset_products(&app.db_pool).await.unwrap();
    assert_eq!(CATALOGUE_SIZE as usize, inserted);
    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);

    let dropped: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE name = $1")
        .bind("Will be dropped")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(0, dropped);

    let names = app.list_names("/api/products").await;
    assert_eq!(CATALOGUE_SIZE as usize, names.len());
    assert_eq!("ChatGPT", names[0]);
}

#[tokio::test]
async fn ensure_admin_replaces_the_password() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let admin = AdminSettings {
        username: common::ADMIN_USERNAME.to_string(),
        password: "a brand new passphrase".to_string(),
    };
    let user = seed::ensure_admin(&app.db_pool, &admin).await.unwrap();
    assert!(user.is_admin);

    let response = app.admin_get("/api/admin/pending-products").await;
    assert_eq!(401, response.status().as_u16());

    let response = app
        .client
        .get(app.url("/api/admin/pending-products"))
        .basic_auth(common::ADMIN_USERNAME, Some("a brand new passphrase"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(common::ADMIN_USERNAME)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(1, admins);
}

#[tokio::test]
async fn startup_seeds_when_enabled() {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.seed_sample_products = true;
    let Some(app) = common::spawn_app_with_configuration(configuration).await else {
        return;
    };

    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);

    let json: serde_json::Value = app
        .get("/api/featured-product")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json["item"]["name"], "ChatGPT");
    assert_eq!(json["item"]["upvotes"], 450);
}

#[tokio::test]
async fn console_reset_and_seed_use_configured_database() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.submit("Operator will wipe this").await;

    let output = run_console(&app, &["db", "reset"]).await;
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);

    let output = run_console(&app, &["db", "seed"]).await;
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(CATALOGUE_SIZE, count_products(&app).await);

    let configured_admin = get_configuration().unwrap().admin.username;
    let is_admin: bool = sqlx::query_scalar("SELECT is_admin FROM users WHERE username = $1")
        .bind(configured_admin)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert!(is_admin);
}
