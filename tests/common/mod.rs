#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use trendspotter::configuration::{get_configuration, DatabaseSettings, Settings};
use trendspotter::{db, models};

pub const ADMIN_USERNAME: &str = "moderator";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: reqwest::Client,
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.seed_sample_products = false;
    configuration.admin.username = ADMIN_USERNAME.to_string();
    configuration.admin.password = ADMIN_PASSWORD.to_string();

    spawn_app_with_configuration(configuration).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = trendspotter::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
        client: reqwest::Client::new(),
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub fn submission(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "description": "An AI assistant that drafts release notes from commits.",
        "logoUrl": "https://example.com/logo.png",
        "websiteUrl": "https://example.com",
        "tags": ["Productivity", "LLM"],
        "launchDate": "2025-01-10T00:00:00Z",
        "maker": "Jamie Doe",
        "makerRole": "Founder",
        "makerEmail": "jamie@example.com"
    })
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .basic_auth(ADMIN_USERNAME, Some(ADMIN_PASSWORD))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_post(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .basic_auth(ADMIN_USERNAME, Some(ADMIN_PASSWORD))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Submits through the API and returns the new id.
    pub async fn submit(&self, name: &str) -> i32 {
        let response = self.post_json("/api/products", &submission(name)).await;
        assert_eq!(response.status().as_u16(), 201);

        let json: serde_json::Value = response.json().await.unwrap();
        json["id"].as_i64().unwrap() as i32
    }

    /// Stores an already approved product directly.
    pub async fn insert_listed(
        &self,
        name: &str,
        tags: &[&str],
        launch_date: DateTime<Utc>,
        upvotes: i32,
    ) -> i32 {
        let product = models::Product {
            name: name.to_string(),
            description: format!("{} description", name),
            logo_url: "https://example.com/logo.png".to_string(),
            website_url: "https://example.com".to_string(),
            launch_date,
            upvotes,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            maker: "Maker".to_string(),
            maker_role: "Company".to_string(),
            maker_email: "maker@example.com".to_string(),
            is_approved: true,
            is_pending: false,
            ..Default::default()
        };

        db::product::insert(&self.db_pool, &product)
            .await
            .expect("Failed to insert product")
            .id
    }

    pub async fn list_names(&self, path: &str) -> Vec<String> {
        let response = self.get(path).await;
        assert!(
            response.status().is_success(),
            "{} -> {}",
            path,
            response.status()
        );

        let json: serde_json::Value = response.json().await.unwrap();
        json["list"]
            .as_array()
            .expect("list is missing")
            .iter()
            .map(|item| item["name"].as_str().unwrap().to_string())
            .collect()
    }
}
