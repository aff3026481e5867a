use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// What anonymous visitors see: no maker contact, no moderation flags.
#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Public {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    pub launch_date: DateTime<Utc>,
    pub upvotes: i32,
    pub tags: Vec<String>,
    pub maker: String,
    pub maker_role: String,
    pub pricing: Option<String>,
    pub category: Option<String>,
    pub featured_tweet: Option<String>,
}

impl From<models::Product> for Public {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            logo_url: product.logo_url,
            website_url: product.website_url,
            launch_date: product.launch_date,
            upvotes: product.upvotes,
            tags: product.tags,
            maker: product.maker,
            maker_role: product.maker_role,
            pricing: product.pricing,
            category: product.category,
            featured_tweet: product.featured_tweet,
        }
    }
}
