use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

const DEFAULT_PRICING: &str = "Free";

/// Maker submission. Moderation fields and counters are never taken from the client.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProduct {
    #[validate(min_length = 2)]
    #[validate(max_length = 50)]
    pub name: String,
    #[validate(min_length = 10)]
    #[validate(max_length = 500)]
    pub description: String,
    #[validate(pattern = r"^https?://\S+$")]
    pub logo_url: String,
    #[validate(pattern = r"^https?://\S+$")]
    pub website_url: String,
    #[validate(min_items = 1)]
    #[validate(max_items = 3)]
    #[validate(pattern = r"\S")]
    pub tags: Vec<String>,
    pub launch_date: DateTime<Utc>,
    #[validate(min_length = 2)]
    pub maker: String,
    #[validate(min_length = 2)]
    pub maker_role: String,
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub maker_email: String,
    #[validate(max_length = 50)]
    pub pricing: Option<String>,
    #[validate(max_length = 100)]
    pub category: Option<String>,
    #[validate(max_length = 500)]
    pub featured_tweet: Option<String>,
}

impl From<AddProduct> for models::Product {
    fn from(form: AddProduct) -> Self {
        let (is_approved, is_pending) = models::ReviewStatus::Pending.flags();

        models::Product {
            name: form.name,
            description: form.description,
            logo_url: form.logo_url,
            website_url: form.website_url,
            launch_date: form.launch_date,
            upvotes: 0,
            tags: form.tags,
            maker: form.maker,
            maker_role: form.maker_role,
            maker_email: form.maker_email,
            is_approved,
            is_pending,
            pricing: form.pricing.or_else(|| Some(DEFAULT_PRICING.to_string())),
            category: form.category,
            featured_tweet: form.featured_tweet,
            ..Default::default()
        }
    }
}
