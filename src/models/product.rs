use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
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
    pub maker_email: String,
    pub is_approved: bool,
    pub is_pending: bool,
    pub submission_date: DateTime<Utc>,
    pub pricing: Option<String>,
    pub category: Option<String>,
    pub featured_tweet: Option<String>,
}

/// Read-only summary of the two moderation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// `(is_approved, is_pending)` as written by an admin decision.
    pub fn flags(self) -> (bool, bool) {
        match self {
            ReviewStatus::Pending => (false, true),
            ReviewStatus::Approved => (true, false),
            ReviewStatus::Rejected => (false, false),
        }
    }
}

impl Product {
    pub fn is_listed(&self) -> bool {
        self.is_approved && !self.is_pending
    }

    pub fn status(&self) -> ReviewStatus {
        if self.is_pending {
            ReviewStatus::Pending
        } else if self.is_approved {
            ReviewStatus::Approved
        } else {
            ReviewStatus::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_flags(is_approved: bool, is_pending: bool) -> Product {
        Product {
            is_approved,
            is_pending,
            ..Default::default()
        }
    }

    #[test]
    fn only_approved_and_settled_products_are_listed() {
        assert!(with_flags(true, false).is_listed());
        assert!(!with_flags(true, true).is_listed());
        assert!(!with_flags(false, true).is_listed());
        assert!(!with_flags(false, false).is_listed());
    }

    #[test]
    fn pending_flag_dominates_status() {
        assert_eq!(with_flags(true, true).status(), ReviewStatus::Pending);
        assert_eq!(with_flags(false, true).status(), ReviewStatus::Pending);
        assert_eq!(with_flags(true, false).status(), ReviewStatus::Approved);
        assert_eq!(with_flags(false, false).status(), ReviewStatus::Rejected);
    }

    #[test]
    fn flags_round_trip_through_status() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            let (is_approved, is_pending) = status.flags();
            assert_eq!(with_flags(is_approved, is_pending).status(), status);
        }
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let product: Product = serde_json::from_str(
            r#"{
                "name": "Motion",
                "logoUrl": "https://www.usemotion.com/logo.svg",
                "launchDate": "2019-06-30T00:00:00Z",
                "upvotes": 295,
                "tags": ["Productivity"],
                "makerRole": "Company"
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, 0);
        assert_eq!(product.logo_url, "https://www.usemotion.com/logo.svg");
        assert_eq!(product.maker_role, "Company");
        assert_eq!(product.upvotes, 295);
        assert!(!product.is_approved);
        assert!(product.featured_tweet.is_none());
    }
}
