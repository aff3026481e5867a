use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(flatten)]
    pub product: models::Product,
    pub status: models::ReviewStatus,
}

impl From<models::Product> for Admin {
    fn from(product: models::Product) -> Self {
        Self {
            status: product.status(),
            product,
        }
    }
}
