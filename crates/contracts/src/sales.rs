//! Sales documents and the props of the sales pages.

use crate::catalog::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    /// Human-facing document number, e.g. "S-0041".
    pub number: String,
    pub customer: String,
    pub item_count: i64,
    pub total: f64,
    pub sold_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SaleIndexProps {
    #[serde(default)]
    pub sales: Vec<Sale>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SaleCreateProps {
    /// Products available for sale lines.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Pre-allocated number for the new document.
    #[serde(default)]
    pub next_number: String,
}
