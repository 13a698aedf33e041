//! Props of the dashboard page.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardProps {
    #[serde(default)]
    pub total_products: i64,
    #[serde(default)]
    pub total_brands: i64,
    #[serde(default)]
    pub total_categories: i64,
    #[serde(default)]
    pub revenue_today: f64,
    /// Products at or below their reorder level, worst first.
    #[serde(default)]
    pub low_stock: Vec<Product>,
}
