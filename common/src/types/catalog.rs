use crate::types::platform::Platform;
use crate::utils::leading_minutes;
use serde::{Deserialize, Serialize};

/// A restaurant listing on one platform. Catalog entries are read-only
/// fixtures loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique ID of the restaurant listing.
    pub id: String,
    pub name: String,
    pub image: String,
    /// Cuisine tags, e.g. `["Italian", "Fast Food"]`.
    pub cuisine: Vec<String>,
    pub rating: f64,
    /// Human range such as `"25-30 mins"`.
    pub delivery_time: String,
    pub delivery_fee: f64,
    pub min_order: f64,
    pub address: String,
    pub platform: Platform,
    pub is_available: bool,
}

impl Restaurant {
    /// Leading integer of the delivery-time range, used by the
    /// delivery-time sort.
    pub fn lead_delivery_minutes(&self) -> Option<u32> {
        leading_minutes(&self.delivery_time)
    }
}

/// A dish listed by a restaurant on one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    /// Pre-discount price, when the platform shows a strike-through.
    pub original_price: Option<f64>,
    pub category: String,
    pub is_veg: bool,
    /// Per-dish rating; falls back to the restaurant rating in comparisons.
    pub rating: Option<f64>,
    /// Foreign key into the restaurant fixture.
    pub restaurant_id: String,
    pub platform: Platform,
}

/// A trending dish shown on the landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecommendation {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    /// 0-100 popularity score.
    pub popularity: u8,
    pub avg_price: f64,
    pub description: String,
    pub tags: Vec<String>,
}
