use crate::types::platform::Platform;
use serde::{Deserialize, Serialize};

/// One platform's offer for a dish, with the restaurant join already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformQuote {
    pub platform: Platform,
    pub price: f64,
    pub restaurant_name: String,
    pub delivery_fee: f64,
    /// price + delivery_fee; the figure the aggregates run over.
    pub total_cost: f64,
    pub delivery_time: String,
    pub rating: f64,
}

/// Cross-platform availability and total cost of one dish. Only built when
/// at least two platforms list the dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub item_name: String,
    pub platforms: Vec<PlatformQuote>,
    pub lowest_price: f64,
    pub highest_price: f64,
    pub average_price: f64,
}
