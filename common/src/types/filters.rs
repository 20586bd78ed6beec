use crate::constants::DEFAULT_PRICE_RANGE;
use crate::types::platform::Platform;
use serde::{Deserialize, Serialize};

/// Result ordering selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    DeliveryTime,
}

impl SortBy {
    pub fn parse(input: &str) -> Option<SortBy> {
        match input.trim().to_lowercase().as_str() {
            "relevance" => Some(SortBy::Relevance),
            "price-low" => Some(SortBy::PriceLow),
            "price-high" => Some(SortBy::PriceHigh),
            "rating" => Some(SortBy::Rating),
            "delivery-time" => Some(SortBy::DeliveryTime),
            _ => None,
        }
    }
}

/// Filter state applied on top of the free-text query. Empty platform or
/// cuisine selections mean "no filter".
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub platforms: Vec<Platform>,
    pub cuisines: Vec<String>,
    /// Inclusive min/max applied to menu-item prices.
    pub price_range: (f64, f64),
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            platforms: Vec::new(),
            cuisines: Vec::new(),
            price_range: DEFAULT_PRICE_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_parses_kebab_case() {
        assert_eq!(SortBy::parse("price-low"), Some(SortBy::PriceLow));
        assert_eq!(SortBy::parse("Delivery-Time"), Some(SortBy::DeliveryTime));
        assert_eq!(SortBy::parse("cheapest"), None);
    }

    #[test]
    fn default_filters_select_everything() {
        let filters = SearchFilters::default();
        assert!(filters.platforms.is_empty());
        assert!(filters.cuisines.is_empty());
        assert_eq!(filters.price_range, DEFAULT_PRICE_RANGE);
    }
}
