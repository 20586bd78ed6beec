//! Pure filter/sort/aggregation over the catalog. The [`SearchEngine`]
//! actor wraps these with latency simulation and request tracking.
//!
//! [`SearchEngine`]: crate::search::engine::SearchEngine

use crate::catalog::Catalog;
use common::constants::{FALLBACK_DELIVERY_TIME, FALLBACK_RATING};
use common::types::catalog::{FoodRecommendation, MenuItem, Restaurant};
use common::types::comparison::{PlatformQuote, PriceComparison};
use common::types::filters::{SearchFilters, SortBy};

/// Restaurants whose name or any cuisine tag contains the query,
/// case-insensitively, subject to the platform and cuisine filters.
pub fn filter_restaurants(
    catalog: &Catalog,
    query: &str,
    filters: &SearchFilters,
) -> Vec<Restaurant> {
    let needle = query.to_lowercase();
    catalog
        .restaurants
        .iter()
        .filter(|restaurant| {
            let matches_query = restaurant.name.to_lowercase().contains(&needle)
                || restaurant
                    .cuisine
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle));

            let matches_platform = filters.platforms.is_empty()
                || filters.platforms.contains(&restaurant.platform);

            let matches_cuisine = filters.cuisines.is_empty()
                || restaurant
                    .cuisine
                    .iter()
                    .any(|c| filters.cuisines.contains(c));

            matches_query && matches_platform && matches_cuisine
        })
        .cloned()
        .collect()
}

/// Menu items whose name, description or category contains the query,
/// case-insensitively, subject to the platform filter and the inclusive
/// price range.
pub fn filter_menu_items(catalog: &Catalog, query: &str, filters: &SearchFilters) -> Vec<MenuItem> {
    let needle = query.to_lowercase();
    let (min_price, max_price) = filters.price_range;
    catalog
        .menu_items
        .iter()
        .filter(|item| {
            let matches_query = item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle);

            let matches_platform =
                filters.platforms.is_empty() || filters.platforms.contains(&item.platform);

            let matches_price = item.price >= min_price && item.price <= max_price;

            matches_query && matches_platform && matches_price
        })
        .cloned()
        .collect()
}

/// Orders restaurants in place. Price sorts compare the delivery fee, the
/// closest thing a restaurant row has to a price. Sorts are stable, so
/// `Relevance` and ties keep filter order.
pub fn sort_restaurants(restaurants: &mut [Restaurant], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => {}
        SortBy::PriceLow => {
            restaurants.sort_by(|a, b| a.delivery_fee.total_cmp(&b.delivery_fee));
        }
        SortBy::PriceHigh => {
            restaurants.sort_by(|a, b| b.delivery_fee.total_cmp(&a.delivery_fee));
        }
        SortBy::Rating => {
            restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortBy::DeliveryTime => {
            restaurants.sort_by_key(|r| r.lead_delivery_minutes().unwrap_or(u32::MAX));
        }
    }
}

/// Orders menu items in place. Delivery-time ordering does not apply to
/// dishes, so it is a no-op here.
pub fn sort_menu_items(items: &mut [MenuItem], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance | SortBy::DeliveryTime => {}
        SortBy::PriceLow => {
            items.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortBy::PriceHigh => {
            items.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
        SortBy::Rating => {
            items.sort_by(|a, b| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
            });
        }
    }
}

/// Cross-platform comparison for a dish, matched by exact case-insensitive
/// name. Needs listings on at least two platforms to be meaningful; returns
/// `None` otherwise. A listing whose restaurant is missing from the catalog
/// degrades to an unknown restaurant with no delivery fee.
pub fn price_comparison(catalog: &Catalog, item_name: &str) -> Option<PriceComparison> {
    let wanted = item_name.to_lowercase();
    let listings: Vec<&MenuItem> = catalog
        .menu_items
        .iter()
        .filter(|item| item.name.to_lowercase() == wanted)
        .collect();

    if listings.len() < 2 {
        return None;
    }

    let platforms: Vec<PlatformQuote> = listings
        .iter()
        .map(|item| {
            let restaurant = catalog.restaurant(&item.restaurant_id);
            let delivery_fee = restaurant.map_or(0.0, |r| r.delivery_fee);
            PlatformQuote {
                platform: item.platform,
                price: item.price,
                restaurant_name: restaurant
                    .map_or_else(|| "Unknown".to_string(), |r| r.name.clone()),
                delivery_fee,
                total_cost: item.price + delivery_fee,
                delivery_time: restaurant
                    .map_or_else(|| FALLBACK_DELIVERY_TIME.to_string(), |r| {
                        r.delivery_time.clone()
                    }),
                rating: item
                    .rating
                    .or_else(|| restaurant.map(|r| r.rating))
                    .unwrap_or(FALLBACK_RATING),
            }
        })
        .collect();

    let totals: Vec<f64> = platforms.iter().map(|q| q.total_cost).collect();
    let lowest_price = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let highest_price = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average_price = totals.iter().sum::<f64>() / totals.len() as f64;

    Some(PriceComparison {
        item_name: item_name.to_string(),
        platforms,
        lowest_price,
        highest_price,
        average_price,
    })
}

/// Recommendations ordered by popularity, most popular first.
pub fn trending(catalog: &Catalog) -> Vec<FoodRecommendation> {
    let mut recommendations = catalog.recommendations.clone();
    recommendations.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::platform::Platform;

    fn catalog() -> Catalog {
        Catalog::fixture()
    }

    #[test]
    fn restaurant_match_covers_name_and_cuisine() {
        let catalog = catalog();
        let filters = SearchFilters::default();

        let by_name = filter_restaurants(&catalog, "pizza", &filters);
        assert!(by_name.iter().any(|r| r.name == "Pizza Palace"));

        let by_cuisine = filter_restaurants(&catalog, "italian", &filters);
        for restaurant in &by_cuisine {
            assert!(
                restaurant.name.to_lowercase().contains("italian")
                    || restaurant
                        .cuisine
                        .iter()
                        .any(|c| c.to_lowercase().contains("italian"))
            );
        }
        assert!(by_cuisine.iter().any(|r| r.name == "Napoli Kitchen"));
    }

    #[test]
    fn menu_item_match_covers_name_description_and_category() {
        let catalog = catalog();
        let filters = SearchFilters::default();

        let by_description = filter_menu_items(&catalog, "mozzarella", &filters);
        assert!(by_description.iter().any(|i| i.id == "m1"));

        let by_category = filter_menu_items(&catalog, "biryani", &filters);
        assert!(by_category.iter().any(|i| i.name == "Veg Biryani"));
    }

    #[test]
    fn platform_filter_restricts_both_lists() {
        let catalog = catalog();
        let filters = SearchFilters {
            platforms: vec![Platform::Zomato],
            ..SearchFilters::default()
        };

        for restaurant in filter_restaurants(&catalog, "a", &filters) {
            assert_eq!(restaurant.platform, Platform::Zomato);
        }
        for item in filter_menu_items(&catalog, "a", &filters) {
            assert_eq!(item.platform, Platform::Zomato);
        }
    }

    #[test]
    fn cuisine_filter_requires_an_overlap() {
        let catalog = catalog();
        let filters = SearchFilters {
            cuisines: vec!["Indian".to_string()],
            ..SearchFilters::default()
        };

        let results = filter_restaurants(&catalog, "a", &filters);
        assert!(!results.is_empty());
        for restaurant in results {
            assert!(restaurant.cuisine.iter().any(|c| c == "Indian"));
        }
    }

    #[test]
    fn price_range_is_inclusive() {
        let catalog = catalog();
        let filters = SearchFilters {
            price_range: (250.0, 300.0),
            ..SearchFilters::default()
        };

        let results = filter_menu_items(&catalog, "pizza", &filters);
        let ids: Vec<&str> = results.iter().map(|i| i.id.as_str()).collect();
        // Both boundary prices stay in; 380 falls out.
        assert!(ids.contains(&"m1"));
        assert!(ids.contains(&"m2"));
        assert!(!ids.contains(&"m3"));
    }

    #[test]
    fn price_low_sorts_menu_items_non_decreasing() {
        let catalog = catalog();
        let mut items = filter_menu_items(&catalog, "a", &SearchFilters::default());
        sort_menu_items(&mut items, SortBy::PriceLow);
        for pair in items.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn price_high_sorts_restaurants_by_fee_non_increasing() {
        let catalog = catalog();
        let mut restaurants = filter_restaurants(&catalog, "a", &SearchFilters::default());
        sort_restaurants(&mut restaurants, SortBy::PriceHigh);
        for pair in restaurants.windows(2) {
            assert!(pair[0].delivery_fee >= pair[1].delivery_fee);
        }
    }

    #[test]
    fn rating_sort_treats_missing_rating_as_zero() {
        let catalog = catalog();
        let mut items = filter_menu_items(&catalog, "a", &SearchFilters::default());
        sort_menu_items(&mut items, SortBy::Rating);
        for pair in items.windows(2) {
            assert!(pair[0].rating.unwrap_or(0.0) >= pair[1].rating.unwrap_or(0.0));
        }
        // Unrated dishes sink to the bottom.
        assert!(items.last().unwrap().rating.is_none());
    }

    #[test]
    fn delivery_time_sort_orders_restaurants_by_leading_minutes() {
        let catalog = catalog();
        let mut restaurants = filter_restaurants(&catalog, "a", &SearchFilters::default());
        sort_restaurants(&mut restaurants, SortBy::DeliveryTime);
        for pair in restaurants.windows(2) {
            assert!(
                pair[0].lead_delivery_minutes().unwrap_or(u32::MAX)
                    <= pair[1].lead_delivery_minutes().unwrap_or(u32::MAX)
            );
        }
    }

    #[test]
    fn delivery_time_sort_leaves_menu_items_alone() {
        let catalog = catalog();
        let mut items = filter_menu_items(&catalog, "pizza", &SearchFilters::default());
        let before: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        sort_menu_items(&mut items, SortBy::DeliveryTime);
        let after: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn comparison_needs_at_least_two_platforms() {
        let catalog = catalog();
        assert!(price_comparison(&catalog, "Tandoori Chicken").is_none());
        assert!(price_comparison(&catalog, "Nonexistent Dish").is_none());
    }

    #[test]
    fn margherita_comparison_aggregates() {
        // 250 + 30 on Zomato, 300 + 20 on Swiggy.
        let catalog = catalog();
        let comparison = price_comparison(&catalog, "margherita pizza").unwrap();

        assert_eq!(comparison.platforms.len(), 2);
        assert!((comparison.lowest_price - 280.0).abs() < 1e-9);
        assert!((comparison.highest_price - 330.0).abs() < 1e-9);
        assert!((comparison.average_price - 305.0).abs() < 1e-9);
        for quote in &comparison.platforms {
            assert!(comparison.lowest_price <= quote.total_cost);
            assert!(quote.total_cost <= comparison.highest_price);
        }
    }

    #[test]
    fn comparison_rating_falls_back_to_restaurant_then_default() {
        let catalog = catalog();
        let comparison = price_comparison(&catalog, "Margherita Pizza").unwrap();

        let zomato = comparison
            .platforms
            .iter()
            .find(|q| q.platform == Platform::Zomato)
            .unwrap();
        let swiggy = comparison
            .platforms
            .iter()
            .find(|q| q.platform == Platform::Swiggy)
            .unwrap();

        // m1 carries its own rating; m2 borrows Napoli Kitchen's.
        assert!((zomato.rating - 4.4).abs() < 1e-9);
        assert!((swiggy.rating - 4.2).abs() < 1e-9);
    }

    #[test]
    fn comparison_survives_a_missing_restaurant() {
        let mut catalog = catalog();
        catalog.restaurants.retain(|r| r.id != "r2");

        let comparison = price_comparison(&catalog, "Margherita Pizza").unwrap();
        let orphan = comparison
            .platforms
            .iter()
            .find(|q| q.platform == Platform::Swiggy)
            .unwrap();

        assert_eq!(orphan.restaurant_name, "Unknown");
        assert_eq!(orphan.delivery_fee, 0.0);
        assert_eq!(orphan.total_cost, 300.0);
        assert_eq!(orphan.delivery_time, FALLBACK_DELIVERY_TIME);
        assert!((orphan.rating - FALLBACK_RATING).abs() < 1e-9);
    }

    #[test]
    fn trending_is_sorted_by_popularity() {
        let catalog = catalog();
        let trending = trending(&catalog);
        for pair in trending.windows(2) {
            assert!(pair[0].popularity >= pair[1].popularity);
        }
    }
}
