use common::types::catalog::{FoodRecommendation, MenuItem, Restaurant};
use common::types::location::Location;
use common::types::platform::Platform;

/// The static dataset the app runs against: restaurant and menu listings
/// across the four platforms, trending dishes, and the popular-cities list
/// for the manual location picker. Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub recommendations: Vec<FoodRecommendation>,
    pub cities: Vec<Location>,
}

impl Catalog {
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Sample dataset standing in for real platform integrations.
    pub fn fixture() -> Self {
        Catalog {
            restaurants: vec![
                restaurant(
                    "r1",
                    "Pizza Palace",
                    &["Italian", "Fast Food"],
                    4.5,
                    "25-30 mins",
                    30.0,
                    200.0,
                    "12 MG Road, Connaught Place, New Delhi",
                    Platform::Zomato,
                ),
                restaurant(
                    "r2",
                    "Napoli Kitchen",
                    &["Italian"],
                    4.2,
                    "30-35 mins",
                    20.0,
                    150.0,
                    "45 Brigade Road, Bangalore",
                    Platform::Swiggy,
                ),
                restaurant(
                    "r3",
                    "Biryani House",
                    &["Indian", "Mughlai"],
                    4.6,
                    "20-25 mins",
                    25.0,
                    100.0,
                    "8 Charminar Road, Hyderabad",
                    Platform::UberEats,
                ),
                restaurant(
                    "r4",
                    "Spice Route",
                    &["Indian", "North Indian"],
                    4.1,
                    "35-40 mins",
                    15.0,
                    120.0,
                    "22 FC Road, Pune",
                    Platform::Foodpanda,
                ),
                restaurant(
                    "r5",
                    "Dragon Wok",
                    &["Chinese", "Asian"],
                    3.9,
                    "40-45 mins",
                    35.0,
                    180.0,
                    "3 Park Street, Kolkata",
                    Platform::Zomato,
                ),
                restaurant(
                    "r6",
                    "Burger Barn",
                    &["American", "Fast Food"],
                    4.3,
                    "15-20 mins",
                    10.0,
                    80.0,
                    "77 Linking Road, Mumbai",
                    Platform::Swiggy,
                ),
                restaurant(
                    "r7",
                    "Tandoori Nights",
                    &["Indian"],
                    4.4,
                    "28-33 mins",
                    22.0,
                    140.0,
                    "5 Anna Salai, Chennai",
                    Platform::UberEats,
                ),
                restaurant(
                    "r8",
                    "Green Bowl",
                    &["Healthy", "Salads"],
                    4.0,
                    "22-27 mins",
                    18.0,
                    90.0,
                    "19 Koregaon Park, Pune",
                    Platform::Foodpanda,
                ),
            ],
            menu_items: vec![
                MenuItem {
                    id: "m1".to_string(),
                    name: "Margherita Pizza".to_string(),
                    description: "Classic delight with 100% real mozzarella cheese".to_string(),
                    image: "margherita-zomato.jpg".to_string(),
                    price: 250.0,
                    original_price: Some(290.0),
                    category: "Pizza".to_string(),
                    is_veg: true,
                    rating: Some(4.4),
                    restaurant_id: "r1".to_string(),
                    platform: Platform::Zomato,
                },
                MenuItem {
                    id: "m2".to_string(),
                    name: "Margherita Pizza".to_string(),
                    description: "Wood-fired base with basil and fresh mozzarella".to_string(),
                    image: "margherita-swiggy.jpg".to_string(),
                    price: 300.0,
                    original_price: None,
                    category: "Pizza".to_string(),
                    is_veg: true,
                    rating: None,
                    restaurant_id: "r2".to_string(),
                    platform: Platform::Swiggy,
                },
                menu_item(
                    "m3",
                    "Farmhouse Pizza",
                    "Loaded with capsicum, onion, tomato and mushroom",
                    380.0,
                    "Pizza",
                    true,
                    Some(4.3),
                    "r1",
                    Platform::Zomato,
                ),
                menu_item(
                    "m4",
                    "Chicken Biryani",
                    "Fragrant basmati rice layered with spiced chicken",
                    320.0,
                    "Biryani",
                    false,
                    Some(4.7),
                    "r3",
                    Platform::UberEats,
                ),
                menu_item(
                    "m5",
                    "Chicken Biryani",
                    "Dum-cooked biryani with saffron and fried onions",
                    280.0,
                    "Biryani",
                    false,
                    None,
                    "r4",
                    Platform::Foodpanda,
                ),
                menu_item(
                    "m6",
                    "Veg Biryani",
                    "Seasonal vegetables and basmati rice with raita",
                    240.0,
                    "Biryani",
                    true,
                    Some(4.2),
                    "r3",
                    Platform::UberEats,
                ),
                menu_item(
                    "m7",
                    "Paneer Butter Masala",
                    "Cottage cheese simmered in creamy tomato gravy",
                    260.0,
                    "Curry",
                    true,
                    Some(4.5),
                    "r4",
                    Platform::Foodpanda,
                ),
                menu_item(
                    "m8",
                    "Hakka Noodles",
                    "Stir-fried noodles with crunchy vegetables",
                    180.0,
                    "Chinese",
                    true,
                    None,
                    "r5",
                    Platform::Zomato,
                ),
                menu_item(
                    "m9",
                    "Spring Rolls",
                    "Crispy rolls stuffed with cabbage and glass noodles",
                    150.0,
                    "Chinese",
                    true,
                    Some(4.0),
                    "r5",
                    Platform::Zomato,
                ),
                menu_item(
                    "m10",
                    "Classic Cheeseburger",
                    "Grilled patty, cheddar and house sauce",
                    190.0,
                    "Burgers",
                    false,
                    Some(4.4),
                    "r6",
                    Platform::Swiggy,
                ),
                menu_item(
                    "m11",
                    "Peri Peri Fries",
                    "Fries tossed in peri peri seasoning",
                    120.0,
                    "Sides",
                    true,
                    None,
                    "r6",
                    Platform::Swiggy,
                ),
                menu_item(
                    "m12",
                    "Tandoori Chicken",
                    "Half chicken marinated overnight in yogurt and spices",
                    350.0,
                    "Grill",
                    false,
                    Some(4.6),
                    "r7",
                    Platform::UberEats,
                ),
                menu_item(
                    "m13",
                    "Quinoa Salad Bowl",
                    "Quinoa, roasted veggies and lemon dressing",
                    270.0,
                    "Salads",
                    true,
                    Some(4.1),
                    "r8",
                    Platform::Foodpanda,
                ),
                menu_item(
                    "m14",
                    "Butter Naan",
                    "Soft naan brushed with butter",
                    40.0,
                    "Breads",
                    true,
                    None,
                    "r4",
                    Platform::Foodpanda,
                ),
            ],
            recommendations: vec![
                recommendation(
                    "f1",
                    "Chicken Biryani",
                    "Biryani",
                    95,
                    300.0,
                    "The most ordered dish across every platform",
                    &["spicy", "rice", "bestseller"],
                ),
                recommendation(
                    "f2",
                    "Margherita Pizza",
                    "Pizza",
                    88,
                    275.0,
                    "A reliable classic, widely compared across platforms",
                    &["cheese", "veg", "classic"],
                ),
                recommendation(
                    "f3",
                    "Classic Cheeseburger",
                    "Burgers",
                    81,
                    190.0,
                    "Quick comfort food with the fastest delivery times",
                    &["fast-food", "snack"],
                ),
                recommendation(
                    "f4",
                    "Paneer Butter Masala",
                    "Curry",
                    76,
                    260.0,
                    "North Indian staple, best paired with butter naan",
                    &["veg", "curry", "creamy"],
                ),
                recommendation(
                    "f5",
                    "Hakka Noodles",
                    "Chinese",
                    64,
                    180.0,
                    "Late-night favorite from Indo-Chinese kitchens",
                    &["noodles", "wok"],
                ),
            ],
            cities: vec![
                Location::city_state("Delhi", "Delhi"),
                Location::city_state("Mumbai", "Maharashtra"),
                Location::city_state("Bangalore", "Karnataka"),
                Location::city_state("Pune", "Maharashtra"),
                Location::city_state("Hyderabad", "Telangana"),
                Location::city_state("Chennai", "Tamil Nadu"),
                Location::city_state("Kolkata", "West Bengal"),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    cuisine: &[&str],
    rating: f64,
    delivery_time: &str,
    delivery_fee: f64,
    min_order: f64,
    address: &str,
    platform: Platform,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("{id}.jpg"),
        cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
        rating,
        delivery_time: delivery_time.to_string(),
        delivery_fee,
        min_order,
        address: address.to_string(),
        platform,
        is_available: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn menu_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    is_veg: bool,
    rating: Option<f64>,
    restaurant_id: &str,
    platform: Platform,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: format!("{id}.jpg"),
        price,
        original_price: None,
        category: category.to_string(),
        is_veg,
        rating,
        restaurant_id: restaurant_id.to_string(),
        platform,
    }
}

fn recommendation(
    id: &str,
    name: &str,
    category: &str,
    popularity: u8,
    avg_price: f64,
    description: &str,
    tags: &[&str],
) -> FoodRecommendation {
    FoodRecommendation {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("{id}.jpg"),
        category: category.to_string(),
        popularity,
        avg_price,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_covers_all_platforms() {
        let catalog = Catalog::fixture();
        for platform in Platform::ALL {
            assert!(
                catalog.restaurants.iter().any(|r| r.platform == platform),
                "no restaurant for {platform}"
            );
        }
    }

    #[test]
    fn every_menu_item_references_an_existing_restaurant() {
        let catalog = Catalog::fixture();
        for item in &catalog.menu_items {
            assert!(
                catalog.restaurant(&item.restaurant_id).is_some(),
                "{} points at missing restaurant {}",
                item.id,
                item.restaurant_id
            );
        }
    }

    #[test]
    fn restaurant_lookup_by_id() {
        let catalog = Catalog::fixture();
        assert_eq!(catalog.restaurant("r1").unwrap().name, "Pizza Palace");
        assert!(catalog.restaurant("r999").is_none());
    }
}
