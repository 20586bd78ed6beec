use crate::messages::{SearchResultsReady, SearchStarted};
use actix::prelude::*;
use colored::Color;
use common::logger::Logger;
use common::types::comparison::PriceComparison;

/// Renders engine notifications on the terminal. Subscribed to the search
/// engine as its results recipient.
pub struct ConsoleUi {
    pub logger: Logger,
}

impl ConsoleUi {
    pub fn new() -> Self {
        ConsoleUi {
            logger: Logger::new("Console", Color::White),
        }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        ConsoleUi::new()
    }
}

impl Actor for ConsoleUi {
    type Context = Context<Self>;
}

impl Handler<SearchStarted> for ConsoleUi {
    type Result = ();

    fn handle(&mut self, msg: SearchStarted, _ctx: &mut Self::Context) {
        self.logger
            .info(format!("Searching for '{}'...", msg.query.trim()));
    }
}

impl Handler<SearchResultsReady> for ConsoleUi {
    type Result = ();

    fn handle(&mut self, msg: SearchResultsReady, _ctx: &mut Self::Context) {
        if msg.total_results == 0 {
            self.logger
                .warn(format!("No results for '{}'", msg.query.trim()));
            return;
        }

        self.logger.success(format!(
            "{} results for '{}' ({} restaurants, {} dishes)",
            msg.total_results,
            msg.query.trim(),
            msg.restaurants.len(),
            msg.menu_items.len()
        ));

        for restaurant in &msg.restaurants {
            self.logger.info(format!(
                "  [{}] {} | {} | ★{} | {} | fee ₹{}",
                restaurant.platform,
                restaurant.name,
                restaurant.cuisine.join("/"),
                restaurant.rating,
                restaurant.delivery_time,
                restaurant.delivery_fee
            ));
        }
        for item in &msg.menu_items {
            self.logger.info(format!(
                "  [{}] {} | ₹{} ({}){}",
                item.platform,
                item.name,
                item.price,
                item.category,
                if item.is_veg { " 🌱" } else { "" }
            ));
        }
    }
}

/// Comparison table printer used by the command loop; not actor state.
pub fn render_comparison(logger: &Logger, comparison: &PriceComparison) {
    logger.success(format!(
        "Price comparison for '{}' across {} platforms",
        comparison.item_name,
        comparison.platforms.len()
    ));
    for quote in &comparison.platforms {
        logger.info(format!(
            "  {} | {} | item ₹{} + fee ₹{} = ₹{} | {} | ★{}",
            quote.platform,
            quote.restaurant_name,
            quote.price,
            quote.delivery_fee,
            quote.total_cost,
            quote.delivery_time,
            quote.rating
        ));
    }
    logger.info(format!(
        "  lowest ₹{} | highest ₹{} | average ₹{:.2}",
        comparison.lowest_price, comparison.highest_price, comparison.average_price
    ));
}
