use actix::prelude::*;
use colored::Color;
use comparer::catalog::Catalog;
use comparer::console::{ConsoleUi, render_comparison};
use comparer::messages::{ComparePrices, Search, SetFilters, SetSortBy};
use comparer::search::engine::SearchEngine;
use comparer::search::query;
use comparer::services::address::{AddressService, format_address_for_display};
use comparer::services::geocode::MockGeocoder;
use comparer::services::location::{LocationService, SimulatedPositionProvider};
use comparer::services::store::FileStore;
use common::logger::Logger;
use common::types::filters::{SearchFilters, SortBy};
use common::types::platform::Platform;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;

const DATA_DIR: &str = ".comparer";

fn print_welcome(logger: &Logger) {
    logger.info("Cross-platform food price comparison");
    logger.info("Commands:");
    logger.info("  search <text>          free-text search");
    logger.info("  sort <order>           relevance | price-low | price-high | rating | delivery-time");
    logger.info("  platforms <a,b>        platform filter (empty arg clears)");
    logger.info("  compare <dish>         price comparison across platforms");
    logger.info("  trending               popular dishes");
    logger.info("  locate                 detect current location");
    logger.info("  watch | unwatch        continuous position updates");
    logger.info("  addresses              saved address book");
    logger.info("  save                   save the detected location");
    logger.info("  quit");
}

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("App", Color::Green);
    let catalog = Arc::new(Catalog::fixture());

    let ui = ConsoleUi::new().start();
    let engine = SearchEngine::new(catalog.clone())
        .with_subscriber(ui.clone().recipient())
        .with_started_subscriber(ui.recipient())
        .start();

    let mut addresses = AddressService::new(FileStore::new(DATA_DIR));
    // Simulated fix near Connaught Place, Delhi.
    let mut locations = LocationService::new(
        Arc::new(SimulatedPositionProvider::new(28.6139, 77.2090)),
        Arc::new(MockGeocoder::new()),
    );
    let mut filters = SearchFilters::default();
    let mut last_detected = None;

    print_welcome(&logger);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = ctrl_c() => {
                logger.info("Ctrl-C received, shutting down...");
                break;
            }
            line = lines.next_line() => match line? {
                Some(line) => line,
                None => break,
            },
        };

        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => {}
            "search" => {
                engine.do_send(Search {
                    query: rest.to_string(),
                });
            }
            "sort" => match SortBy::parse(rest) {
                Some(sort_by) => {
                    engine.do_send(SetSortBy { sort_by });
                    logger.info(format!("Sort order set to {rest}"));
                }
                None => logger.warn("Unknown sort order"),
            },
            "platforms" => {
                let selected: Vec<Platform> =
                    rest.split(',').filter_map(Platform::parse).collect();
                if !rest.is_empty() && selected.is_empty() {
                    logger.warn("No platform recognized; filter unchanged");
                } else {
                    filters.platforms = selected;
                    engine.do_send(SetFilters {
                        filters: filters.clone(),
                    });
                    logger.info(format!(
                        "Platform filter: {}",
                        if filters.platforms.is_empty() {
                            "all".to_string()
                        } else {
                            filters
                                .platforms
                                .iter()
                                .map(|p| p.to_string())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }
                    ));
                }
            }
            "compare" => {
                if rest.is_empty() {
                    logger.warn("Usage: compare <dish name>");
                    continue;
                }
                match engine
                    .send(ComparePrices {
                        item_name: rest.to_string(),
                    })
                    .await
                {
                    Ok(Some(comparison)) => render_comparison(&logger, &comparison),
                    Ok(None) => logger.warn(format!(
                        "'{rest}' is not listed on at least two platforms"
                    )),
                    Err(err) => logger.error(format!("Engine unavailable: {err}")),
                }
            }
            "trending" => {
                for recommendation in query::trending(&catalog) {
                    logger.info(format!(
                        "  {} ({}) | popularity {}, avg ₹{}",
                        recommendation.name,
                        recommendation.category,
                        recommendation.popularity,
                        recommendation.avg_price
                    ));
                }
            }
            "locate" => {
                logger.info("Detecting your location...");
                match locations.get_current_location().await {
                    Ok(result) => {
                        logger.success(format!(
                            "Detected via {} (±{}m): {}",
                            result.source,
                            result.accuracy,
                            format_address_for_display(&result.location, true)
                        ));
                        last_detected = Some(result.location);
                    }
                    Err(err) => logger.error(err.to_string()),
                }
            }
            "watch" => {
                let watch_logger = Logger::new("Watch", Color::Yellow);
                let error_logger = watch_logger.clone();
                match locations.watch_position(
                    Duration::from_secs(5),
                    move |fix| {
                        watch_logger.info(format!(
                            "{} fix (±{}m): {}, {}",
                            fix.source, fix.accuracy, fix.location.city, fix.location.state
                        ));
                    },
                    move |err| error_logger.error(err.to_string()),
                ) {
                    Ok(id) => logger.info(format!("Watch #{id} running; 'unwatch' stops it")),
                    Err(err) => logger.error(err.to_string()),
                }
            }
            "unwatch" => locations.clear_watch(),
            "addresses" => {
                let book = addresses.get_saved_addresses();
                if book.is_empty() {
                    logger.warn("No saved addresses yet; use 'save' after 'locate'");
                }
                for address in book {
                    logger.info(format!(
                        "  {}{} | {}",
                        address.label,
                        if address.is_default { " (default)" } else { "" },
                        format_address_for_display(&address.location, false)
                    ));
                }
            }
            "save" => match last_detected.clone() {
                Some(location) => {
                    let record = addresses.save_address(location, None, false);
                    logger.success(format!("Saved as '{}'", record.label));
                }
                None => logger.warn("Nothing detected yet; run 'locate' first"),
            },
            "quit" | "exit" => break,
            _ => logger.warn(format!("Unknown command '{command}'; try 'search pizza'")),
        }
    }

    locations.clear_watch();
    System::current().stop();
    Ok(())
}
