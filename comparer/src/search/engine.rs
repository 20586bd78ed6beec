use crate::catalog::Catalog;
use crate::messages::{
    ComparePrices, GetResults, Search, SearchOutcome, SearchResultsReady, SearchStarted,
    SetFilters, SetSortBy,
};
use crate::search::query;
use actix::prelude::*;
use colored::Color;
use common::constants::SEARCH_DELAY_MILLIS;
use common::logger::Logger;
use common::types::filters::{SearchFilters, SortBy};
use std::sync::Arc;
use std::time::Duration;

/// The `SearchEngine` actor owns the user's filter/sort state and runs
/// queries against the catalog, simulating the latency of a real platform
/// round trip.
///
/// ## Responsibilities:
/// - Filter and sort restaurants and menu items for a free-text query.
/// - Tag every search with a monotonically increasing request id and drop
///   completions that are no longer the latest, so overlapping searches
///   cannot clobber newer results.
/// - Answer price-comparison requests synchronously from the catalog.
/// - Notify the subscriber when a search starts and when results land.
pub struct SearchEngine {
    /// Shared read-only catalog fixture.
    catalog: Arc<Catalog>,
    /// Current filter selections, applied to every search.
    filters: SearchFilters,
    /// Current sort order, applied to every search.
    sort_by: SortBy,
    /// Simulated round-trip latency.
    delay: Duration,
    /// Id handed to the most recent search; stale completions are discarded.
    latest_request: u64,
    /// Where results and loading notifications are delivered.
    subscriber: Option<Recipient<SearchResultsReady>>,
    /// Optional listener for the loading transition.
    started_subscriber: Option<Recipient<SearchStarted>>,
    /// Last outcome that was actually applied.
    results: SearchOutcome,
    /// Logger instance for engine events.
    logger: Logger,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        SearchEngine {
            catalog,
            filters: SearchFilters::default(),
            sort_by: SortBy::Relevance,
            delay: Duration::from_millis(SEARCH_DELAY_MILLIS),
            latest_request: 0,
            subscriber: None,
            started_subscriber: None,
            results: SearchOutcome::default(),
            logger: Logger::new("Search Engine", Color::Cyan),
        }
    }

    /// Deliver completed searches to `recipient`.
    pub fn with_subscriber(mut self, recipient: Recipient<SearchResultsReady>) -> Self {
        self.subscriber = Some(recipient);
        self
    }

    /// Also notify `recipient` when a search is accepted.
    pub fn with_started_subscriber(mut self, recipient: Recipient<SearchStarted>) -> Self {
        self.started_subscriber = Some(recipient);
        self
    }

    /// Override the simulated latency. Tests use short delays.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn run_query(&self, query: &str) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome {
                query: query.to_string(),
                ..SearchOutcome::default()
            };
        }

        let mut restaurants = query::filter_restaurants(&self.catalog, trimmed, &self.filters);
        let mut menu_items = query::filter_menu_items(&self.catalog, trimmed, &self.filters);
        query::sort_restaurants(&mut restaurants, self.sort_by);
        query::sort_menu_items(&mut menu_items, self.sort_by);

        SearchOutcome {
            query: query.to_string(),
            restaurants,
            menu_items,
            loading: false,
        }
    }
}

impl Actor for SearchEngine {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.info(format!(
            "Search engine ready: {} restaurants, {} menu items",
            self.catalog.restaurants.len(),
            self.catalog.menu_items.len()
        ));
    }
}

impl Handler<Search> for SearchEngine {
    type Result = ();

    /// Accepts the search, flags the engine as loading and schedules the
    /// evaluation after the simulated delay. The closure re-checks the
    /// request id before applying anything: a search issued later wins even
    /// if this one has not completed yet.
    fn handle(&mut self, msg: Search, ctx: &mut Self::Context) -> Self::Result {
        self.latest_request += 1;
        let request_id = self.latest_request;
        self.results.loading = true;

        self.logger
            .info(format!("Search #{} for '{}'", request_id, msg.query.trim()));
        if let Some(listener) = &self.started_subscriber {
            listener.do_send(SearchStarted {
                query: msg.query.clone(),
            });
        }

        ctx.run_later(self.delay, move |engine, _ctx| {
            if request_id != engine.latest_request {
                engine.logger.warn(format!(
                    "Dropping stale search #{} (latest is #{})",
                    request_id, engine.latest_request
                ));
                return;
            }

            let outcome = engine.run_query(&msg.query);
            engine.logger.info(format!(
                "Search #{} done: {} restaurants, {} menu items",
                request_id,
                outcome.restaurants.len(),
                outcome.menu_items.len()
            ));

            engine.results = outcome.clone();
            if let Some(subscriber) = &engine.subscriber {
                subscriber.do_send(SearchResultsReady {
                    total_results: outcome.restaurants.len() + outcome.menu_items.len(),
                    query: outcome.query,
                    restaurants: outcome.restaurants,
                    menu_items: outcome.menu_items,
                });
            }
        });
    }
}

impl Handler<SetFilters> for SearchEngine {
    type Result = ();

    fn handle(&mut self, msg: SetFilters, _ctx: &mut Self::Context) -> Self::Result {
        self.filters = msg.filters;
    }
}

impl Handler<SetSortBy> for SearchEngine {
    type Result = ();

    fn handle(&mut self, msg: SetSortBy, _ctx: &mut Self::Context) -> Self::Result {
        self.sort_by = msg.sort_by;
    }
}

impl Handler<ComparePrices> for SearchEngine {
    type Result = MessageResult<ComparePrices>;

    fn handle(&mut self, msg: ComparePrices, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(query::price_comparison(&self.catalog, &msg.item_name))
    }
}

impl Handler<GetResults> for SearchEngine {
    type Result = MessageResult<GetResults>;

    fn handle(&mut self, _msg: GetResults, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.results.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::platform::Platform;
    use ntest::timeout;
    use tokio::time::sleep;

    fn engine() -> SearchEngine {
        SearchEngine::new(Arc::new(Catalog::fixture())).with_delay(Duration::from_millis(50))
    }

    async fn settled_results(addr: &Addr<SearchEngine>) -> SearchOutcome {
        sleep(Duration::from_millis(150)).await;
        addr.send(GetResults).await.unwrap()
    }

    #[actix_rt::test]
    #[timeout(2000)]
    async fn blank_query_yields_empty_lists() {
        let addr = engine().start();
        addr.send(Search {
            query: "   ".to_string(),
        })
        .await
        .unwrap();

        let outcome = settled_results(&addr).await;
        assert!(outcome.restaurants.is_empty());
        assert!(outcome.menu_items.is_empty());
        assert!(!outcome.loading);
    }

    #[actix_rt::test]
    #[timeout(2000)]
    async fn search_applies_filters_and_sort() {
        let addr = engine().start();
        addr.send(SetFilters {
            filters: SearchFilters {
                platforms: vec![Platform::Zomato],
                ..SearchFilters::default()
            },
        })
        .await
        .unwrap();
        addr.send(SetSortBy {
            sort_by: SortBy::PriceLow,
        })
        .await
        .unwrap();
        addr.send(Search {
            query: "pizza".to_string(),
        })
        .await
        .unwrap();

        let outcome = settled_results(&addr).await;
        assert!(!outcome.menu_items.is_empty());
        for item in &outcome.menu_items {
            assert_eq!(item.platform, Platform::Zomato);
        }
        for pair in outcome.menu_items.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[actix_rt::test]
    #[timeout(2000)]
    async fn newer_search_supersedes_the_in_flight_one() {
        let addr = engine().start();
        addr.send(Search {
            query: "pizza".to_string(),
        })
        .await
        .unwrap();
        addr.send(Search {
            query: "biryani".to_string(),
        })
        .await
        .unwrap();

        let outcome = settled_results(&addr).await;
        assert_eq!(outcome.query, "biryani");
        assert!(outcome.menu_items.iter().all(|i| i.name.to_lowercase().contains("biryani")
            || i.description.to_lowercase().contains("biryani")
            || i.category.to_lowercase().contains("biryani")));
    }

    #[actix_rt::test]
    #[timeout(2000)]
    async fn subscriber_receives_results_once_per_applied_search() {
        use std::sync::Mutex;

        struct Collector {
            seen: Arc<Mutex<Vec<SearchResultsReady>>>,
        }
        impl Actor for Collector {
            type Context = Context<Self>;
        }
        impl Handler<SearchResultsReady> for Collector {
            type Result = ();
            fn handle(&mut self, msg: SearchResultsReady, _: &mut Self::Context) {
                self.seen.lock().unwrap().push(msg);
            }
        }

        let seen = Arc::new(Mutex::new(Vec::new()));
        let collector = Collector { seen: seen.clone() }.start();
        let addr = engine().with_subscriber(collector.recipient()).start();

        // The first search is superseded before its delay elapses.
        addr.send(Search {
            query: "pizza".to_string(),
        })
        .await
        .unwrap();
        addr.send(Search {
            query: "noodles".to_string(),
        })
        .await
        .unwrap();

        sleep(Duration::from_millis(200)).await;
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].query, "noodles");
        assert_eq!(
            seen[0].total_results,
            seen[0].restaurants.len() + seen[0].menu_items.len()
        );
    }

    #[actix_rt::test]
    #[timeout(2000)]
    async fn compare_prices_goes_through_the_actor() {
        let addr = engine().start();
        let comparison = addr
            .send(ComparePrices {
                item_name: "Margherita Pizza".to_string(),
            })
            .await
            .unwrap()
            .unwrap();
        assert!((comparison.lowest_price - 280.0).abs() < 1e-9);

        let none = addr
            .send(ComparePrices {
                item_name: "Butter Naan".to_string(),
            })
            .await
            .unwrap();
        assert!(none.is_none());
    }
}
