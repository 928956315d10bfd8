pub mod market;
pub mod opportunities;
pub mod watchlist;

pub use market::MarketPage;
pub use opportunities::OpportunitiesPage;
pub use watchlist::WatchlistPage;

/// Currency used for aggregate figures; the listing store only carries EUR prices.
pub const DISPLAY_CURRENCY: &str = "EUR";
