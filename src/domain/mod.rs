//! Listing data, derived metrics, bookmarks and view selection.

pub mod app_state;
pub mod entities;
pub mod listing_store;
pub mod metrics;
pub mod view;
pub mod watchlist;

pub use app_state::AppState;
pub use entities::{DataProvenance, Listing};
pub use listing_store::{LoadOutcome, LoadTicket};
pub use metrics::{score_bucket, AggregateMetrics, ScoreBucket};
pub use view::{ListingCard, ViewTag};
