use time::OffsetDateTime;

use super::entities::{DataProvenance, Listing};
use super::metrics::{AggregateMetrics, ListingMetrics};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewTag {
    #[default]
    Opportunities,
    Watchlist,
    Market,
}

impl ViewTag {
    pub const ALL: [ViewTag; 3] = [ViewTag::Opportunities, ViewTag::Watchlist, ViewTag::Market];

    pub fn slug(&self) -> &'static str {
        match self {
            ViewTag::Opportunities => "opportunities",
            ViewTag::Watchlist => "watchlist",
            ViewTag::Market => "market",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewTag::Opportunities => "💎 Investment Opportunities",
            ViewTag::Watchlist => "❤️ Watchlist",
            ViewTag::Market => "📊 Market Data",
        }
    }
}

/// Which view is on screen. Every transition is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    active: ViewTag,
}

impl ViewController {
    pub fn active(&self) -> ViewTag {
        self.active
    }

    pub fn select_view(&mut self, tag: ViewTag) {
        self.active = tag;
    }
}

/// A listing paired with the figures derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingCard {
    pub listing: Listing,
    pub metrics: ListingMetrics,
    pub watched: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpportunitiesView {
    pub cards: Vec<ListingCard>,
    pub aggregates: AggregateMetrics,
    pub is_loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WatchlistView {
    pub cards: Vec<ListingCard>,
    /// Bookmarks whose listing is not part of the current load.
    pub missing_count: usize,
}

impl WatchlistView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.missing_count == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketView {
    pub aggregates: AggregateMetrics,
    pub watchlist_size: usize,
    pub provenance: DataProvenance,
    pub last_error: Option<String>,
    pub last_updated: OffsetDateTime,
    pub is_loading: bool,
}
