use std::fmt::Display;

use time::OffsetDateTime;

use super::entities::{DataProvenance, Listing};
use super::listing_store::{ListingStore, LoadOutcome, LoadTicket};
use super::metrics::{AggregateMetrics, ListingMetrics};
use super::view::{ListingCard, MarketView, OpportunitiesView, ViewController, ViewTag, WatchlistView};
use super::watchlist::Watchlist;

/// Session state shared by every page. Mutated only through the methods below;
/// pages read it through the accessors and the derived views.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    listings: ListingStore,
    watchlist: Watchlist,
    view: ViewController,
    session_started: bool,
}

impl AppState {
    /// Issues the initial load. Only the first call in a session returns a ticket.
    pub fn start_session(&mut self) -> Option<LoadTicket> {
        if self.session_started {
            return None;
        }
        self.session_started = true;
        Some(self.listings.begin_load())
    }

    pub fn begin_refresh(&mut self) -> LoadTicket {
        self.listings.begin_load()
    }

    pub fn finish_load<E>(&mut self, ticket: LoadTicket, result: Result<Vec<Listing>, E>) -> LoadOutcome
    where
        E: Display,
    {
        self.listings.complete_load(ticket, result)
    }

    /// Returns whether the listing is bookmarked afterwards.
    pub fn toggle_watch(&mut self, id: &str) -> bool {
        self.watchlist.toggle(id)
    }

    pub fn select_view(&mut self, tag: ViewTag) {
        self.view.select_view(tag);
    }

    pub fn active_view(&self) -> ViewTag {
        self.view.active()
    }

    pub fn provenance(&self) -> DataProvenance {
        self.listings.provenance()
    }

    pub fn is_loading(&self) -> bool {
        self.listings.is_loading()
    }

    pub fn last_updated(&self) -> OffsetDateTime {
        self.listings.last_updated()
    }

    pub fn opportunities_view(&self, now: OffsetDateTime) -> OpportunitiesView {
        let listings = self.listings.listings();
        OpportunitiesView {
            cards: listings.iter().map(|listing| self.card(listing)).collect(),
            aggregates: AggregateMetrics::for_listings(listings, now),
            is_loading: self.listings.is_loading(),
        }
    }

    pub fn watchlist_view(&self) -> WatchlistView {
        if self.watchlist.is_empty() {
            return WatchlistView {
                cards: Vec::new(),
                missing_count: 0,
            };
        }
        let cards: Vec<ListingCard> = self
            .listings
            .listings()
            .iter()
            .filter(|listing| self.watchlist.contains(&listing.id))
            .map(|listing| self.card(listing))
            .collect();
        let missing_count = self
            .watchlist
            .iter()
            .filter(|id| self.listings.find(id).is_none())
            .count();
        WatchlistView {
            cards,
            missing_count,
        }
    }

    pub fn market_view(&self, now: OffsetDateTime) -> MarketView {
        MarketView {
            aggregates: AggregateMetrics::for_listings(self.listings.listings(), now),
            watchlist_size: self.watchlist.len(),
            provenance: self.listings.provenance(),
            last_error: self.listings.last_error().map(str::to_string),
            last_updated: self.listings.last_updated(),
            is_loading: self.listings.is_loading(),
        }
    }

    fn card(&self, listing: &Listing) -> ListingCard {
        ListingCard {
            listing: listing.clone(),
            metrics: ListingMetrics::for_listing(listing),
            watched: self.watchlist.contains(&listing.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::listing;

    fn loaded(listings: Vec<Listing>) -> AppState {
        let mut state = AppState::default();
        let ticket = state.start_session().expect("first session start issues a load");
        state.finish_load::<String>(ticket, Ok(listings));
        state
    }

    #[test]
    fn session_start_issues_exactly_one_load() {
        let mut state = AppState::default();
        assert!(state.start_session().is_some());
        assert!(state.is_loading());
        assert!(state.start_session().is_none());
    }

    #[test]
    fn failed_initial_load_shows_one_sample_listing() {
        let mut state = AppState::default();
        let ticket = state.start_session().unwrap();
        state.finish_load(ticket, Err::<Vec<Listing>, _>("listing store answered with status 502"));

        let view = state.opportunities_view(OffsetDateTime::now_utc());
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].listing.id, "1");
        assert_eq!(view.cards[0].listing.status, "active");

        let market = state.market_view(OffsetDateTime::now_utc());
        assert_eq!(market.provenance, DataProvenance::Sample);
        assert!(market.last_error.is_some());
    }

    #[test]
    fn empty_load_has_zero_aggregates() {
        let state = loaded(Vec::new());
        let view = state.opportunities_view(OffsetDateTime::now_utc());
        assert!(view.cards.is_empty());
        assert_eq!(view.aggregates.average_price, 0.0);
        assert_eq!(view.aggregates.high_score_count, 0);
    }

    #[test]
    fn watchlist_view_reuses_opportunity_metrics() {
        let mut state = loaded(vec![
            listing("a", 52_900.0, Some(61_000.0), Some(9.2)),
            listing("b", 70_000.0, Some(65_000.0), Some(7.4)),
        ]);
        assert!(state.toggle_watch("a"));
        state.select_view(ViewTag::Watchlist);
        assert_eq!(state.active_view(), ViewTag::Watchlist);

        let watchlist = state.watchlist_view();
        assert_eq!(watchlist.cards.len(), 1);
        assert_eq!(watchlist.missing_count, 0);

        let opportunities = state.opportunities_view(OffsetDateTime::now_utc());
        let from_opportunities = opportunities
            .cards
            .iter()
            .find(|card| card.listing.id == "a")
            .unwrap();
        assert_eq!(watchlist.cards[0], *from_opportunities);
        assert!(watchlist.cards[0].watched);
    }

    #[test]
    fn bookmarks_survive_listings_dropping_out() {
        let mut state = loaded(vec![listing("a", 1.0, None, None)]);
        state.toggle_watch("a");
        state.toggle_watch("gone");

        let ticket = state.begin_refresh();
        state.finish_load::<String>(ticket, Ok(vec![listing("b", 1.0, None, None)]));

        let view = state.watchlist_view();
        assert!(view.cards.is_empty());
        assert_eq!(view.missing_count, 2);
        assert!(!view.is_empty());
    }

    #[test]
    fn market_view_counts_bookmarks_and_listings() {
        let mut state = loaded(vec![
            listing("a", 40_000.0, None, Some(8.6)),
            listing("b", 60_000.0, None, Some(6.0)),
        ]);
        state.toggle_watch("b");

        let market = state.market_view(OffsetDateTime::now_utc());
        assert_eq!(market.aggregates.total_listings, 2);
        assert_eq!(market.aggregates.average_price, 50_000.0);
        assert_eq!(market.aggregates.high_score_count, 1);
        assert_eq!(market.watchlist_size, 1);
        assert!(market.provenance.is_live());
        assert!(!market.is_loading);
    }
}
