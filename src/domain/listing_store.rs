use std::fmt::Display;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::entities::{sample_listing, DataProvenance, Listing};

/// Stamp handed out when a load begins. Only the most recent one is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Live listings replaced the held sequence.
    Live { count: usize },
    /// The fetch failed and the sample record was substituted.
    Fallback { reason: String },
    /// A newer load was issued after this one; the result was discarded.
    Stale,
}

/// The listings currently held by the client and the state of the last load.
#[derive(Clone, Debug)]
pub struct ListingStore {
    listings: Vec<Listing>,
    last_updated: OffsetDateTime,
    is_loading: bool,
    provenance: DataProvenance,
    last_error: Option<String>,
    generation: u64,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new(OffsetDateTime::now_utc())
    }
}

impl ListingStore {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            listings: Vec::new(),
            last_updated: now,
            is_loading: false,
            provenance: DataProvenance::NotLoaded,
            last_error: None,
            generation: 0,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn last_updated(&self) -> OffsetDateTime {
        self.last_updated
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn provenance(&self) -> DataProvenance {
        self.provenance
    }

    /// Why the most recently applied load fell back to sample data.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Marks a load as in flight. Earlier tickets become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.is_loading = true;
        debug!(generation = self.generation, "listing load started");
        LoadTicket(self.generation)
    }

    pub fn complete_load<E>(&mut self, ticket: LoadTicket, result: Result<Vec<Listing>, E>) -> LoadOutcome
    where
        E: Display,
    {
        self.complete_load_at(ticket, result, OffsetDateTime::now_utc())
    }

    /// Applies a finished fetch if `ticket` is still the latest one.
    ///
    /// A failed fetch never surfaces as an error: the held sequence becomes
    /// the single sample listing and the reason is kept for the status view.
    pub fn complete_load_at<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Listing>, E>,
        now: OffsetDateTime,
    ) -> LoadOutcome
    where
        E: Display,
    {
        if ticket.0 != self.generation {
            debug!(
                generation = ticket.0,
                latest = self.generation,
                "discarding stale listing load"
            );
            return LoadOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(listings) => {
                let count = listings.len();
                self.listings = listings;
                self.last_updated = now;
                self.provenance = DataProvenance::Live;
                self.last_error = None;
                info!(count, generation = ticket.0, "loaded live listings");
                LoadOutcome::Live { count }
            }
            Err(err) => {
                let reason = err.to_string();
                warn!(
                    error = %reason,
                    generation = ticket.0,
                    "error loading listings, showing sample data"
                );
                self.listings = vec![sample_listing(now)];
                self.provenance = DataProvenance::Sample;
                self.last_error = Some(reason.clone());
                LoadOutcome::Fallback { reason }
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::listing;

    fn store() -> ListingStore {
        ListingStore::new(OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn begin_load_sets_loading_before_the_outcome_is_known() {
        let mut store = store();
        assert!(!store.is_loading());
        let _ticket = store.begin_load();
        assert!(store.is_loading());
        assert_eq!(store.provenance(), DataProvenance::NotLoaded);
    }

    #[test]
    fn successful_load_replaces_listings_and_timestamp() {
        let mut store = store();
        let now = OffsetDateTime::now_utc();
        let ticket = store.begin_load();
        let outcome = store.complete_load_at::<String>(
            ticket,
            Ok(vec![listing("a", 1.0, None, None), listing("b", 2.0, None, None)]),
            now,
        );

        assert_eq!(outcome, LoadOutcome::Live { count: 2 });
        assert_eq!(store.listings().len(), 2);
        assert_eq!(store.last_updated(), now);
        assert!(!store.is_loading());
        assert_eq!(store.provenance(), DataProvenance::Live);
        assert!(store.find("b").is_some());
    }

    #[test]
    fn failed_load_falls_back_to_the_sample_listing() {
        let mut store = store();
        let ticket = store.begin_load();
        let outcome = store.complete_load(ticket, Err::<Vec<Listing>, _>("status 500"));

        assert!(matches!(outcome, LoadOutcome::Fallback { .. }));
        assert_eq!(store.listings().len(), 1);
        assert_eq!(store.listings()[0].id, "1");
        assert_eq!(store.listings()[0].status, "active");
        assert!(!store.is_loading());
        assert_eq!(store.provenance(), DataProvenance::Sample);
        assert_eq!(store.last_error(), Some("status 500"));
        assert_eq!(store.last_updated(), OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn empty_successful_load_yields_no_listings() {
        let mut store = store();
        let ticket = store.begin_load();
        store.complete_load::<String>(ticket, Ok(Vec::new()));
        assert!(store.listings().is_empty());
        assert_eq!(store.provenance(), DataProvenance::Live);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut store = store();
        let first = store.begin_load();
        let second = store.begin_load();

        let newer = store.complete_load::<String>(second, Ok(vec![listing("new", 1.0, None, None)]));
        assert_eq!(newer, LoadOutcome::Live { count: 1 });

        let older = store.complete_load::<String>(first, Ok(vec![listing("old", 1.0, None, None)]));
        assert_eq!(older, LoadOutcome::Stale);
        assert_eq!(store.listings()[0].id, "new");
    }

    #[test]
    fn loading_stays_set_until_the_latest_load_completes() {
        let mut store = store();
        let first = store.begin_load();
        let second = store.begin_load();

        store.complete_load(first, Err::<Vec<Listing>, _>("timeout"));
        assert!(store.is_loading());
        assert_eq!(store.provenance(), DataProvenance::NotLoaded);

        store.complete_load::<String>(second, Ok(Vec::new()));
        assert!(!store.is_loading());
        assert_eq!(second.generation(), 2);
    }
}
