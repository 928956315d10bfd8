use std::collections::HashSet;

use super::entities::ListingId;

/// Bookmarked listing ids for the current session.
///
/// Ids are kept even when the listing they point at drops out of a later load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Watchlist {
    ids: HashSet<ListingId>,
}

impl Watchlist {
    /// Returns `true` if the id was not already bookmarked.
    pub fn add(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Returns `true` if the id was bookmarked.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership and returns whether the id is now bookmarked.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingId> {
        self.ids.iter()
    }
}
