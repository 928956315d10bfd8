//! Network access to the remote listing store.

pub mod listings;

pub use listings::{ListingsClient, ListingsClientError};
