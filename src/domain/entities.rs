use time::OffsetDateTime;

/// Identifier for listings returned by the listing store.
pub type ListingId = String;

/// One market record as served by the remote listing store.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub source: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub currency: String,
    pub mileage: Option<f64>,
    pub transmission: String,
    pub color: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub seller_type: Option<String>,
    /// Upstream rating, conventionally 0-10.
    pub investment_score: Option<f64>,
    /// Upstream fair-value estimate in `currency`.
    pub market_value: Option<f64>,
    /// Qualitative scarcity tag such as "high".
    pub rarity_score: Option<String>,
    pub description: Option<String>,
    pub images_count: u32,
    pub first_seen: OffsetDateTime,
    pub status: String,
    pub url: String,
}

impl Listing {
    /// "City, Country" with whichever parts are present.
    pub fn location_label(&self) -> Option<String> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city.to_string()),
            (None, Some(country)) => Some(country.to_string()),
            (None, None) => None,
        }
    }
}

pub const SAMPLE_LISTING_ID: &str = "1";

/// The record shown in place of live data when the listing store cannot be reached.
pub fn sample_listing(first_seen: OffsetDateTime) -> Listing {
    Listing {
        id: SAMPLE_LISTING_ID.to_string(),
        source: "autoscout24".to_string(),
        model: "997.1 Carrera S".to_string(),
        year: 2007,
        price: 52_900.0,
        currency: "EUR".to_string(),
        mileage: Some(89_500.0),
        transmission: "manual".to_string(),
        color: Some("Guards Red".to_string()),
        country: Some("DE".to_string()),
        city: Some("Munich".to_string()),
        seller_type: Some("dealer".to_string()),
        investment_score: Some(9.2),
        market_value: Some(61_000.0),
        rarity_score: Some("high".to_string()),
        description: Some("Excellent condition 997.1 Carrera S".to_string()),
        images_count: 15,
        first_seen,
        status: "active".to_string(),
        url: "https://autoscout24.de/listing/123456".to_string(),
    }
}

/// Where the listings currently held by the store came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataProvenance {
    #[default]
    NotLoaded,
    Live,
    Sample,
}

impl DataProvenance {
    pub fn label(&self) -> &'static str {
        match self {
            DataProvenance::NotLoaded => "Not loaded",
            DataProvenance::Live => "Live data",
            DataProvenance::Sample => "Sample data",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, DataProvenance::Live)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use time::OffsetDateTime;

    use super::{sample_listing, Listing};

    /// A listing with the given id, price and optional market value / score.
    pub fn listing(
        id: &str,
        price: f64,
        market_value: Option<f64>,
        investment_score: Option<f64>,
    ) -> Listing {
        Listing {
            id: id.to_string(),
            price,
            market_value,
            investment_score,
            ..sample_listing(OffsetDateTime::UNIX_EPOCH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_listing_is_active_with_fixed_id() {
        let listing = sample_listing(OffsetDateTime::now_utc());
        assert_eq!(listing.id, "1");
        assert_eq!(listing.status, "active");
        assert_eq!(listing.transmission, "manual");
    }

    #[test]
    fn location_label_joins_available_parts() {
        let mut listing = sample_listing(OffsetDateTime::UNIX_EPOCH);
        assert_eq!(listing.location_label().as_deref(), Some("Munich, DE"));

        listing.country = None;
        assert_eq!(listing.location_label().as_deref(), Some("Munich"));

        listing.city = None;
        assert_eq!(listing.location_label(), None);
    }
}
