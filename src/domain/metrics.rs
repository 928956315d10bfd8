//! Derived numbers for listings. Everything here is pure.

use time::OffsetDateTime;

use super::entities::Listing;

/// Score at or above which a listing counts toward the "high score" KPI.
pub const DEFAULT_HIGH_SCORE_THRESHOLD: f64 = 8.5;

/// Market value minus asking price. A missing market value counts as zero.
pub fn potential_gain(listing: &Listing) -> f64 {
    listing.market_value.unwrap_or(0.0) - listing.price
}

/// Potential gain as a percentage of the asking price.
///
/// Returns `None` when the price is zero or the ratio is not finite.
pub fn roi_percentage(listing: &Listing) -> Option<f64> {
    if listing.price == 0.0 {
        return None;
    }
    let roi = potential_gain(listing) / listing.price * 100.0;
    roi.is_finite().then_some(roi)
}

/// One decimal place, or "N/A" when the ROI is undefined.
pub fn format_roi(roi: Option<f64>) -> String {
    match roi {
        Some(value) => format!("{value:.1}"),
        None => "N/A".to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoreBucket {
    Unknown,
    Low,
    Medium,
    MediumHigh,
    High,
}

impl ScoreBucket {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBucket::Unknown => "unknown",
            ScoreBucket::Low => "low",
            ScoreBucket::Medium => "medium",
            ScoreBucket::MediumHigh => "medium-high",
            ScoreBucket::High => "high",
        }
    }
}

/// Tier for an investment score. Lower bounds are inclusive.
pub fn score_bucket(score: Option<f64>) -> ScoreBucket {
    match score {
        Some(s) if !s.is_finite() => ScoreBucket::Unknown,
        Some(s) if s >= 9.0 => ScoreBucket::High,
        Some(s) if s >= 8.0 => ScoreBucket::MediumHigh,
        Some(s) if s >= 7.0 => ScoreBucket::Medium,
        Some(_) => ScoreBucket::Low,
        None => ScoreBucket::Unknown,
    }
}

/// Mean asking price, `0.0` for an empty slice.
pub fn average_price(listings: &[Listing]) -> f64 {
    if listings.is_empty() {
        return 0.0;
    }
    listings.iter().map(|listing| listing.price).sum::<f64>() / listings.len() as f64
}

pub fn high_score_count(listings: &[Listing], threshold: f64) -> usize {
    listings
        .iter()
        .filter(|listing| {
            listing
                .investment_score
                .map(|score| score >= threshold)
                .unwrap_or(false)
        })
        .count()
}

/// Listings first seen at or after `cutoff`.
pub fn new_since_count(listings: &[Listing], cutoff: OffsetDateTime) -> usize {
    listings
        .iter()
        .filter(|listing| listing.first_seen >= cutoff)
        .count()
}

/// Per-listing figures shown on a listing card.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingMetrics {
    pub potential_gain: f64,
    pub roi_percentage: Option<f64>,
    pub score_bucket: ScoreBucket,
}

impl ListingMetrics {
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            potential_gain: potential_gain(listing),
            roi_percentage: roi_percentage(listing),
            score_bucket: score_bucket(listing.investment_score),
        }
    }

    pub fn roi_display(&self) -> String {
        format_roi(self.roi_percentage)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AggregateMetrics {
    pub total_listings: usize,
    pub average_price: f64,
    pub high_score_count: usize,
    pub new_today_count: usize,
}

impl AggregateMetrics {
    pub fn for_listings(listings: &[Listing], now: OffsetDateTime) -> Self {
        Self {
            total_listings: listings.len(),
            average_price: average_price(listings),
            high_score_count: high_score_count(listings, DEFAULT_HIGH_SCORE_THRESHOLD),
            new_today_count: new_since_count(listings, now - time::Duration::days(1)),
        }
    }
}
