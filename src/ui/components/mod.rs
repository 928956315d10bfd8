pub mod kpi_card;
pub mod listing_card;
pub mod score_badge;
pub mod status_indicator;
pub mod toast;
