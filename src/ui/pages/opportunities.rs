use dioxus::prelude::*;
use time::OffsetDateTime;

use super::DISPLAY_CURRENCY;
use crate::app::toggle_watch;
use crate::domain::{AggregateMetrics, AppState, DataProvenance};
use crate::ui::components::{
    kpi_card::KpiCard, listing_card::ListingCardView, status_indicator::StatusIndicator,
};
use crate::ui::theme;
use crate::util::format::{format_clock, format_money};

#[component]
pub fn OpportunitiesPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let now = OffsetDateTime::now_utc();
    let (view, provenance, last_updated) = state.with(|st| {
        (
            st.opportunities_view(now),
            st.provenance(),
            st.last_updated(),
        )
    });

    let found = view.cards.len();
    let is_loading = view.is_loading;
    let show_empty = view.cards.is_empty() && !is_loading;
    let updated = format_clock(last_updated);
    let connection = match provenance {
        DataProvenance::Live => "Connected to the listing store ✅",
        DataProvenance::Sample => "Using sample data (check connection)",
        DataProvenance::NotLoaded => "Waiting for the first load",
    };

    rsx! {
        MarketOverview { aggregates: view.aggregates.clone() }
        div { class: "{theme::PANEL} mb-8",
            div { class: "mb-4 flex items-center gap-4",
                span { class: "text-2xl", "🔍" }
                h2 { class: "text-lg font-semibold text-gray-900", "Database Status" }
                span { class: "text-sm text-gray-500", "Updated: {updated}" }
            }
            div { class: "flex items-center gap-4",
                StatusIndicator { provenance }
                span { class: "text-gray-700", "{connection}" }
            }
        }
        div { class: "mb-6 flex items-center justify-between",
            h2 { class: "text-2xl font-bold text-gray-900",
                "Investment Opportunities"
                span { class: "ml-2 text-lg font-normal text-gray-600", "({found} found)" }
            }
            if is_loading {
                div { class: "flex items-center gap-2 text-sm text-gray-600", "🔄 Loading listings..." }
            }
        }
        div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
            for (id, card) in view.cards.into_iter().map(|c| (c.listing.id.clone(), c)) {
                ListingCardView {
                    key: "{id}",
                    card,
                    on_toggle_watch: move |id: String| toggle_watch(state, &id),
                }
            }
        }
        if show_empty {
            div { class: "py-12 text-center",
                span { class: "text-6xl", "🚗" }
                p { class: "mt-4 text-gray-600", "No opportunities found." }
                p { class: "text-sm text-gray-500", "The listing store returned no active manual listings." }
            }
        }
    }
}

#[component]
fn MarketOverview(aggregates: AggregateMetrics) -> Element {
    rsx! {
        div { class: "mb-8 grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-4",
            KpiCard {
                title: "Total Listings".to_string(),
                value: aggregates.total_listings.to_string(),
                icon: "📊",
            }
            KpiCard {
                title: "Avg Price".to_string(),
                value: format_money(aggregates.average_price, DISPLAY_CURRENCY),
                icon: "💰",
            }
            KpiCard {
                title: "New Today".to_string(),
                value: aggregates.new_today_count.to_string(),
                icon: "🔔",
                description: Some("First seen in the last 24h".to_string()),
            }
            KpiCard {
                title: "High Score Cars".to_string(),
                value: aggregates.high_score_count.to_string(),
                icon: "🏆",
                description: Some("Investment score 8.5 or higher".to_string()),
            }
        }
    }
}
