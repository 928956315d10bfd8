use dioxus::prelude::*;
use time::OffsetDateTime;

use super::DISPLAY_CURRENCY;
use crate::domain::{AppState, DataProvenance};
use crate::ui::theme;
use crate::util::format::{format_clock, format_money, humanize_age};

#[component]
pub fn MarketPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let now = OffsetDateTime::now_utc();
    let view = state.with(|st| st.market_view(now));

    let connection = match view.provenance {
        DataProvenance::Live => "✅ Connected",
        DataProvenance::Sample => "⚠️ Sample data",
        DataProvenance::NotLoaded => "… Not loaded",
    };
    let updated = format!(
        "{} ({})",
        format_clock(view.last_updated),
        humanize_age(view.last_updated, now)
    );
    let average = format_money(view.aggregates.average_price, DISPLAY_CURRENCY);
    let loading = if view.is_loading { "Refreshing" } else { "Idle" };

    rsx! {
        div { class: "{theme::PANEL}",
            h2 { class: "mb-6 text-2xl font-bold text-gray-900", "Market Intelligence" }
            div { class: "grid grid-cols-1 gap-8 md:grid-cols-2",
                div {
                    h3 { class: "mb-4 text-lg font-semibold", "Database Status" }
                    div { class: "space-y-3",
                        StatusRow { label: "Listing Store Connection", value: connection.to_string() }
                        if let Some(reason) = view.last_error.clone() {
                            StatusRow { label: "Last Error", value: reason }
                        }
                        StatusRow { label: "Last Successful Refresh", value: updated }
                        StatusRow { label: "Loader", value: loading.to_string() }
                    }
                }
                div {
                    h3 { class: "mb-4 text-lg font-semibold", "Summary" }
                    div { class: "space-y-3",
                        StatusRow { label: "Active Listings", value: view.aggregates.total_listings.to_string() }
                        StatusRow { label: "Average Price", value: average }
                        StatusRow { label: "High Score Cars", value: view.aggregates.high_score_count.to_string() }
                        StatusRow { label: "New Today", value: view.aggregates.new_today_count.to_string() }
                        StatusRow { label: "Watchlist", value: view.watchlist_size.to_string() }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between rounded-lg bg-gray-50 p-3",
            span { class: "font-medium", "{label}" }
            span { class: "font-semibold text-blue-600", "{value}" }
        }
    }
}
