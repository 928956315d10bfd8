use dioxus::prelude::*;
use time::OffsetDateTime;

use super::score_badge::ScoreBadge;
use crate::domain::ListingCard;
use crate::ui::theme;
use crate::util::format::{format_gain, format_mileage, format_money, humanize_age};

#[component]
pub fn ListingCardView(card: ListingCard, on_toggle_watch: EventHandler<String>) -> Element {
    let ListingCard {
        listing,
        metrics,
        watched,
    } = card;

    let subtitle = format!("{} • {}", listing.year, format_mileage(listing.mileage));
    let price = format_money(listing.price, &listing.currency);
    let market_value = listing
        .market_value
        .map(|value| format_money(value, &listing.currency))
        .unwrap_or_else(|| "n/a".to_string());
    let gain = format!(
        "{} potential gain ({}%)",
        format_gain(metrics.potential_gain, &listing.currency),
        metrics.roi_display()
    );
    let listed = format!(
        "Listed {}",
        humanize_age(listing.first_seen, OffsetDateTime::now_utc())
    );
    let location = listing.location_label().unwrap_or_default();
    let color = listing.color.clone().unwrap_or_default();
    let rarity = listing.rarity_score.clone().unwrap_or_default();
    let seller = listing.seller_type.clone().unwrap_or_default();
    let id = listing.id.clone();
    let watch_title = if watched {
        "Remove from watchlist"
    } else {
        "Add to watchlist"
    };

    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-gray-200 bg-white shadow-lg",
            div {
                class: "p-6",
                div {
                    class: "mb-4 flex items-start justify-between",
                    div {
                        h3 { class: "text-xl font-bold text-gray-900", "{listing.model}" }
                        p { class: "text-gray-600", "{subtitle}" }
                    }
                    div {
                        class: "flex items-center gap-2",
                        ScoreBadge { score: listing.investment_score }
                        button {
                            class: "{theme::watch_button(watched)}",
                            title: "{watch_title}",
                            onclick: move |_| on_toggle_watch.call(id.clone()),
                            "❤️"
                        }
                    }
                }
                div {
                    class: "mb-4 rounded-lg bg-blue-50 p-4",
                    div {
                        class: "mb-2 flex items-center justify-between",
                        span { class: "text-2xl font-bold text-gray-900", "{price}" }
                        div {
                            class: "text-right",
                            div { class: "text-sm text-gray-600", "Market Value" }
                            div { class: "font-semibold", "{market_value}" }
                        }
                    }
                    div {
                        class: "flex items-center justify-between",
                        span { class: "font-semibold text-green-600", "{gain}" }
                        span { class: "text-xs text-gray-500", "{listed}" }
                    }
                }
                div {
                    class: "mb-4 grid grid-cols-2 gap-4 text-sm text-gray-600",
                    span { "📍 {location}" }
                    span { "⚙️ {listing.transmission}" }
                    span { "🎨 {color}" }
                    span { "⭐ {rarity}" }
                }
                div {
                    class: "flex items-center justify-between",
                    div {
                        class: "text-sm text-gray-600",
                        span { class: "font-medium", "{listing.source}" }
                        " • {seller}"
                    }
                    a {
                        class: "{theme::BTN_PRIMARY}",
                        href: "{listing.url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "View Listing 🔗"
                    }
                }
            }
        }
    }
}
