use dioxus::prelude::*;

use crate::app::toggle_watch;
use crate::domain::AppState;
use crate::ui::components::listing_card::ListingCardView;
use crate::ui::theme;

#[component]
pub fn WatchlistPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let view = state.with(|st| st.watchlist_view());
    let is_empty = view.is_empty();
    let missing = view.missing_count;

    rsx! {
        div { class: "{theme::PANEL}",
            h2 { class: "mb-6 text-2xl font-bold text-gray-900", "Your Watchlist" }
            if is_empty {
                div { class: "py-12 text-center",
                    span { class: "text-6xl", "❤️" }
                    p { class: "mt-4 text-gray-600", "No cars in your watchlist yet." }
                    p { class: "text-sm text-gray-500", "Add cars from the opportunities page to track them here." }
                }
            } else {
                div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                    for (id, card) in view.cards.into_iter().map(|c| (c.listing.id.clone(), c)) {
                        ListingCardView {
                            key: "{id}",
                            card,
                            on_toggle_watch: move |id: String| toggle_watch(state, &id),
                        }
                    }
                }
                if missing > 0 {
                    p { class: "mt-6 text-sm text-gray-500",
                        "{missing} bookmarked listing(s) are not part of the current results."
                    }
                }
            }
        }
    }
}
