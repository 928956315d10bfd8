use dioxus::prelude::*;

use crate::domain::DataProvenance;
use crate::ui::theme;

/// Tells the operator whether the listings on screen are live or sample data.
#[component]
pub fn StatusIndicator(provenance: DataProvenance) -> Element {
    let hint = if provenance.is_live() {
        "Listings come from the listing store"
    } else {
        "Listings on screen are not live"
    };

    rsx! {
        div {
            class: "{theme::provenance_pill(provenance)}",
            title: "{hint}",
            div { class: "{theme::provenance_dot(provenance)}" }
            span { class: "text-sm font-medium", "{provenance.label()}" }
        }
    }
}
