use dioxus::prelude::*;

use crate::domain::score_bucket;
use crate::ui::theme;

#[component]
pub fn ScoreBadge(score: Option<f64>) -> Element {
    let bucket = score_bucket(score);
    let label = match score {
        Some(value) if value.is_finite() => format!("{value:.1}/10"),
        _ => "–/10".to_string(),
    };

    rsx! {
        span {
            class: "rounded-full px-3 py-1 text-sm font-semibold {theme::score_badge(bucket)}",
            title: "{bucket.label()}",
            "{label}"
        }
    }
}
