//! Class names keyed by domain state, so pages stay free of styling decisions.
//!
//! These are Tailwind utility names. No stylesheet is bundled, so they only
//! take effect when the host page provides Tailwind.

use crate::domain::{DataProvenance, ScoreBucket};

pub fn score_badge(bucket: ScoreBucket) -> &'static str {
    match bucket {
        ScoreBucket::High => "text-green-600 bg-green-50",
        ScoreBucket::MediumHigh => "text-blue-600 bg-blue-50",
        ScoreBucket::Medium => "text-yellow-600 bg-yellow-50",
        ScoreBucket::Low | ScoreBucket::Unknown => "text-gray-600 bg-gray-50",
    }
}

pub fn provenance_pill(provenance: DataProvenance) -> &'static str {
    match provenance {
        DataProvenance::Live => "flex items-center gap-2 rounded-lg bg-green-50 px-3 py-2 text-green-700",
        DataProvenance::Sample => "flex items-center gap-2 rounded-lg bg-amber-50 px-3 py-2 text-amber-700",
        DataProvenance::NotLoaded => "flex items-center gap-2 rounded-lg bg-gray-50 px-3 py-2 text-gray-600",
    }
}

pub fn provenance_dot(provenance: DataProvenance) -> &'static str {
    match provenance {
        DataProvenance::Live => "h-2 w-2 rounded-full bg-green-500 animate-pulse",
        DataProvenance::Sample => "h-2 w-2 rounded-full bg-amber-500",
        DataProvenance::NotLoaded => "h-2 w-2 rounded-full bg-gray-400",
    }
}

pub fn tab(active: bool) -> &'static str {
    if active {
        "border-b-2 border-blue-500 px-2 py-4 text-sm font-medium text-blue-600"
    } else {
        "border-b-2 border-transparent px-2 py-4 text-sm font-medium text-gray-500 hover:text-gray-700"
    }
}

pub fn watch_button(watched: bool) -> &'static str {
    if watched {
        "rounded-full p-2 text-red-500 bg-red-50"
    } else {
        "rounded-full p-2 text-gray-400 hover:text-red-500"
    }
}

pub const PANEL: &str = "rounded-xl border border-gray-200 bg-white p-6 shadow-lg";
pub const BTN_PRIMARY: &str =
    "rounded-lg bg-blue-600 px-4 py-2 text-white hover:bg-blue-700 disabled:opacity-50";
