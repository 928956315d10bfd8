use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, icon: &'static str, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-6 shadow-lg",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-600", "{title}" }
                    p { class: "text-2xl font-bold text-gray-900", "{value}" }
                    if let Some(desc) = description {
                        p { class: "mt-1 text-xs text-gray-500", "{desc}" }
                    }
                }
                span { class: "text-4xl", "{icon}" }
            }
        }
    }
}
