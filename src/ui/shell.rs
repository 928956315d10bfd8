use dioxus::prelude::*;

use crate::app::request_refresh;
use crate::config::ClientConfig;
use crate::domain::{AppState, ViewTag};
use crate::ui::components::status_indicator::StatusIndicator;
use crate::ui::components::toast::ToastMessage;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<ClientConfig>();

    let (active, provenance, is_loading) = state.with(|st| {
        (
            st.active_view(),
            st.provenance(),
            st.is_loading(),
        )
    });
    let refresh_label = if is_loading {
        "🔄 Loading..."
    } else {
        "🔄 Refresh"
    };
    let version = version_label();
    let mut state_mut = state;

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            header { class: "border-b border-gray-200 bg-white shadow-sm",
                div { class: "mx-auto flex max-w-7xl items-center justify-between px-6 py-4",
                    div { class: "flex items-center gap-4",
                        div { class: "flex h-10 w-10 items-center justify-center rounded-lg bg-blue-600",
                            span { class: "text-lg font-bold text-white", "997" }
                        }
                        div {
                            h1 { class: "text-2xl font-bold text-gray-900", "{APP_NAME}" }
                            p { class: "text-gray-600", "Real-time investment opportunities • {version}" }
                        }
                    }
                    div { class: "flex items-center gap-4",
                        StatusIndicator { provenance }
                        button {
                            class: "{theme::BTN_PRIMARY}",
                            disabled: is_loading,
                            onclick: move |_| request_refresh(state, toasts, config.clone()),
                            "{refresh_label}"
                        }
                    }
                }
            }
            nav { class: "border-b border-gray-200 bg-white",
                div { class: "mx-auto flex max-w-7xl space-x-8 px-6",
                    for tag in ViewTag::ALL {
                        TabButton {
                            key: "{tag.slug()}",
                            active: tag == active,
                            label: tag.label(),
                            onclick: move |_| state_mut.with_mut(|st| st.select_view(tag)),
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-6 py-8",
                {children}
            }
        }
    }
}

#[component]
fn TabButton(active: bool, label: &'static str, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "{theme::tab(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
