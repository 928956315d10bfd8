use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::ClientConfig,
    domain::{AppState, Listing, LoadOutcome, LoadTicket, ViewTag},
    infra::listings::{ListingsClient, ListingsClientError},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage, ToastStack},
        pages::{MarketPage, OpportunitiesPage, WatchlistPage},
        shell::Shell,
    },
};

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let config = use_context_provider(ClientConfig::from_env);

    // One load per session, issued on first render.
    use_hook({
        let mut state = state;
        let config = config.clone();
        move || {
            if !config.is_configured() {
                warn!(?config, "listing store is not configured, expecting sample data");
            }
            if let Some(ticket) = state.with_mut(|st| st.start_session()) {
                spawn_load(state, toasts, config, ticket);
            }
        }
    });

    let active = state.with(|st| st.active_view());

    rsx! {
        Shell {
            match active {
                ViewTag::Opportunities => rsx! { OpportunitiesPage {} },
                ViewTag::Watchlist => rsx! { WatchlistPage {} },
                ViewTag::Market => rsx! { MarketPage {} },
            }
        }
        ToastStack {}
    }
}

/// Starts a new load from a user action; any load still in flight becomes stale.
pub fn request_refresh(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    config: ClientConfig,
) {
    let ticket = state.with_mut(|st| st.begin_refresh());
    info!(generation = ticket.generation(), "refresh requested");
    spawn_load(state, toasts, config, ticket);
}

pub fn toggle_watch(mut state: Signal<AppState>, id: &str) {
    let watched = state.with_mut(|st| st.toggle_watch(id));
    debug!(listing = id, watched, "watchlist toggled");
}

fn spawn_load(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    config: ClientConfig,
    ticket: LoadTicket,
) {
    spawn(async move {
        let outcome = run_load(ListingsClient::new(config), ticket, |ticket, result| {
            state.with_mut(|st| st.finish_load(ticket, result))
        })
        .await;
        match outcome {
            LoadOutcome::Fallback { reason } => push_toast(
                toasts,
                ToastKind::Warning,
                format!("Live listings unavailable ({reason}). Showing sample data."),
            ),
            LoadOutcome::Live { count } if ticket.generation() > 1 => push_toast(
                toasts,
                ToastKind::Info,
                format!("Refreshed {count} listings."),
            ),
            LoadOutcome::Live { .. } | LoadOutcome::Stale => {}
        }
    });
}

/// Fetches with `client` and hands the result, failure included, to `finish`.
async fn run_load<F>(
    client: Result<ListingsClient, ListingsClientError>,
    ticket: LoadTicket,
    finish: F,
) -> LoadOutcome
where
    F: FnOnce(LoadTicket, Result<Vec<Listing>, ListingsClientError>) -> LoadOutcome,
{
    let result = match client {
        Ok(client) => client.fetch_listings().await,
        Err(err) => Err(err),
    };
    finish(ticket, result)
}
