//! Dronewatch Dashboard - Leptos-based WebAssembly UI
//!
//! A browser dashboard for a drone detection backend: a live annotated
//! video stream next to continuously polled detection counts. Built with
//! the Leptos framework and compiled to WebAssembly.
//!
//! ## Features
//!
//! - **Live Stream Viewer**: MJPEG-style feed with retry and fullscreen
//! - **Polled Statistics**: soldier/civilian/total counts refreshed on a
//!   fixed timer, resilient to backend outages
//! - **Light/Dark Theme**: persisted choice, OS preference fallback
//! - **Zero JavaScript**: 100% Rust compiled to WASM
//! - **Air-Gapped**: no external network requests (fonts, CDNs, etc.)
//!
//! ## Configuration
//!
//! The hosting page can inject configuration via meta tags:
//!
//! ```html
//! <meta name="dronewatch:api-url" content="http://localhost:8000">
//! <meta name="dronewatch:refresh-interval" content="500">
//! ```
//!
//! Or via JavaScript:
//!
//! ```javascript
//! window.__DRONEWATCH_CONFIG__ = {
//!     api_url: "http://localhost:8000",
//!     refresh_interval_ms: 500
//! };
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      Browser                           │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │        dronewatch-dashboard (WASM)             │    │
//! │  │  ┌─────────┐  ┌──────────┐  ┌─────────────┐    │    │
//! │  │  │ Leptos  │→ │ gloo-net │→ │ REST API    │    │    │
//! │  │  │ UI      │  │ HTTP     │  │ /stats      │    │    │
//! │  │  └─────────┘  └──────────┘  │ /video_feed │    │    │
//! │  └─────────────────────────────┴────────────┘─────┘    │
//! └──────────────────────────┬─────────────────────────────┘
//!                            │ HTTP
//! ┌──────────────────────────▼─────────────────────────────┐
//! │                 detection backend                      │
//! │        (annotated stream + stats endpoint)             │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod components;
pub mod config;
pub mod poll;
pub mod state;
pub mod theme;

use leptos::*;

use api::ApiClient;
use components::{ErrorBanner, Header, StatsPanel, VideoFeed};
use config::DashboardConfig;
use state::use_stats;
use theme::provide_theme;

/// Main dashboard application component
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();
    let client = ApiClient::from_config(&config);
    let refresh_interval_ms = config.refresh_interval_ms;

    let theme = provide_theme();

    let stats = use_stats(client.clone(), refresh_interval_ms);
    provide_context(stats);

    let error = stats.error();
    let is_connected = stats.is_connected();
    let banner_message = Signal::derive(move || error.get().unwrap_or_default());

    view! {
        // Hold rendering until the theme is resolved and applied, so the
        // first visible paint is already in the right mode.
        <Show when=move || theme.mounted.get()>
            <div class="app">
                <Header/>
                <main class="main" role="main">
                    <Show when=move || error.get().is_some() && !is_connected.get()>
                        <ErrorBanner message=banner_message/>
                    </Show>

                    <div class="dashboard-grid">
                        <div class="feed-column">
                            <VideoFeed client=client.clone()/>
                        </div>
                        <div class="stats-column">
                            <StatsPanel/>
                        </div>
                    </div>

                    <footer class="footer">
                        <p>
                            {format!(
                                "Real-time detection dashboard. Updates every {} ms",
                                refresh_interval_ms
                            )}
                        </p>
                    </footer>
                </main>
            </div>
        </Show>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    // Panic messages and tracing output both land in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("dronewatch dashboard starting");
    mount_to_body(|| view! { <App/> });
}
