//! Live video feed viewer
//!
//! Renders the annotated stream endpoint as an `<img>` and tracks a
//! small per-viewer state machine: loading, errored, fullscreen, and a
//! retry generation. Retrying re-creates the element under a new
//! generation so the browser requests the stream from scratch instead of
//! reviving the failed one.

use leptos::*;

use super::icons::{AlertIcon, MaximizeIcon, RefreshIcon};
use super::primitives::LoadingSpinner;
use crate::api::ApiClient;

/// Viewer state machine
///
/// `Loading -> {Loaded, Errored}`; retry moves any state back to loading
/// under a fresh generation. Fullscreen is independent of load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamViewState {
    pub loading: bool,
    pub error: bool,
    pub fullscreen: bool,
    pub generation: u32,
}

impl StreamViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error: false,
            fullscreen: false,
            generation: 0,
        }
    }

    pub fn on_loaded(&mut self) {
        self.loading = false;
        self.error = false;
    }

    pub fn on_error(&mut self) {
        self.loading = false;
        self.error = true;
    }

    /// Back to loading under a new identity, forcing a fresh request
    pub fn retry(&mut self) {
        self.loading = true;
        self.error = false;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}

impl Default for StreamViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream viewer card with retry and fullscreen controls
#[component]
pub fn VideoFeed(client: ApiClient) -> impl IntoView {
    let view_state = create_rw_signal(StreamViewState::new());

    // Only generation changes should re-create the element; load/error
    // flips must not.
    let generation = create_memo(move |_| view_state.with(|s| s.generation));

    let feed_url = client.video_feed_url();
    let error_hint = format!("Make sure the backend is running at {}", client.base_url());

    let stream_element = move || {
        // Track the generation so retry rebuilds the element.
        generation.get();
        let src = feed_url.clone();
        view! {
            <img
                src=src
                alt="Live annotated video feed"
                class="feed-image"
                class:hidden=move || view_state.with(|s| s.loading || s.error)
                on:load=move |_| view_state.update(|s| s.on_loaded())
                on:error=move |_| view_state.update(|s| s.on_error())
            />
        }
    };

    view! {
        <div class="feed-card" role="region" aria-label="Live video feed">
            <div class="feed-header">
                <h2 class="feed-title">"Live Video Feed"</h2>
                <div class="feed-actions">
                    <button
                        class="icon-btn"
                        on:click=move |_| view_state.update(|s| s.retry())
                        aria-label="Refresh video feed"
                    >
                        <RefreshIcon/>
                    </button>
                    <button
                        class="icon-btn"
                        on:click=move |_| view_state.update(|s| s.toggle_fullscreen())
                        aria-label="Toggle fullscreen"
                    >
                        <MaximizeIcon/>
                    </button>
                </div>
            </div>

            <div class="feed-body" class:fullscreen=move || view_state.with(|s| s.fullscreen)>
                <Show when=move || view_state.with(|s| s.loading && !s.error)>
                    <div class="feed-overlay">
                        <LoadingSpinner message="Loading video stream..."/>
                    </div>
                </Show>

                <Show when=move || view_state.with(|s| s.error)>
                    <div class="feed-overlay feed-error" role="alert">
                        <AlertIcon/>
                        <p class="feed-error-title">"Failed to load video stream"</p>
                        <p class="feed-error-hint">{error_hint.clone()}</p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| view_state.update(|s| s.retry())
                        >
                            "Retry Connection"
                        </button>
                    </div>
                </Show>

                {stream_element}

                <Show when=move || view_state.with(|s| s.fullscreen)>
                    <button
                        class="btn feed-exit-fullscreen"
                        on:click=move |_| view_state.update(|s| s.toggle_fullscreen())
                    >
                        "Exit Fullscreen"
                    </button>
                </Show>
            </div>
        </div>
    }
}
