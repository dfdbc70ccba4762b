//! Reusable UI primitive components
//!
//! Foundational building blocks for the dashboard UI:
//! - Loading spinner
//! - Connectivity indicator
//! - Offline error banner

use leptos::*;

use super::icons::AlertIcon;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
            {message.map(|msg| view! { <span class="loading-message">{msg}</span> })}
        </div>
    }
}

/// Status indicator dot reflecting backend connectivity
#[component]
pub fn StatusDot(#[prop(into)] connected: MaybeSignal<bool>) -> impl IntoView {
    view! {
        <span
            class="status-dot"
            class:connected=move || connected.get()
            class:disconnected=move || !connected.get()
            role="status"
            aria-label=move || if connected.get() { "Connected" } else { "Disconnected" }
        />
    }
}

/// Banner shown while the backend is unreachable
///
/// The dashboard keeps rendering the last known-good stats underneath;
/// this only flags the outage.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert" aria-live="assertive">
            <AlertIcon/>
            <div class="error-banner-content">
                <p class="error-banner-title">"Backend Connection Error"</p>
                <p class="error-banner-message">{move || message.get()}</p>
            </div>
        </div>
    }
}
