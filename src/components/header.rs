//! Header component
//!
//! The top bar showing:
//! - Application title
//! - Connection status indicator ("Live" / "Offline")
//! - Wall-clock readout ticking once per second
//! - Theme toggle

use gloo_timers::callback::Interval;
use leptos::*;

use super::primitives::StatusDot;
use super::theme_toggle::ThemeToggle;
use crate::state::StatsState;

/// Page header with connectivity, clock and theme controls
#[component]
pub fn Header() -> impl IntoView {
    let stats = expect_context::<StatsState>();
    let connected = stats.is_connected();

    let clock = create_rw_signal(current_time_string());
    let ticker = Interval::new(1_000, move || clock.set(current_time_string()));
    on_cleanup(move || drop(ticker));

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title">"Drone Surveillance System"</h1>
                <div class="connection-status" role="status" aria-live="polite">
                    <StatusDot connected=connected/>
                    <span>
                        {move || if connected.get() { "Live" } else { "Offline" }}
                    </span>
                </div>
            </div>
            <div class="header-right">
                <span class="header-clock mono">{move || clock.get()}</span>
                <ThemeToggle/>
            </div>
        </header>
    }
}

/// Local wall-clock time as `HH:MM:SS`
fn current_time_string() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}
