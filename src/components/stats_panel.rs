//! Statistics panel
//!
//! Three animated counters (soldiers, civilians, total) over the
//! detection legend. Shows a spinner card until the very first poll
//! completes; after that the panel always renders the last known-good
//! counts, even while offline.

use leptos::*;

use super::icons::{ShieldIcon, TargetIcon, UsersIcon};
use super::legend::DetectionLegend;
use super::primitives::LoadingSpinner;
use super::stat_card::StatCard;
use crate::state::StatsState;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = expect_context::<StatsState>();
    let stats = state.stats();
    let is_loading = state.is_loading();
    let is_connected = state.is_connected();

    view! {
        <div class="stats-panel">
            <Show
                when=move || !(is_loading.get() && !is_connected.get())
                fallback=|| view! {
                    <div class="stats-loading-card">
                        <LoadingSpinner message="Loading statistics..."/>
                    </div>
                }
            >
                <div class="stats-cards">
                    <StatCard
                        label="Soldiers Detected"
                        count=Signal::derive(move || stats.get().soldier)
                        color="red"
                        icon=view! { <ShieldIcon/> }
                    />
                    <StatCard
                        label="Civilians Detected"
                        count=Signal::derive(move || stats.get().civilian)
                        color="green"
                        icon=view! { <UsersIcon/> }
                    />
                    <StatCard
                        label="Total Detected"
                        count=Signal::derive(move || stats.get().total)
                        color="blue"
                        icon=view! { <TargetIcon/> }
                    />
                </div>
                <DetectionLegend/>
            </Show>
        </div>
    }
}
