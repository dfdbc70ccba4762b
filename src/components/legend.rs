//! Detection legend
//!
//! Explains the bounding-box colors drawn onto the annotated stream.

use leptos::*;

#[component]
pub fn DetectionLegend() -> impl IntoView {
    view! {
        <div class="legend-card" role="region" aria-label="Detection legend">
            <h3 class="legend-title">"Detection Legend"</h3>
            <div class="legend-items">
                <div class="legend-item">
                    <span class="legend-swatch civilian" aria-hidden="true"></span>
                    <span>"Green Box = Civilian"</span>
                </div>
                <div class="legend-item">
                    <span class="legend-swatch soldier" aria-hidden="true"></span>
                    <span>"Red Box = Soldier"</span>
                </div>
            </div>
        </div>
    }
}
