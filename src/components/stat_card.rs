//! Stat card with an animated counter
//!
//! When a counter target changes, the displayed value interpolates to it
//! over a fixed window of discrete steps instead of jumping. A retarget
//! mid-animation restarts from whatever value is currently on screen.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Total animation window for one counter change
pub const ANIMATION_DURATION_MS: u32 = 300;

/// Discrete interpolation steps per animation
pub const ANIMATION_STEPS: u32 = 20;

/// Value shown at `step` of `steps` while interpolating `from -> target`
///
/// Intermediate steps are rounded; the final step snaps exactly to the
/// target so rounding can never drift the end state.
pub fn counter_step(from: u64, target: u64, step: u32, steps: u32) -> u64 {
    if step >= steps {
        return target;
    }
    let from = from as f64;
    let delta = target as f64 - from;
    (from + delta * f64::from(step) / f64::from(steps)).round() as u64
}

/// Card displaying one detection counter
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] count: Signal<u64>,
    color: &'static str,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    let displayed = create_rw_signal(count.get_untracked());

    // Each animation gets an id; bumping it strands any loop still
    // sleeping on the old id.
    let animation_id = Rc::new(Cell::new(0u64));

    {
        let animation_id = Rc::clone(&animation_id);
        create_effect(move |_| {
            let target = count.get();
            let from = displayed.get_untracked();
            let id = animation_id.get() + 1;
            animation_id.set(id);

            if from == target {
                displayed.set(target);
                return;
            }

            let animation_id = Rc::clone(&animation_id);
            spawn_local(async move {
                let step_ms = ANIMATION_DURATION_MS / ANIMATION_STEPS;
                for step in 1..=ANIMATION_STEPS {
                    TimeoutFuture::new(step_ms).await;
                    if animation_id.get() != id {
                        return;
                    }
                    displayed.set(counter_step(from, target, step, ANIMATION_STEPS));
                }
            });
        });
    }

    on_cleanup(move || {
        animation_id.set(animation_id.get() + 1);
    });

    view! {
        <div class="stat-card">
            <div class="stat-body">
                <div class="stat-text">
                    <p class="stat-label">{label}</p>
                    <p class=format!("stat-value {}", color)>
                        {move || displayed.get()}
                    </p>
                </div>
                {icon.map(|icon| view! {
                    <div class=format!("stat-icon {}", color)>{icon}</div>
                })}
            </div>
        </div>
    }
}
