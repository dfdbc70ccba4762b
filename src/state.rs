//! Reactive polling state for detection statistics
//!
//! Owns the stats snapshot exposed to the UI and the timer loop that
//! refreshes it. The snapshot transitions live on a plain struct so the
//! polling contract can be exercised without a browser.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, DetectionStats};
use crate::poll::{CancelToken, Repeating};

/// Observable state of the stats poller
///
/// `is_loading` is true only until the first poll completes, successfully
/// or not; it never returns to true afterwards. A failed poll keeps the
/// last known-good stats on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub stats: DetectionStats,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_connected: bool,
}

impl StatsSnapshot {
    pub fn new() -> Self {
        Self {
            stats: DetectionStats::default(),
            is_loading: true,
            error: None,
            is_connected: false,
        }
    }

    /// A poll succeeded: replace the stats wholesale and clear any error
    pub fn apply_success(&mut self, stats: DetectionStats) {
        self.stats = stats;
        self.error = None;
        self.is_connected = true;
        self.is_loading = false;
    }

    /// A poll failed: keep the last known-good stats, flag the outage
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_connected = false;
        self.is_loading = false;
    }

    /// Apply a completed poll, unless the owning scope was torn down
    ///
    /// Results are applied in completion order; overlapping polls are
    /// tolerated and the last one to complete wins.
    pub fn apply_outcome(
        &mut self,
        token: &CancelToken,
        outcome: Result<DetectionStats, String>,
    ) {
        if token.is_cancelled() {
            return;
        }
        match outcome {
            Ok(stats) => self.apply_success(stats),
            Err(message) => self.apply_failure(message),
        }
    }
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive handle over a [`StatsSnapshot`]
#[derive(Clone, Copy)]
pub struct StatsState {
    snapshot: RwSignal<StatsSnapshot>,
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            snapshot: create_rw_signal(StatsSnapshot::new()),
        }
    }

    pub fn stats(&self) -> Signal<DetectionStats> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.stats))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.error.clone()))
    }

    pub fn is_connected(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.is_connected))
    }

    fn apply_outcome(&self, token: &CancelToken, outcome: Result<DetectionStats, String>) {
        if token.is_cancelled() {
            return;
        }
        self.snapshot.update(|s| s.apply_outcome(token, outcome));
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start polling the backend for stats at a fixed period
///
/// The first fetch fires immediately, subsequent fetches at
/// `refresh_interval_ms`. Ticks are not coalesced: a slow fetch can
/// overlap the next one, and results land in completion order. Teardown
/// of the calling scope cancels the timer and suppresses any in-flight
/// result via the shared [`CancelToken`].
pub fn use_stats(client: ApiClient, refresh_interval_ms: u32) -> StatsState {
    let state = StatsState::new();
    let token = CancelToken::new();

    let tick = {
        let client = client.clone();
        let token = token.clone();
        move || {
            let client = client.clone();
            let token = token.clone();
            spawn_local(async move {
                let outcome = client.fetch_stats().await.map_err(|err| {
                    tracing::debug!(error = %err, "stats poll failed");
                    err.to_string()
                });
                state.apply_outcome(&token, outcome);
            });
        }
    };

    tick();
    let poller = Repeating::start(refresh_interval_ms, tick);

    on_cleanup(move || {
        token.cancel();
        drop(poller);
    });

    state
}
