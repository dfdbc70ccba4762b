//! Scheduling primitives for timer-driven polling
//!
//! The polling loop is expressed as a repeating task plus a cooperative
//! cancellation token, so the rules around suspension and teardown are
//! enforced by structure: dropping the [`Repeating`] handle stops future
//! ticks, and any work already in flight must consult its [`CancelToken`]
//! before touching state.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Cooperative cancellation token shared between a task owner and its
/// in-flight work
///
/// Cancelling does not abort the underlying operation, it only suppresses
/// the application of its result. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. Idempotent.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Handle to a repeating task running on the browser event loop
///
/// Ticks fire at a fixed period regardless of whether work spawned by a
/// previous tick is still outstanding. Dropping the handle cancels all
/// future ticks.
pub struct Repeating {
    _interval: Interval,
}

impl Repeating {
    /// Start invoking `callback` every `period_ms` milliseconds
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> Self {
        Self {
            _interval: Interval::new(period_ms, callback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_starts_live() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent_and_shared() {
        let token = CancelToken::new();
        let clone = token.clone();

        token.cancel();
        token.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }
}
