use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

/// Roughly one display frame.
pub const FRAME_INTERVAL_MS: u32 = 16;

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Bookkeeping for one ticker, generic over the timer handle it owns.
///
/// A finished tick only parks the loop; the handle is reaped later, and only
/// if nothing woke the loop in between.
#[derive(Debug)]
struct LoopState<H> {
    handle: Option<H>,
    idle: bool,
}

impl<H> Default for LoopState<H> {
    fn default() -> Self {
        Self {
            handle: None,
            idle: false,
        }
    }
}

impl<H> LoopState<H> {
    /// Marks the loop active. Returns `true` when no timer is installed and
    /// the caller has to create one.
    fn wake(&mut self) -> bool {
        self.idle = false;
        self.handle.is_none()
    }

    fn install(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    fn is_idle(&self) -> bool {
        self.idle
    }

    fn park(&mut self) {
        self.idle = true;
    }

    /// Hands back the timer if the loop is still parked.
    fn reap(&mut self) -> Option<H> {
        if self.idle {
            self.handle.take()
        } else {
            None
        }
    }

    fn stop(&mut self) -> Option<H> {
        self.idle = true;
        self.handle.take()
    }
}

/// Per-element animation ticker.
///
/// Each animated element owns one of these; there is no shared clock. The
/// owner must call [`FrameLoop::stop`] from its effect destructor, since the
/// running interval keeps the loop alive.
#[derive(Clone, Default)]
pub struct FrameLoop {
    state: Rc<RefCell<LoopState<Interval>>>,
}

impl FrameLoop {
    /// Calls `tick(now_ms)` every frame until it returns `false`.
    ///
    /// If the loop is already running the existing tick is kept and only
    /// woken up, so ticks should read their inputs from shared state.
    pub fn start<F>(&self, mut tick: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let mut state = self.state.borrow_mut();
        if !state.wake() {
            return;
        }

        let shared = Rc::clone(&self.state);
        state.install(Interval::new(FRAME_INTERVAL_MS, move || {
            if shared.borrow().is_idle() {
                return;
            }
            if !tick(now_ms()) {
                shared.borrow_mut().park();
                // An interval can't be dropped from inside its own callback.
                let reaper = Rc::clone(&shared);
                Timeout::new(0, move || {
                    let finished = reaper.borrow_mut().reap();
                    drop(finished);
                })
                .forget();
            }
        }));
    }

    /// Replaces whatever tick is running with `tick`.
    pub fn restart<F>(&self, tick: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        self.stop();
        self.start(tick);
    }

    pub fn stop(&self) {
        let interval = self.state.borrow_mut().stop();
        drop(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::LoopState;

    #[test]
    fn first_wake_asks_for_a_timer() {
        let mut state = LoopState::<u32>::default();
        assert!(state.wake());
        state.install(1);
        assert!(!state.wake());
        assert!(!state.is_idle());
    }

    #[test]
    fn parked_loop_is_reaped() {
        let mut state = LoopState::default();
        state.wake();
        state.install(1);
        state.park();
        assert_eq!(state.reap(), Some(1));
        assert_eq!(state.reap(), None);
        assert!(state.wake());
    }

    #[test]
    fn restart_during_pending_reap_keeps_the_new_timer() {
        let mut state = LoopState::default();
        state.wake();
        state.install(1);
        state.park();

        // restart: stop, then start again before the deferred reap runs
        assert_eq!(state.stop(), Some(1));
        assert!(state.wake());
        state.install(2);

        assert_eq!(state.reap(), None);
        assert!(!state.is_idle());
        assert!(!state.wake());
    }

    #[test]
    fn waking_a_parked_loop_cancels_the_reap() {
        let mut state = LoopState::default();
        state.wake();
        state.install(7);
        state.park();
        assert!(!state.wake());
        assert_eq!(state.reap(), None);
    }

    #[test]
    fn stop_leaves_no_timer_behind() {
        let mut state = LoopState::default();
        state.wake();
        state.install(3);
        assert_eq!(state.stop(), Some(3));
        assert!(state.is_idle());
        assert_eq!(state.reap(), None);
        assert_eq!(state.stop(), None);
    }
}
