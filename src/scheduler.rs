//! Injectable time source and cancelable one-shot timers.
//!
//! The estimator never sleeps or spawns threads; it asks the scheduler for
//! the current time, arms deferred timers, and drains the ones that have
//! fired during its `poll` step. Tests drive a [`VirtualScheduler`] so the
//! 2s/3s timing contracts are checked without wall-clock waits.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Handle to a scheduled one-shot timer
pub type TimerId = u64;

/// Time source plus one-shot timer queue.
///
/// Timers are identified by the `TimerId` returned from `schedule` and stay
/// pending until they either fire (reported once by `fired`) or are
/// cancelled.
pub trait Scheduler {
    /// Current time on this scheduler's clock
    fn now(&self) -> Instant;

    /// Arm a one-shot timer that fires after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer; unknown or already-fired ids are a no-op
    fn cancel(&mut self, id: TimerId);

    /// Drain and return the ids of timers whose deadline has passed
    fn fired(&mut self) -> Vec<TimerId>;
}

fn drain_due(pending: &mut Vec<(TimerId, Instant)>, now: Instant) -> Vec<TimerId> {
    let mut due = Vec::new();
    pending.retain(|(id, deadline)| {
        if *deadline <= now {
            due.push(*id);
            false
        } else {
            true
        }
    });
    due
}

/// Scheduler backed by the monotonic system clock
pub struct SystemScheduler {
    next_id: TimerId,
    pending: Vec<(TimerId, Instant)>,
}

impl SystemScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }
}

impl Default for SystemScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SystemScheduler {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push((id, Instant::now() + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(pending_id, _)| *pending_id != id);
    }

    fn fired(&mut self) -> Vec<TimerId> {
        drain_due(&mut self.pending, Instant::now())
    }
}

struct VirtualState {
    now: Instant,
    next_id: TimerId,
    pending: Vec<(TimerId, Instant)>,
}

/// Scheduler over a manually advanced clock.
///
/// Cloning yields another handle to the same clock, so a test can hand one
/// clone to the estimator and keep another to advance time.
#[derive(Clone)]
pub struct VirtualScheduler {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(VirtualState {
                now: Instant::now(),
                next_id: 1,
                pending: Vec::new(),
            })),
        }
    }

    /// Move the virtual clock forward
    pub fn advance(&self, delta: Duration) {
        let mut state = self.state.borrow_mut();
        state.now += delta;
    }

    /// Number of timers currently pending
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().pending.len()
    }
}

impl Default for VirtualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Instant {
        self.state.borrow().now
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now + delay;
        state.pending.push((id, deadline));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.state
            .borrow_mut()
            .pending
            .retain(|(pending_id, _)| *pending_id != id);
    }

    fn fired(&mut self) -> Vec<TimerId> {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        drain_due(&mut state.pending, now)
    }
}
