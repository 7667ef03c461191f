//! # Timer Service
//!
//! Single-threaded delayed actions for the UI loop.
//!
//! A timer is a deadline plus a *target*: a small value that tells the
//! reducer who asked for the timer. Nothing runs inside the queue. The
//! event loop calls [`Timers::fire_due`] and turns every expired timer
//! into an `Action::TimerFired`, so a timer "fires" on the same thread
//! and through the same `update()` path as a key press.
//!
//! ```text
//! schedule(150ms, CardReset) ──► TimerGuard ──(drop/cancel)──► removed
//!                                    │
//!                     loop: fire_due()│ deadline passed
//!                                    ▼
//!                          Fired { id, target }  ──► update()
//! ```
//!
//! Ownership of a registration lives in the [`TimerGuard`]. Whoever holds
//! the guard owns the timer; dropping it cancels. Cancelling a timer that
//! already fired, or was already cancelled, does nothing.

use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Identifies one scheduled timer. Never reused within a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

// ============================================================================
// Clocks
// ============================================================================

/// Source of "now" for the timer queue.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock used by the running application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// ============================================================================
// Queue
// ============================================================================

/// A timer that reached its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub target: T,
}

struct Entry<T> {
    deadline: Instant,
    target: T,
}

struct TimerQueue<T> {
    clock: Box<dyn Clock>,
    next_id: u64,
    // Keyed by id so cancel is a single remove; ids grow monotonically.
    entries: BTreeMap<TimerId, Entry<T>>,
}

impl<T> TimerQueue<T> {
    fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            debug!("Cancelled {}", id);
        }
        removed
    }
}

/// Handle to the session's timer queue. Clones refer to the same queue.
pub struct Timers<T> {
    queue: Rc<RefCell<TimerQueue<T>>>,
}

impl<T> Clone for Timers<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<T: fmt::Debug> Timers<T> {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            queue: Rc::new(RefCell::new(TimerQueue {
                clock: Box::new(clock),
                next_id: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Arms a timer that fires no earlier than `delay` from now.
    ///
    /// The returned guard must be kept for as long as the timer matters.
    /// Dropping it cancels the timer.
    #[must_use = "dropping the guard cancels the timer immediately"]
    pub fn schedule(&self, delay: Duration, target: T) -> TimerGuard<T> {
        let mut queue = self.queue.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        let deadline = queue.clock.now() + delay;
        debug!("Scheduled {} in {:?} for {:?}", id, delay, target);
        queue.entries.insert(id, Entry { deadline, target });
        TimerGuard {
            id,
            queue: Rc::downgrade(&self.queue),
        }
    }

    /// Cancels by id. Returns false if the timer already fired or was cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        self.queue.borrow_mut().cancel(id)
    }

    /// Removes and returns every timer whose deadline has passed.
    ///
    /// Results are ordered by deadline; timers sharing a deadline come out
    /// in scheduling order.
    pub fn fire_due(&self) -> Vec<Fired<T>> {
        let mut queue = self.queue.borrow_mut();
        let now = queue.clock.now();

        let mut due: Vec<(Instant, TimerId)> = queue
            .entries
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(id, entry)| (entry.deadline, *id))
            .collect();
        due.sort();

        due.into_iter()
            .filter_map(|(_, id)| {
                queue.entries.remove(&id).map(|entry| {
                    debug!("Fired {} for {:?}", id, entry.target);
                    Fired {
                        id,
                        target: entry.target,
                    }
                })
            })
            .collect()
    }

    /// Earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue
            .borrow()
            .entries
            .values()
            .map(|entry| entry.deadline)
            .min()
    }

    /// Time left until the earliest deadline (zero if already overdue).
    pub fn time_until_next(&self) -> Option<Duration> {
        let now = self.now();
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Whether `id` is still armed.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.queue.borrow().entries.contains_key(&id)
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    pub fn now(&self) -> Instant {
        self.queue.borrow().clock.now()
    }
}

// ============================================================================
// Guard
// ============================================================================

/// Owns one timer registration. Cancels on drop.
///
/// Holds only a weak reference to the queue, so a guard that outlives its
/// session is harmless.
pub struct TimerGuard<T> {
    id: TimerId,
    queue: Weak<RefCell<TimerQueue<T>>>,
}

impl<T> TimerGuard<T> {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cancels now instead of at drop. No-op if already fired or cancelled.
    pub fn cancel(self) {
        drop(self);
    }
}

impl<T> fmt::Debug for TimerGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerGuard").field("id", &self.id).finish()
    }
}

impl<T> Drop for TimerGuard<T> {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            // A guard can be dropped while fire_due() holds the borrow only if
            // a target owns a guard, which targets never do. Stay safe anyway.
            if let Ok(mut queue) = queue.try_borrow_mut() {
                queue.cancel(self.id);
            }
        }
    }
}
