//! Fire-once deferred tasks with explicit cancellation.
//!
//! Tasks are polled rather than run on a background thread: the owner calls
//! [`Scheduler::poll`] with the current time (once per frame in the app) and
//! receives the payloads whose deadline has passed. Dropping the scheduler
//! cancels everything still pending, so a callback can never fire into state
//! that has already been torn down.

use std::time::Duration;

// Use web_time for WASM compatibility
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;
#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Result of a click on a two-step delete control.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    /// First click: the delete is armed and waits for a second click.
    Armed,
    /// Second click inside the window: the item was removed.
    Deleted(T),
}

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Instant,
    payload: T,
}

/// A set of pending deferred tasks.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `payload` to be delivered `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: now + delay,
            payload,
        });
        id
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    /// Whether a task is still waiting to fire.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Remove and return the payloads of all tasks due at `now`, earliest first.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.id.0));
        due.into_iter().map(|p| p.payload).collect()
    }

    /// The earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Cancel every pending task. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}

impl<T> Drop for Scheduler<T> {
    fn drop(&mut self) {
        let cancelled = self.cancel_all();
        if cancelled > 0 {
            log::debug!("Cancelled {} pending timer(s) on teardown", cancelled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_delivers_due_tasks_only() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(now, Duration::from_secs(2), "two");
        scheduler.schedule(now, Duration::from_secs(1), "one");

        assert!(scheduler.poll(now).is_empty());
        assert_eq!(scheduler.poll(now + Duration::from_millis(1500)), vec!["one"]);
        assert_eq!(scheduler.poll(now + Duration::from_secs(5)), vec!["two"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_poll_orders_by_deadline() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(now, Duration::from_millis(300), 3);
        scheduler.schedule(now, Duration::from_millis(100), 1);
        scheduler.schedule(now, Duration::from_millis(200), 2);

        assert_eq!(scheduler.poll(now + Duration::from_secs(1)), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let id = scheduler.schedule(now, Duration::from_millis(10), ());

        assert!(scheduler.is_pending(id));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.poll(now + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_next_deadline() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        assert!(scheduler.next_deadline().is_none());

        scheduler.schedule(now, Duration::from_secs(3), ());
        scheduler.schedule(now, Duration::from_secs(2), ());
        assert_eq!(scheduler.next_deadline(), Some(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_cancel_all() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        scheduler.schedule(now, Duration::from_secs(1), ());
        scheduler.schedule(now, Duration::from_secs(2), ());

        assert_eq!(scheduler.cancel_all(), 2);
        assert_eq!(scheduler.len(), 0);
    }
}
