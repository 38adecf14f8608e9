//! Serialized timer queue driven by an explicit clock.
//!
//! Deferred work never fires on its own: the owner calls [`TimerQueue::advance`]
//! with the elapsed time and receives the tasks that became due, in the order
//! they were scheduled. Deadlines are kept monotonic, so a short timer
//! scheduled after a long one still fires after it.

use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug)]
struct Timer<T> {
    due: Duration,
    task: T,
}

/// FIFO queue of tasks with deadlines on a virtual clock.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    pending: VecDeque<Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            pending: VecDeque::new(),
        }
    }

    /// Schedule `task` to fire `delay` from now, after every pending task.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let mut due = self.now.saturating_add(delay);
        if let Some(last) = self.pending.back() {
            due = due.max(last.due);
        }
        self.pending.push_back(Timer { due, task });
    }

    /// Move the clock forward and return every task now due, in order.
    ///
    /// The clock saturates at `Duration::MAX` instead of overflowing.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);
        let mut fired = Vec::new();
        while self.pending.front().is_some_and(|t| t.due <= self.now) {
            if let Some(timer) = self.pending.pop_front() {
                fired.push(timer.task);
            }
        }
        fired
    }

    /// Time remaining until the next task is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .front()
            .map(|t| t.due.saturating_sub(self.now))
    }

    /// Cancel everything. Returns the number of tasks dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
