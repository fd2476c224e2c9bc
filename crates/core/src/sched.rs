//! Delayed-task scheduler - cancellable countdown timers
//!
//! The board defers its post-turn work (unlock, spawn, game-over check)
//! behind a short settle delay. Tasks live here as plain data with a
//! remaining-ms countdown; the owner drives the queue from its tick and
//! receives fired tasks back in due order. No threads, no wall clock.

/// Handle to a scheduled task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    remaining_ms: u32,
    task: T,
}

/// Fixed-timestep delayed-task queue
///
/// Tasks fire from [`advance`](Scheduler::advance) once their delay has
/// fully elapsed, soonest first; ties fire in scheduling order. A task
/// scheduled with a zero delay fires on the next advance, never
/// synchronously.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    // Kept sorted by remaining time so advance can drain from the front.
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Queue `task` to fire after `delay_ms`
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let at = self
            .entries
            .iter()
            .position(|entry| entry.remaining_ms > delay_ms)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            Entry {
                id,
                remaining_ms: delay_ms,
                task,
            },
        );
        id
    }

    /// Remove a pending task, returning it if it had not fired yet
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        let at = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(at).task)
    }

    /// Advance every pending task by `elapsed_ms` and return the ones now due
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<T> {
        for entry in &mut self.entries {
            entry.remaining_ms = entry.remaining_ms.saturating_sub(elapsed_ms);
        }
        let due = self
            .entries
            .iter()
            .take_while(|entry| entry.remaining_ms == 0)
            .count();
        self.entries.drain(..due).map(|entry| entry.task).collect()
    }

    /// Number of tasks still waiting to fire
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
