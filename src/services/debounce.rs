use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Single-slot debounce timer
///
/// Holds at most one scheduled query. Scheduling replaces whatever was in the
/// slot, so only the most recent query can ever fire.
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    slot: Option<Scheduled>,
}

#[derive(Debug)]
struct Scheduled {
    deadline: Instant,
    query: String,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, slot: None }
    }

    /// Schedules `query` to fire after the delay, cancelling any earlier schedule.
    ///
    /// Returns the query that was replaced, if any.
    pub fn schedule(&mut self, query: String) -> Option<String> {
        let replaced = self.cancel();
        self.slot = Some(Scheduled {
            deadline: Instant::now() + self.delay,
            query,
        });
        replaced
    }

    /// Clears the slot, returning the query that will no longer fire
    pub fn cancel(&mut self) -> Option<String> {
        self.slot.take().map(|scheduled| scheduled.query)
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.slot.as_ref().map(|scheduled| scheduled.query.as_str())
    }

    /// Waits for the scheduled deadline and takes the query out of the slot.
    ///
    /// Never resolves while the slot is empty. Cancel safe: dropping the future
    /// before the deadline leaves the slot untouched.
    pub async fn fired(&mut self) -> String {
        let deadline = match &self.slot {
            Some(scheduled) => scheduled.deadline,
            None => std::future::pending().await,
        };

        sleep_until(deadline).await;

        match self.slot.take() {
            Some(scheduled) => scheduled.query,
            None => std::future::pending().await,
        }
    }
}
