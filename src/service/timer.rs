//! One-shot timers keyed on absolute instants.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

/// A task that runs once at `deadline`.
///
/// Cancelling stops a pending timer. Once the deadline has passed the task
/// counts as fired and cancelling leaves it running to completion.
#[derive(Debug)]
pub struct OneShotTimer {
    deadline: DateTime<Utc>,
    fired: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl OneShotTimer {
    /// Spawns `task` to run at `deadline`, measured from `now`.
    ///
    /// A deadline at or before `now` fires on the next tick.
    pub fn schedule<F>(deadline: DateTime<Utc>, now: DateTime<Utc>, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = (deadline - now).to_std().unwrap_or_default();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flag.store(true, Ordering::SeqCst);
            task.await;
        });
        Self {
            deadline,
            fired,
            handle,
        }
    }

    /// Instant the timer fires at.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Whether the deadline has been reached.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Stops the timer if it has not fired. Returns whether it was stopped.
    pub fn cancel(&self) -> bool {
        if self.is_fired() {
            return false;
        }
        self.handle.abort();
        true
    }
}
