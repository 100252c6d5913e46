use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that can run a task once after a delay and cancel it before then.
pub trait Scheduler {
    type Handle: Send + 'static;

    /// Returns `None` when the task could not be scheduled; the task is dropped.
    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Option<TimeoutHandle> {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("could not schedule task: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Fire-once tasks bound to the lifetime of one owner (usually a component).
///
/// After [`TaskGroup::cancel_all`] every pending task is cancelled, new tasks
/// are dropped, and a task that still manages to fire does nothing.
pub struct TaskGroup<S: Scheduler> {
    scheduler: S,
    live: Arc<AtomicBool>,
    pending: Arc<Mutex<Vec<S::Handle>>>,
}

// handles stay behind the shared `Arc`; only the scheduler is cloned
impl<S: Scheduler + Clone> Clone for TaskGroup<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            live: Arc::clone(&self.live),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<S: Scheduler> TaskGroup<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            live: Arc::new(AtomicBool::new(true)),
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn spawn_after(&self, delay: Duration, task: impl FnOnce() + 'static) {
        if !self.is_live() {
            log::debug!("dropping task scheduled after teardown");
            return;
        }
        let live = Arc::clone(&self.live);
        let guarded: Task = Box::new(move || {
            if live.load(Ordering::Acquire) {
                task();
            }
        });
        if let Some(handle) = self.scheduler.schedule(delay, guarded) {
            self.pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(handle);
        }
    }

    /// Tears the group down. Safe to call more than once.
    pub fn cancel_all(&self) {
        if !self.live.swap(false, Ordering::AcqRel) {
            return;
        }
        let handles = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in handles {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
