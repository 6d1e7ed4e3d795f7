//! Tasks deferred until after the next layout pass
//!
//! Some recomputations need measurements that only exist once the
//! environment has rendered the latest state (a removed header still
//! occupies space until then). Those are queued here and the environment
//! drains the queue once layout has settled.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

type Task = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
pub struct FrameQueue {
    tasks: Arc<Mutex<VecDeque<Task>>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to run after the next layout pass
    pub fn schedule<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.lock().push_back(Box::new(task));
    }

    /// Number of tasks waiting for the next layout pass
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Run every task queued before this call, in scheduling order.
    ///
    /// Tasks scheduled while the batch runs wait for the following pass.
    pub fn run_after_layout(&self) -> usize {
        let batch: Vec<Task> = self.tasks.lock().drain(..).collect();
        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            tracing::trace!(count, "Ran deferred layout tasks");
        }
        count
    }
}

impl Clone for FrameQueue {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
        }
    }
}

impl std::fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
