use std::time::Duration;

pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the same thread.
pub trait Scheduler {
    type Handle: TaskHandle;

    /// Returns `None` if the task could not be scheduled.
    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle>;
}

pub trait TaskHandle {
    /// Prevents the task from running.
    ///
    /// Cancelling a task that already ran has no effect.
    fn cancel(self);
}
