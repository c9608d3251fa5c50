//! # Faqbot Reply Scheduler
//!
//! File: cli/src/chat/scheduler.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The widget pretends to type: a bot reply is appended only after a short,
//! fixed delay. `ReplyScheduler` is the seam for that delay. It runs a task
//! once, later, without blocking the caller, and hands back a
//! `ScheduledTask` that can cancel it.
//!
//! `TokioScheduler` is the implementation used by the binary: each task is a
//! spawned future that sleeps on the tokio clock and then runs. Under a
//! paused test clock (`#[tokio::test(start_paused = true)]`) the delay is
//! virtual, which keeps controller tests instant and deterministic.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use faqbot::chat::scheduler::{ReplyScheduler, TokioScheduler};
//! use std::time::Duration;
//!
//! # async fn run() -> faqbot::core::error::Result<()> {
//! let scheduler = TokioScheduler::current()?;
//! let task = scheduler.schedule(Duration::from_millis(500), Box::new(|| println!("typed!")));
//! // The widget went away before the reply was due.
//! task.cancel();
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{FaqbotError, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

/// Work to run once the delay has elapsed.
pub type ReplyTask = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay, each on its own timer.
pub trait ReplyScheduler {
    /// Queues `task` to run exactly once after `delay`. Never blocks.
    fn schedule(&self, delay: Duration, task: ReplyTask) -> ScheduledTask;
}

/// Handle to a scheduled task.
///
/// Dropping the handle does not cancel the task; call `cancel`.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Cancels the task. A task whose delay has not elapsed will never run;
    /// cancelling a finished task is a no-op.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            trace!("Cancelling scheduled reply");
            self.handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Scheduler backed by tokio timers on a given runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Uses the runtime the caller is running on.
    ///
    /// ## Errors
    ///
    /// Returns `FaqbotError::SchedulerUnavailable` outside a tokio runtime.
    pub fn current() -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| FaqbotError::SchedulerUnavailable)?;
        Ok(Self::new(runtime))
    }
}

impl ReplyScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ReplyTask) -> ScheduledTask {
        trace!(?delay, "Scheduling reply");
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        ScheduledTask { handle }
    }
}
