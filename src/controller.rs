//! View state for the process window.
//!
//! `ProcessController` owns everything the UI renders: the current progress
//! percentage, the handle of the in-flight task (if any), and the terminal
//! notice from the most recent run. The UI calls [`ProcessController::poll`]
//! once per frame to drain worker events; all state mutation happens on the
//! UI thread.

use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use crate::worker::{self, TaskHandle, TaskOutcome, WorkerEvent};

/// Terminal notification for a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskNotice {
    /// Window title for the notice.
    pub title: &'static str,
    /// User-facing message body.
    pub message: &'static str,
}

/// Notice shown when a run finishes all ten steps.
pub const COMPLETED_NOTICE: TaskNotice = TaskNotice {
    title: "Process Completed",
    message: "Process completed normally.",
};

/// Notice shown when a run stops at a cancel request.
pub const CANCELLED_NOTICE: TaskNotice = TaskNotice {
    title: "Process Cancelled",
    message: "Process was cancelled.",
};

/// Observable state behind the Process/Cancel buttons.
#[derive(Default)]
pub struct ProcessController {
    task: Option<TaskHandle>,
    progress: u8,
    notice: Option<TaskNotice>,
}

impl ProcessController {
    /// Create an idle controller with zero progress and no notice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the simulated process if none is running; otherwise do nothing.
    ///
    /// A redundant start is silently ignored: the running task keeps its
    /// progress and no second task is queued.
    pub fn start(&mut self) {
        self.start_with_delay(worker::STEP_DELAY);
    }

    /// Start with a caller-chosen step delay (test seam).
    pub fn start_with_delay(&mut self, step_delay: Duration) {
        if self.task.is_some() {
            tracing::debug!("Start ignored; a process is already running");
            return;
        }
        tracing::info!("Starting process");
        self.notice = None;
        self.progress = 0;
        self.task = Some(worker::spawn_task_with_delay(step_delay));
    }

    /// Request cooperative cancellation of the running task; no-op when idle.
    pub fn cancel(&mut self) {
        if let Some(task) = &self.task {
            tracing::info!("Cancelling process");
            task.request_cancel();
        }
    }

    /// Drain pending worker events. Call once per UI frame.
    pub fn poll(&mut self) {
        let Some(task) = &self.task else {
            return;
        };
        let mut finished = None;
        let mut run_over = false;
        loop {
            match task.try_recv() {
                Ok(WorkerEvent::Progress(percent)) => self.progress = percent,
                Ok(WorkerEvent::Finished(outcome)) => {
                    finished = Some(outcome);
                    run_over = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Worker never started or died without a terminal event;
                    // treat the run as over with nothing to announce.
                    run_over = true;
                    break;
                }
            }
        }
        if run_over {
            self.task = None;
            self.progress = 0;
            if let Some(outcome) = finished {
                let notice = match outcome {
                    TaskOutcome::Completed => COMPLETED_NOTICE,
                    TaskOutcome::Cancelled => CANCELLED_NOTICE,
                };
                tracing::info!("{}", notice.message);
                self.notice = Some(notice);
            }
        }
    }

    /// Current progress percentage in `0..=100`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Whether a task is currently in flight.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Terminal notice from the most recent run, until dismissed.
    pub fn notice(&self) -> Option<TaskNotice> {
        self.notice
    }

    /// Clear the terminal notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
