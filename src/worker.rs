//! Background runner for the simulated process task.
//!
//! The task itself is a counted loop: ten steps, each reporting a progress
//! percentage and pausing before the next. Cancellation is cooperative; the
//! loop checks a shared flag at every step boundary, so a cancel request can
//! lag by up to one step delay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Number of steps the simulated task performs.
pub const STEP_COUNT: u32 = 10;
/// Pause after each progress report so the bar is visibly animated.
pub const STEP_DELAY: Duration = Duration::from_millis(500);

/// Final disposition of a single task run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskOutcome {
    /// All steps finished without a cancel request.
    Completed,
    /// The cancellation flag was observed at a step boundary.
    Cancelled,
}

/// Events emitted by the worker thread, in order; `Finished` is always last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerEvent {
    /// Percent complete, a multiple of ten in `10..=100`.
    Progress(u8),
    /// Terminal event for the run.
    Finished(TaskOutcome),
}

/// Handle to a running task: the cancellation flag plus the event stream.
///
/// Dropping the handle requests cancellation so an orphaned worker winds
/// down instead of sleeping through its remaining steps.
pub struct TaskHandle {
    cancel: Arc<AtomicBool>,
    events: Receiver<WorkerEvent>,
}

impl TaskHandle {
    /// Ask the running task to stop at its next step boundary.
    pub fn request_cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Non-blocking read of the next pending worker event.
    pub fn try_recv(&self) -> Result<WorkerEvent, TryRecvError> {
        self.events.try_recv()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Spawn the simulated task with a caller-chosen step delay.
///
/// Production callers pass [`STEP_DELAY`]; tests run the loop in
/// milliseconds.
pub fn spawn_task_with_delay(step_delay: Duration) -> TaskHandle {
    let cancel = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    let thread_cancel = Arc::clone(&cancel);
    let spawn_result = thread::Builder::new()
        .name("process-worker".to_string())
        .spawn(move || run_steps(&thread_cancel, tx, step_delay));
    if let Err(err) = spawn_result {
        // The sender is dropped with the failed closure, so the holder of
        // the handle sees a disconnected channel and treats the run as over.
        tracing::error!("Process worker failed to start: {err}");
    }

    TaskHandle { cancel, events: rx }
}

fn run_steps(cancel: &AtomicBool, events: Sender<WorkerEvent>, step_delay: Duration) {
    for step in 1..=STEP_COUNT {
        // Check the flag before reporting: a cancelled run must never
        // surface progress beyond its last completed step.
        if cancel.load(Ordering::Relaxed) {
            let _ = events.send(WorkerEvent::Finished(TaskOutcome::Cancelled));
            return;
        }
        let percent = (step * 10) as u8;
        if events.send(WorkerEvent::Progress(percent)).is_err() {
            // Receiver went away; nobody is watching this run anymore.
            return;
        }
        thread::sleep(step_delay);
    }
    let _ = events.send(WorkerEvent::Finished(TaskOutcome::Completed));
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECV_TIMEOUT: Duration = Duration::from_secs(5);

    fn drain_run(handle: &TaskHandle) -> (Vec<u8>, TaskOutcome) {
        let mut reported = Vec::new();
        loop {
            match handle.events.recv_timeout(RECV_TIMEOUT).expect("worker event") {
                WorkerEvent::Progress(percent) => reported.push(percent),
                WorkerEvent::Finished(outcome) => return (reported, outcome),
            }
        }
    }

    #[test]
    fn uncancelled_run_reports_every_step_in_order() {
        let handle = spawn_task_with_delay(Duration::from_millis(2));
        let (reported, outcome) = drain_run(&handle);
        assert_eq!(reported, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
        assert_eq!(outcome, TaskOutcome::Completed);
    }

    #[test]
    fn pre_set_flag_cancels_before_any_progress() {
        let cancel = AtomicBool::new(true);
        let (tx, rx) = mpsc::channel();
        run_steps(&cancel, tx, Duration::ZERO);
        assert_eq!(
            rx.try_recv(),
            Ok(WorkerEvent::Finished(TaskOutcome::Cancelled))
        );
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn cancel_after_third_step_stops_at_thirty_percent() {
        // The step delay is long enough that the cancel request lands while
        // the worker sleeps between steps three and four.
        let handle = spawn_task_with_delay(Duration::from_millis(50));
        let mut reported = Vec::new();
        loop {
            match handle.events.recv_timeout(RECV_TIMEOUT).expect("worker event") {
                WorkerEvent::Progress(percent) => {
                    reported.push(percent);
                    if percent == 30 {
                        handle.request_cancel();
                    }
                }
                WorkerEvent::Finished(outcome) => {
                    assert_eq!(outcome, TaskOutcome::Cancelled);
                    break;
                }
            }
        }
        assert_eq!(reported, vec![10, 20, 30]);
    }

    #[test]
    fn dropping_the_handle_requests_cancellation() {
        let handle = spawn_task_with_delay(Duration::from_millis(2));
        let cancel = Arc::clone(&handle.cancel);
        drop(handle);
        assert!(cancel.load(Ordering::Relaxed));
    }
}
