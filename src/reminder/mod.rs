//! Daily reminder scheduling.
//!
//! The reminder is a background worker that sleeps until the configured
//! `HH:MM` local time, fires a callback, and reschedules itself for the
//! following day. The worker is owned through a [`ReminderHandle`];
//! [`ReminderScheduler::schedule`] always cancels the previous handle before
//! creating the next one, so repeated configuration changes leave at most
//! one pending timer. Delivery is best-effort: nothing persists between
//! process runs, and a restarted process recomputes the next occurrence from
//! configuration.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// The next local instant at which the reminder time occurs.
///
/// Today's occurrence when it is still ahead of `now`, otherwise tomorrow's.
/// An occurrence exactly at `now` counts as already passed.
pub fn next_occurrence(now: NaiveDateTime, reminder_time: NaiveTime) -> NaiveDateTime {
    let candidate = now.date().and_time(reminder_time);
    if candidate > now {
        candidate
    } else {
        candidate + Duration::days(1)
    }
}

/// Owner of one pending reminder worker.
///
/// Dropping the handle disconnects the worker's cancel channel, stopping it
/// at its next wakeup; [`ReminderHandle::cancel`] additionally joins the
/// worker so the caller knows it is gone.
pub struct ReminderHandle {
    cancel: Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl ReminderHandle {
    /// Stops the worker and waits for it to exit.
    pub fn cancel(mut self) {
        let _ = self.cancel.send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Schedules the daily reminder, enforcing cancel-and-replace.
///
/// There is at most one pending worker per scheduler; scheduling again
/// replaces the previous worker instead of stacking a second timer next to
/// it.
#[derive(Default)]
pub struct ReminderScheduler {
    pending: Option<ReminderHandle>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a daily worker firing `on_fire` at `reminder_time` local time.
    ///
    /// Any previously scheduled worker is cancelled first.
    pub fn schedule<F>(&mut self, reminder_time: NaiveTime, on_fire: F)
    where
        F: Fn() + Send + 'static,
    {
        self.cancel();

        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let worker = thread::spawn(move || loop {
            let now = Local::now().naive_local();
            let next = next_occurrence(now, reminder_time);
            let wait = (next - now).to_std().unwrap_or_default();
            debug!("Next reminder in {:?}", wait);

            match cancel_rx.recv_timeout(wait) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => on_fire(),
            }
        });

        self.pending = Some(ReminderHandle {
            cancel: cancel_tx,
            worker: Some(worker),
        });
    }

    /// Cancels the pending worker, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    /// Whether a worker is currently pending.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
