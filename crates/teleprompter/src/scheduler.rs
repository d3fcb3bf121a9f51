use std::time::Duration;

use chortle_caption::CaptionChunk;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::Cadence;
use crate::prompter::{Teleprompter, TeleprompterState};
use crate::view::TeleprompterFrame;

/// What subscribers see. `session` changes on every start and stop so a
/// late tick from a replaced run can be told apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerSnapshot {
    pub session: u64,
    pub state: TeleprompterState,
    pub frame: Option<TeleprompterFrame>,
}

/// Drives a [`Teleprompter`] on a fixed cadence from a background task.
///
/// At most one run is active; starting again cancels the previous one.
/// Dropping the scheduler cancels its run.
pub struct Scheduler {
    cadence: Cadence,
    tx: watch::Sender<SchedulerSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(cadence: Cadence) -> Self {
        let (tx, _rx) = watch::channel(SchedulerSnapshot::default());
        Self {
            cadence,
            tx,
            task: None,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn subscribe(&self) -> watch::Receiver<SchedulerSnapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SchedulerSnapshot {
        self.tx.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.tx.borrow().state == TeleprompterState::Running
    }

    /// Show the first chunk now and reveal the rest one per cadence tick.
    ///
    /// Must be called inside a tokio runtime. Returns `false`, changing
    /// nothing, when `chunks` is empty.
    pub fn start(&mut self, chunks: Vec<CaptionChunk>) -> bool {
        if chunks.is_empty() {
            tracing::debug!("scheduler_start_skipped_empty");
            return false;
        }

        self.stop();

        let total = chunks.len();
        let mut prompter = Teleprompter::new();
        let first = prompter.start(chunks);

        let mut session = 0;
        self.tx.send_modify(|snap| {
            snap.session += 1;
            snap.state = prompter.state();
            snap.frame = first;
            session = snap.session;
        });

        let period = self.cadence.interval();
        tracing::debug!(
            session,
            chunks = total,
            interval_ms = period.as_millis() as u64,
            "teleprompter_started"
        );

        self.task = Some(tokio::spawn(run(prompter, session, period, self.tx.clone())));
        true
    }

    /// Cancel the active run and clear the display. Idempotent.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }

        let stopped = self.tx.send_if_modified(|snap| {
            if snap.state == TeleprompterState::Idle && snap.frame.is_none() {
                return false;
            }
            snap.session += 1;
            snap.state = TeleprompterState::Idle;
            snap.frame = None;
            true
        });

        if stopped {
            tracing::debug!("teleprompter_stopped");
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run(
    mut prompter: Teleprompter,
    session: u64,
    period: Duration,
    tx: watch::Sender<SchedulerSnapshot>,
) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let frame = prompter.advance();
        let state = prompter.state();

        let published = tx.send_if_modified(|snap| {
            if snap.session != session {
                return false;
            }
            snap.state = state;
            if frame.is_some() {
                snap.frame = frame;
            }
            true
        });

        if !published {
            tracing::trace!(session, "teleprompter_tick_superseded");
            break;
        }
        if state != TeleprompterState::Running {
            tracing::debug!(session, "teleprompter_finished");
            break;
        }
    }
}
