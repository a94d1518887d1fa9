// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Coalesces bursts of edits into a single regeneration.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use jiff::civil::Date;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::localdb::LocalDb;
use crate::{MaterializeWindow, ParityRule, ScheduleError, materialize};

#[derive(Debug)]
enum Message {
    Trigger,
    Flush(oneshot::Sender<()>),
}

/// Background task that regenerates the materialized window once edits go quiet.
///
/// Runs never overlap: triggers arriving while a run is in flight queue up and cause exactly
/// one follow-up run.
#[derive(Debug)]
pub struct Regenerator {
    tx: mpsc::UnboundedSender<Message>,
    handle: JoinHandle<()>,
    runs: Arc<AtomicU64>,
}

impl Regenerator {
    /// Spawns the task on the current tokio runtime.
    pub fn spawn(
        db: LocalDb,
        today: Date,
        window: MaterializeWindow,
        rule: ParityRule,
        quiet: Duration,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let runs = Arc::new(AtomicU64::new(0));
        let job = Job {
            db,
            today,
            window,
            rule,
            runs: runs.clone(),
        };
        let handle = tokio::spawn(job.run_loop(rx, quiet));
        Regenerator { tx, handle, runs }
    }

    /// Requests a regeneration without waiting for it.
    pub fn trigger(&self) -> Result<(), ScheduleError> {
        self.tx
            .send(Message::Trigger)
            .map_err(|_| ScheduleError::WorkerStopped)
    }

    /// Runs pending work right away and waits until it is done.
    pub async fn flush(&self) -> Result<(), ScheduleError> {
        let (done, wait) = oneshot::channel();
        self.tx
            .send(Message::Flush(done))
            .map_err(|_| ScheduleError::WorkerStopped)?;
        wait.await.map_err(|_| ScheduleError::WorkerStopped)
    }

    /// Number of regenerations completed so far, failed ones included.
    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::Acquire)
    }

    /// Runs pending work and stops the task.
    pub async fn shutdown(self) -> Result<(), ScheduleError> {
        drop(self.tx);
        self.handle.await.map_err(|err| {
            tracing::error!(%err, "regeneration worker panicked");
            ScheduleError::WorkerStopped
        })
    }
}

struct Job {
    db: LocalDb,
    today: Date,
    window: MaterializeWindow,
    rule: ParityRule,
    runs: Arc<AtomicU64>,
}

impl Job {
    async fn run_loop(self, mut rx: mpsc::UnboundedReceiver<Message>, quiet: Duration) {
        let mut pending = false;
        loop {
            if !pending {
                match rx.recv().await {
                    Some(Message::Trigger) => pending = true,
                    Some(Message::Flush(done)) => {
                        let _ = done.send(());
                    }
                    None => break,
                }
                continue;
            }

            tokio::select! {
                biased;

                msg = rx.recv() => match msg {
                    // restarts the quiet period
                    Some(Message::Trigger) => {}
                    Some(Message::Flush(done)) => {
                        self.regenerate().await;
                        pending = false;
                        let _ = done.send(());
                    }
                    None => {
                        self.regenerate().await;
                        break;
                    }
                },
                _ = tokio::time::sleep(quiet) => {
                    self.regenerate().await;
                    pending = false;
                }
            }
        }
        tracing::debug!("regeneration worker stopped");
    }

    async fn regenerate(&self) {
        if let Err(err) = materialize(&self.db, self.today, &self.window, &self.rule).await {
            tracing::error!(%err, "schedule regeneration failed");
        }
        self.runs.fetch_add(1, Ordering::Release);
    }
}
