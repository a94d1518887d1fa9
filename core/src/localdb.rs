// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod attestations;
mod bell_periods;
mod lessons;
mod notes;
mod tasks;
mod template_slots;

use std::path::Path;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::watch;

pub use crate::localdb::attestations::Attestations;
pub use crate::localdb::bell_periods::BellPeriods;
pub use crate::localdb::lessons::Lessons;
pub use crate::localdb::notes::Notes;
pub use crate::localdb::tasks::Tasks;
pub use crate::localdb::template_slots::TemplateSlots;
use crate::ScheduleError;

/// Local SQLite store with one repository per logical table.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,
    changes: ChangeFeed,

    pub bell_periods: BellPeriods,
    pub template_slots: TemplateSlots,
    pub lessons: Lessons,
    pub tasks: Tasks,
    pub attestations: Attestations,
    pub notes: Notes,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, ScheduleError> {
        let (options, pool_options) = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            let filename = filename
                .to_str()
                .ok_or_else(|| ScheduleError::InvalidPath(filename.display().to_string()))?;
            let options = SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new())
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            // a single connection that never expires, every new connection would see an
            // empty database
            let options = SqliteConnectOptions::new().in_memory(true);
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
            (options, pool_options)
        };

        let pool = pool_options.connect_with(options).await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await?;

        let changes = ChangeFeed::new();
        Ok(LocalDb {
            bell_periods: BellPeriods::new(pool.clone(), changes.clone()),
            template_slots: TemplateSlots::new(pool.clone(), changes.clone()),
            lessons: Lessons::new(pool.clone(), changes.clone()),
            tasks: Tasks::new(pool.clone(), changes.clone()),
            attestations: Attestations::new(pool.clone(), changes.clone()),
            notes: Notes::new(pool.clone(), changes.clone()),
            changes,
            pool,
        })
    }

    /// Subscribes to the revision counter, bumped after every committed write.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub async fn close(self) {
        tracing::debug!("closing database connection");
        self.pool.close().await;
    }
}

/// Revision counter shared by all repositories of one database.
#[derive(Debug, Clone)]
pub(crate) struct ChangeFeed(Arc<watch::Sender<u64>>);

impl ChangeFeed {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        ChangeFeed(Arc::new(tx))
    }

    pub(crate) fn notify(&self) {
        self.0.send_modify(|revision| *revision += 1);
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.0.subscribe()
    }
}
