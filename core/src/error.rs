// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::WeekParity;

/// Errors raised by the schedule core.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Storage failure, surfaced to the caller without retry.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure while opening the database.
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Calendar arithmetic failed.
    #[error("Date error: {0}")]
    Date(#[from] jiff::Error),

    /// A bell period set rejected by `replace_all`.
    #[error("Invalid bell period {number}: {reason}")]
    InvalidBellPeriod {
        /// The offending period number
        number: u8,
        /// Why it was rejected
        reason: String,
    },

    /// A template slot submitted to the template of the other parity.
    #[error("Template slot for the {got} week submitted to the {expected} week template")]
    ParityMismatch {
        /// The parity of the template being replaced
        expected: WeekParity,
        /// The parity carried by the slot
        got: WeekParity,
    },

    /// A lesson submitted for a date it is not dated on.
    #[error("Lesson dated {got} submitted for {expected}")]
    DateMismatch {
        /// The date being replaced
        expected: jiff::civil::Date,
        /// The date carried by the lesson
        got: jiff::civil::Date,
    },

    /// A time that is not `HH:MM`.
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    /// A period number outside 1..=8.
    #[error("Invalid period number '{0}', expected 1-8")]
    InvalidPeriod(String),

    /// A day outside Monday..Saturday.
    #[error("Invalid day of week '{0}', expected 1-6 or Monday..Saturday")]
    InvalidDay(String),

    /// A week parity that is neither even nor odd.
    #[error("Invalid week parity '{0}', expected 'even' or 'odd'")]
    InvalidParity(String),

    /// A required text field left empty.
    #[error("The {0} must not be blank")]
    Blank(&'static str),

    /// An id that matches no stored entry.
    #[error("No {kind} with id {id}")]
    NotFound {
        /// What was looked up, e.g. "task"
        kind: &'static str,
        /// The id given
        id: i64,
    },

    /// Filesystem failure while preparing the state directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path that cannot be expanded or handed to SQLite.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The background regeneration task is gone.
    #[error("Regeneration worker has stopped")]
    WorkerStopped,
}
