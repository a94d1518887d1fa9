// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{ClockTime, ScheduleError};

/// A test, exam or other graded event on a given date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Attestation {
    pub id: i64,
    pub subject: String,

    /// Free-form kind, e.g. "test" or "exam".
    pub kind: String,

    pub date: Date,
    pub time: Option<ClockTime>,
    pub room: String,
    pub description: String,
}

/// An attestation about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationDraft {
    pub subject: String,
    pub kind: String,
    pub date: Date,
    pub time: Option<ClockTime>,
    pub room: String,
    pub description: String,
}

impl AttestationDraft {
    pub fn new(subject: impl Into<String>, date: Date) -> Self {
        AttestationDraft {
            subject: subject.into(),
            kind: String::new(),
            date,
            time: None,
            room: String::new(),
            description: String::new(),
        }
    }

    pub(crate) fn normalized(&self) -> Result<AttestationDraft, ScheduleError> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(ScheduleError::Blank("attestation subject"));
        }

        Ok(AttestationDraft {
            subject: subject.to_string(),
            kind: self.kind.trim().to_string(),
            date: self.date,
            time: self.time,
            room: self.room.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}
