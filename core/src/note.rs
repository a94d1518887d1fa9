// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;

use crate::ScheduleError;

/// Title given to notes saved without one.
pub const UNTITLED_NOTE: &str = "Untitled";

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// A note about to be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    /// A note needs a title or some content. A missing title becomes [`UNTITLED_NOTE`].
    pub(crate) fn normalized(&self) -> Result<NoteDraft, ScheduleError> {
        let title = self.title.trim();
        if title.is_empty() && self.content.trim().is_empty() {
            return Err(ScheduleError::Blank("note"));
        }

        Ok(NoteDraft {
            title: match title {
                "" => UNTITLED_NOTE.to_string(),
                title => title.to_string(),
            },
            content: self.content.clone(),
        })
    }
}
