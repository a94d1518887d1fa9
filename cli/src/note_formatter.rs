// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use jiff::tz::TimeZone;
use lessonbook_core::Note;

use crate::{
    arg::ArgOutputFormat,
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
};

#[derive(Debug)]
pub struct NoteFormatter {
    format: ArgOutputFormat,
    columns: [NoteColumn; 4],
}

impl NoteFormatter {
    pub fn new(format: ArgOutputFormat) -> Self {
        Self::with_time_zone(format, TimeZone::system())
    }

    /// Shows creation times in the given zone instead of the system one.
    pub fn with_time_zone(format: ArgOutputFormat, tz: TimeZone) -> Self {
        Self {
            format,
            columns: [
                NoteColumn::Id,
                NoteColumn::Created(tz),
                NoteColumn::Title,
                NoteColumn::Content,
            ],
        }
    }

    pub fn format<'a>(&'a self, notes: &'a [Note]) -> Display<'a> {
        Display {
            notes,
            columns: &self.columns,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    notes: &'a [Note],
    columns: &'a [NoteColumn],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), self.columns, self.notes)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), self.columns, self.notes)
            ),
        }
    }
}

#[derive(Debug, Clone)]
enum NoteColumn {
    Id,
    Created(TimeZone),
    Title,
    /// First line of the content only.
    Content,
}

impl TableColumn<Note> for NoteColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            NoteColumn::Id => "Id",
            NoteColumn::Created(_) => "Created",
            NoteColumn::Title => "Title",
            NoteColumn::Content => "Content",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Note) -> Cow<'a, str> {
        match self {
            NoteColumn::Id => data.id.to_string().into(),
            NoteColumn::Created(tz) => data
                .created_at
                .to_zoned(tz.clone())
                .strftime("%Y-%m-%d %H:%M")
                .to_string()
                .into(),
            NoteColumn::Title => data.title.as_str().into(),
            NoteColumn::Content => data.content.lines().next().unwrap_or_default().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            NoteColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
