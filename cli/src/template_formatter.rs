// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use lessonbook_core::TemplateSlot;

use crate::{
    arg::ArgOutputFormat,
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
};

#[derive(Debug)]
pub struct TemplateFormatter {
    format: ArgOutputFormat,
}

impl TemplateFormatter {
    const COLUMNS: [SlotColumn; 5] = [
        SlotColumn::Day,
        SlotColumn::Period,
        SlotColumn::Subject,
        SlotColumn::Teacher,
        SlotColumn::Room,
    ];

    pub fn new(format: ArgOutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, slots: &'a [TemplateSlot]) -> Display<'a> {
        Display {
            slots,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    slots: &'a [TemplateSlot],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &TemplateFormatter::COLUMNS;
        match self.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.slots)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.slots)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SlotColumn {
    Day,
    Period,
    Subject,
    Teacher,
    Room,
}

impl TableColumn<TemplateSlot> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SlotColumn::Day => "Day",
            SlotColumn::Period => "Period",
            SlotColumn::Subject => "Subject",
            SlotColumn::Teacher => "Teacher",
            SlotColumn::Room => "Room",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a TemplateSlot) -> Cow<'a, str> {
        match self {
            SlotColumn::Day => data.day.short_name().into(),
            SlotColumn::Period => data.period.to_string().into(),
            SlotColumn::Subject if data.is_blank() => "-".into(),
            SlotColumn::Subject => data.subject.as_str().into(),
            SlotColumn::Teacher => data.teacher.as_str().into(),
            SlotColumn::Room => data.room.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SlotColumn::Period => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
