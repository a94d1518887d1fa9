// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use lessonbook_core::BellPeriod;

use crate::{
    arg::ArgOutputFormat,
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
};

#[derive(Debug)]
pub struct BellFormatter {
    format: ArgOutputFormat,
}

impl BellFormatter {
    const COLUMNS: [BellColumn; 4] = [
        BellColumn::Period,
        BellColumn::Start,
        BellColumn::End,
        BellColumn::Active,
    ];

    pub fn new(format: ArgOutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, periods: &'a [BellPeriod]) -> Display<'a> {
        Display {
            periods,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    periods: &'a [BellPeriod],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &BellFormatter::COLUMNS;
        match self.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.periods)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new().with_header(true), columns, self.periods)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BellColumn {
    Period,
    Start,
    End,
    Active,
}

impl TableColumn<BellPeriod> for BellColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            BellColumn::Period => "Period",
            BellColumn::Start => "Start",
            BellColumn::End => "End",
            BellColumn::Active => "Active",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a BellPeriod) -> Cow<'a, str> {
        match self {
            BellColumn::Period => data.number.to_string().into(),
            BellColumn::Start => data.start.to_string().into(),
            BellColumn::End => data.end.to_string().into(),
            BellColumn::Active => if data.active { "yes" } else { "no" }.into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            BellColumn::Period => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &BellPeriod) -> Option<Color> {
        (!data.active).then_some(Color::BrightBlack)
    }
}
