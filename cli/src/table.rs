// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A table of `data` rendered through `columns` in a given style.
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, C, T> Table<'a, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S, C, T> fmt::Display for Table<'_, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

/// Plain aligned columns, one row per line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        if columns.is_empty() {
            return Ok(());
        }

        let cells: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let mut widths: Vec<usize> = columns
            .iter()
            .map(|col| if self.header { col.name().width() } else { 0 })
            .collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = columns.len() - 1;
        if self.header {
            for (i, col) in columns.iter().enumerate() {
                let name = col.name();
                let cell = pad(&name, widths[i], col.padding_direction(), i == last);
                write!(f, "{}", cell.bold())?;
                if i < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }

        for (row, data) in cells.iter().zip(data) {
            for (i, (col, cell)) in columns.iter().zip(row).enumerate() {
                let cell = pad(cell, widths[i], col.padding_direction(), i == last);
                match col.get_color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                if i < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A JSON array of objects keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|row| {
                let object = columns
                    .iter()
                    .map(|col| {
                        let value = serde_json::Value::String(col.format(row).into_owned());
                        (col.name().into_owned(), value)
                    })
                    .collect();
                serde_json::Value::Object(object)
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = width.saturating_sub(cell.width());
    match direction {
        // last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
    }
}
