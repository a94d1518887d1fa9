// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use lessonbook_core::Attestation;

use crate::{
    arg::ArgOutputFormat,
    table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson},
};

#[derive(Debug)]
pub struct AttestationFormatter {
    format: ArgOutputFormat,
}

impl AttestationFormatter {
    const COLUMNS: [AttestationColumn; 6] = [
        AttestationColumn::Id,
        AttestationColumn::Date,
        AttestationColumn::Time,
        AttestationColumn::Subject,
        AttestationColumn::Kind,
        AttestationColumn::Room,
    ];

    pub fn new(format: ArgOutputFormat) -> Self {
        Self { format }
    }

    pub fn format<'a>(&'a self, attestations: &'a [Attestation]) -> Display<'a> {
        Display {
            attestations,
            format: self.format,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    attestations: &'a [Attestation],
    format: ArgOutputFormat,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &AttestationFormatter::COLUMNS;
        match self.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.attestations)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.attestations)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AttestationColumn {
    Id,
    Date,
    Time,
    Subject,
    Kind,
    Room,
}

impl TableColumn<Attestation> for AttestationColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            AttestationColumn::Id => "Id",
            AttestationColumn::Date => "Date",
            AttestationColumn::Time => "Time",
            AttestationColumn::Subject => "Subject",
            AttestationColumn::Kind => "Kind",
            AttestationColumn::Room => "Room",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Attestation) -> Cow<'a, str> {
        match self {
            AttestationColumn::Id => data.id.to_string().into(),
            AttestationColumn::Date => data.date.to_string().into(),
            AttestationColumn::Time => match data.time {
                Some(time) => time.to_string().into(),
                None => "--:--".into(),
            },
            AttestationColumn::Subject => data.subject.as_str().into(),
            AttestationColumn::Kind => data.kind.as_str().into(),
            AttestationColumn::Room => data.room.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            AttestationColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_attestation_formatter_table() {
        let attestations = [
            Attestation {
                id: 3,
                subject: "Math".to_string(),
                kind: "test".to_string(),
                date: date(2026, 11, 2),
                time: None,
                room: "201".to_string(),
                description: String::new(),
            },
            Attestation {
                id: 4,
                subject: "Physics".to_string(),
                kind: "exam".to_string(),
                date: date(2026, 12, 15),
                time: Some("09:00".parse().unwrap()),
                room: "105".to_string(),
                description: String::new(),
            },
        ];

        let out = AttestationFormatter::new(ArgOutputFormat::Table)
            .format(&attestations)
            .to_string();

        assert_eq!(
            out,
            "3 2026-11-02 --:-- Math    test 201\n4 2026-12-15 09:00 Physics exam 105\n"
        );
    }
}
